use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::RwLock;

use super::{DEFAULT_DELAY, close_link, handle_message, open_link};
use crate::{error::AppError, models::MessageKind};

const NAME: &str = "Hue Light";

pub struct HueLight {
    connected: RwLock<bool>,
    delay: Duration,
}

impl HueLight {
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            connected: RwLock::new(false),
            delay,
        }
    }

    pub async fn is_connected(&self) -> bool {
        *self.connected.read().await
    }
}

impl Default for HueLight {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl super::Device for HueLight {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn connect(&self) -> Result<(), AppError> {
        open_link(&self.connected, NAME, self.delay).await
    }

    async fn disconnect(&self) -> Result<(), AppError> {
        close_link(&self.connected, NAME, self.delay).await
    }

    async fn send_message(&self, kind: MessageKind, data: &str) -> Result<(), AppError> {
        handle_message(NAME, kind, data, self.delay).await;
        Ok(())
    }
}
