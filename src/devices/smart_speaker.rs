use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::RwLock;

use super::{DEFAULT_DELAY, close_link, handle_message, open_link};
use crate::{error::AppError, models::MessageKind};

const NAME: &str = "Smart Speaker";

pub struct SmartSpeaker {
    connected: RwLock<bool>,
    now_playing: RwLock<Option<String>>,
    delay: Duration,
}

impl SmartSpeaker {
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            connected: RwLock::new(false),
            now_playing: RwLock::new(None),
            delay,
        }
    }

    pub async fn is_connected(&self) -> bool {
        *self.connected.read().await
    }

    pub async fn now_playing(&self) -> Option<String> {
        self.now_playing.read().await.clone()
    }
}

impl Default for SmartSpeaker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl super::Device for SmartSpeaker {
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
        match kind {
            MessageKind::PlaySong => *self.now_playing.write().await = Some(data.to_string()),
            MessageKind::SwitchOff => *self.now_playing.write().await = None,
            _ => {}
        }
        Ok(())
    }
}
