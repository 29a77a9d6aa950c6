use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use super::Device;
use crate::{error::AppError, models::MessageKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Connect,
    Disconnect,
    Message(MessageKind, String),
}

/// Calls recorded across every device sharing it, in completion order.
pub type Journal = Arc<Mutex<Vec<(&'static str, Call)>>>;

/// Device double that records every call it receives.
pub struct RecordingDevice {
    name: &'static str,
    delay: Duration,
    journal: Journal,
}

impl RecordingDevice {
    pub fn new(name: &'static str, delay: Duration, journal: Journal) -> Self {
        Self { name, delay, journal }
    }

    fn record(&self, call: Call) {
        self.journal.lock().unwrap().push((self.name, call));
    }
}

#[async_trait]
impl Device for RecordingDevice {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn connect(&self) -> Result<(), AppError> {
        sleep(self.delay).await;
        self.record(Call::Connect);
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), AppError> {
        sleep(self.delay).await;
        self.record(Call::Disconnect);
        Ok(())
    }

    async fn send_message(&self, kind: MessageKind, data: &str) -> Result<(), AppError> {
        sleep(self.delay).await;
        self.record(Call::Message(kind, data.to_string()));
        Ok(())
    }
}

pub fn journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn calls_of(journal: &Journal, name: &str) -> Vec<Call> {
    journal
        .lock()
        .unwrap()
        .iter()
        .filter(|(device, _)| *device == name)
        .map(|(_, call)| call.clone())
        .collect()
}
