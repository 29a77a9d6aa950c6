mod hue_light;
mod smart_speaker;
mod smart_toilet;
#[cfg(test)]
pub(crate) mod testing;

pub use hue_light::HueLight;
pub use smart_speaker::SmartSpeaker;
pub use smart_toilet::SmartToilet;

use std::time::Duration;
use tokio::{sync::RwLock, time::sleep};
use tracing::info;

use crate::{error::AppError, models::MessageKind};

/// Stand-in for real I/O latency, shared by every device kind.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

#[async_trait::async_trait]
pub trait Device: Send + Sync {
    /// Human readable device name used in log output.
    fn name(&self) -> &'static str;

    /// Fails with [`AppError::AlreadyConnected`] on a connected device.
    async fn connect(&self) -> Result<(), AppError>;

    /// Fails with [`AppError::NotConnected`] on a disconnected device.
    async fn disconnect(&self) -> Result<(), AppError>;

    async fn send_message(&self, kind: MessageKind, data: &str) -> Result<(), AppError>;
}

/// Connection handshake shared by the stub devices: holds the flag for the
/// whole simulated delay so concurrent connects cannot both succeed.
pub(crate) async fn open_link(
    connected: &RwLock<bool>,
    name: &'static str,
    delay: Duration,
) -> Result<(), AppError> {
    let mut connected = connected.write().await;
    if *connected {
        return Err(AppError::AlreadyConnected(name));
    }
    info!("Connecting to {name}.");
    sleep(delay).await;
    *connected = true;
    info!("{name} connected.");
    Ok(())
}

pub(crate) async fn close_link(
    connected: &RwLock<bool>,
    name: &'static str,
    delay: Duration,
) -> Result<(), AppError> {
    let mut connected = connected.write().await;
    if !*connected {
        return Err(AppError::NotConnected(name));
    }
    info!("Disconnecting {name}.");
    sleep(delay).await;
    *connected = false;
    info!("{name} disconnected.");
    Ok(())
}

pub(crate) async fn handle_message(name: &str, kind: MessageKind, data: &str, delay: Duration) {
    info!("{name} handling message of type {kind} with data [{data}].");
    sleep(delay).await;
    info!("{name} received message.");
}
