use config::Config;
use config::builder::{ConfigBuilder, DefaultState};
use serde::Deserialize;
use std::time::Duration;
use validator::Validate;

use crate::error::AppError;

#[derive(Debug, Deserialize, Validate)]
pub struct Settings {
    #[validate(nested)]
    pub device: DeviceSettings,
    #[validate(nested)]
    pub log: LogSettings,
    pub metrics: MetricsSettings,
}

#[derive(Debug, Deserialize, Validate)]
pub struct DeviceSettings {
    /// Simulated I/O latency of every device operation.
    #[validate(range(min = 1, max = 60_000))]
    pub delay_ms: u64,
}

impl DeviceSettings {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct LogSettings {
    #[validate(length(min = 1))]
    pub filter: String,
}

#[derive(Debug, Deserialize)]
pub struct MetricsSettings {
    pub enabled: bool,
}

impl Settings {
    pub fn new() -> Result<Self, AppError> {
        Self::build(
            Config::builder()
                .add_source(config::File::with_name("config/config").required(false))
                .add_source(
                    config::Environment::with_prefix("APP")
                        .prefix_separator("_")
                        .separator("__"),
                ),
        )
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, AppError> {
        let settings: Settings = builder
            .set_default("device.delay_ms", 500_i64)?
            .set_default("log.filter", "info")?
            .set_default("metrics.enabled", false)?
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }
}
