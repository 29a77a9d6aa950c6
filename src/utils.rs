use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::AppError;

/// Log to stdout; `RUST_LOG` takes precedence over the configured filter.
pub fn init_tracing(filter: &str) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .map_err(|e| AppError::Validation(format!("Invalid log filter: {}", e)))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to initialize logging: {}", e)))
}
