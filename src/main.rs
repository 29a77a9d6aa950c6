use iot_service::{config::Settings, scenario, service::IotService, utils};
use tokio::time::Instant;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::new()
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    utils::init_tracing(&settings.log.filter)?;

    let metrics = if settings.metrics.enabled {
        Some(iot_service::metrics::setup_metrics()?)
    } else {
        None
    };

    let service = IotService::new();
    let start = Instant::now();

    scenario::run_demo(&service, settings.device.delay()).await?;

    let report = iot_service::metrics::summary(start.elapsed(), metrics.as_ref());
    info!("Scenario finished");
    println!("{report}");

    Ok(())
}
