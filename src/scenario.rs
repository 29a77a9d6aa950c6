use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::{
    devices::{Device, HueLight, SmartSpeaker, SmartToilet},
    error::AppError,
    models::{DeviceId, Message, MessageKind},
    orchestrator::{run_parallel, run_sequence},
    service::IotService,
};

pub const SONG: &str = "Rick Astley - Never Gonna Give You Up";

/// Ids handed out while setting up the demo.
#[derive(Debug, Clone, Copy)]
pub struct DemoDevices {
    pub hue_light: DeviceId,
    pub speaker: DeviceId,
    pub toilet: DeviceId,
}

/// Runs the demo against a Hue light, a smart speaker and a smart toilet.
pub async fn run_demo(service: &IotService, delay: Duration) -> Result<DemoDevices, AppError> {
    run_demo_with(
        service,
        [
            Arc::new(HueLight::with_delay(delay)),
            Arc::new(SmartSpeaker::with_delay(delay)),
            Arc::new(SmartToilet::with_delay(delay)),
        ],
    )
    .await
}

/// Registers the light, speaker and toilet (in that order) in parallel,
/// then runs the three programs in sequence.
pub async fn run_demo_with(
    service: &IotService,
    devices: [Arc<dyn Device>; 3],
) -> Result<DemoDevices, AppError> {
    let ids = run_parallel(devices.map(|device| service.register_device(device))).await?;
    let [hue_light, speaker, toilet] = <[DeviceId; 3]>::try_from(ids)
        .map_err(|ids| anyhow::anyhow!("expected 3 device ids, got {}", ids.len()))?;
    info!(%hue_light, %speaker, %toilet, "Devices registered");

    run_sequence(vec![
        run_parallel(vec![service.run_program(vec![
            Message::new(hue_light, MessageKind::SwitchOn),
            Message::new(speaker, MessageKind::SwitchOn),
        ])]),
        run_parallel(vec![service.run_program(vec![
            Message::with_data(speaker, MessageKind::PlaySong, SONG),
            Message::new(toilet, MessageKind::Flush),
        ])]),
        run_parallel(vec![service.run_program(vec![
            Message::new(hue_light, MessageKind::SwitchOff),
            Message::new(speaker, MessageKind::SwitchOff),
            Message::new(toilet, MessageKind::Clean),
        ])]),
    ])
    .await?;

    Ok(DemoDevices {
        hue_light,
        speaker,
        toilet,
    })
}
