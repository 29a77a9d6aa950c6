use dashmap::{DashMap, mapref::entry::Entry};
use metrics::{counter, gauge};
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    devices::Device,
    error::AppError,
    models::{DeviceId, Message},
};

/// Owns every registered device and dispatches programs to them.
#[derive(Default)]
pub struct IotService {
    devices: DashMap<DeviceId, Arc<dyn Device>>,
}

impl IotService {
    pub fn new() -> Self {
        Self {
            devices: DashMap::new(),
        }
    }

    /// Connects the device, then stores it under a freshly issued id.
    pub async fn register_device(&self, device: Arc<dyn Device>) -> Result<DeviceId, AppError> {
        device.connect().await?;

        let name = device.name();
        let id = loop {
            let id = DeviceId::new();
            if let Entry::Vacant(slot) = self.devices.entry(id) {
                slot.insert(device);
                break id;
            }
        };

        info!(%id, "{name} registered");
        counter!("iot_devices_registered_total").increment(1);
        gauge!("iot_devices_registered").increment(1.0);
        Ok(id)
    }

    pub async fn unregister_device(&self, id: DeviceId) -> Result<(), AppError> {
        let (_, device) = self
            .devices
            .remove(&id)
            .ok_or(AppError::DeviceNotFound(id))?;
        gauge!("iot_devices_registered").decrement(1.0);

        device.disconnect().await?;
        info!(%id, "{} unregistered", device.name());
        counter!("iot_devices_unregistered_total").increment(1);
        Ok(())
    }

    pub fn get_device(&self, id: DeviceId) -> Result<Arc<dyn Device>, AppError> {
        self.devices
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(AppError::DeviceNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Sends each message in order, one at a time.
    ///
    /// An unknown device id aborts the program with
    /// [`AppError::DeviceNotFound`]. Messages sent before the failure are
    /// not undone.
    pub async fn run_program(&self, program: Vec<Message>) -> Result<(), AppError> {
        info!("===== running program ({} messages) =====", program.len());
        counter!("iot_programs_run_total").increment(1);

        for message in program {
            let device = self.get_device(message.device_id)?;
            debug!(device_id = %message.device_id, kind = %message.kind, "dispatching");
            device.send_message(message.kind, &message.data).await?;
            counter!("iot_messages_dispatched_total", "kind" => message.kind.as_str())
                .increment(1);
        }

        info!("===== end of program =====");
        Ok(())
    }
}
