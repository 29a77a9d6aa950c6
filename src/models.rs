use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque handle issued by the service when a device is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceId(Uuid);

impl DeviceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DeviceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageKind {
    SwitchOn,
    SwitchOff,
    ChangeColor,
    PlaySong,
    Open,
    Close,
    Flush,
    Clean,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::SwitchOn => "SWITCH_ON",
            MessageKind::SwitchOff => "SWITCH_OFF",
            MessageKind::ChangeColor => "CHANGE_COLOR",
            MessageKind::PlaySong => "PLAY_SONG",
            MessageKind::Open => "OPEN",
            MessageKind::Close => "CLOSE",
            MessageKind::Flush => "FLUSH",
            MessageKind::Clean => "CLEAN",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single addressed command. Programs are ordered lists of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub device_id: DeviceId,
    pub kind: MessageKind,
    #[serde(default)]
    pub data: String,
}

impl Message {
    pub fn new(device_id: DeviceId, kind: MessageKind) -> Self {
        Self {
            device_id,
            kind,
            data: String::new(),
        }
    }

    pub fn with_data(device_id: DeviceId, kind: MessageKind, data: impl Into<String>) -> Self {
        Self {
            device_id,
            kind,
            data: data.into(),
        }
    }
}
