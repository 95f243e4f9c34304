use std::fmt;

use motionlink_pose::{Quat, SensorFrame, Vec3};

/// Inbound controller messages, already decoded by the transport.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A controller announced itself or re-announced after a restart.
    ControllerStarted {
        name: String,
        is_left_handed: bool,
        skin: String,
    },
    ButtonDown { name: String },
    ButtonUp { name: String },
    SliderChanged { name: String, value: f32 },
    /// Absolute orientation and local position.
    ControlInfo { orientation: Quat, position: Vec3 },
    /// Raw motion sensor readings.
    SensorInfo(SensorFrame),
}

/// Message tag, mostly for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    ControllerStarted,
    ButtonDown,
    ButtonUp,
    SliderChanged,
    ControlInfo,
    SensorInfo,
}

impl Message {
    pub fn kind(&self) -> MessageKind {
        match self {
            Self::ControllerStarted { .. } => MessageKind::ControllerStarted,
            Self::ButtonDown { .. } => MessageKind::ButtonDown,
            Self::ButtonUp { .. } => MessageKind::ButtonUp,
            Self::SliderChanged { .. } => MessageKind::SliderChanged,
            Self::ControlInfo { .. } => MessageKind::ControlInfo,
            Self::SensorInfo(_) => MessageKind::SensorInfo,
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ControllerStarted => "ControllerStarted",
            Self::ButtonDown => "SendButtonDown",
            Self::ButtonUp => "SendButtonUp",
            Self::SliderChanged => "SendSliderChanged",
            Self::ControlInfo => "SendControlInfo",
            Self::SensorInfo => "SendControlInfoWebGL",
        };
        f.write_str(name)
    }
}
