mod unix_sock;

use std::thread::JoinHandle;

pub use unix_sock::{read_frame, write_frame, UnixSocket, MAX_FRAME_LEN};

use bitcode::{Decode, Encode};
use crossbeam_channel::Sender;
use motionlink_controller::{ControllerId, Message};
use motionlink_pose::{Quat, SensorFrame, Vec3};
use thiserror::Error;

/// Error type for api operations.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("empty frame")]
    EmptyFrame,
    #[error("frame too large: {0} bytes")]
    FrameTooLarge(usize),
    #[error("failed to decode frame: {0}")]
    Decode(#[from] bitcode::Error),
}

/// Convenient result alias for api operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Controller call as it travels over the wire.
///
/// Sensor readings keep the device axis convention; they are remapped
/// when turned into a [`Message`].
#[derive(Debug, Clone, PartialEq, Encode, Decode)]
pub enum WireCall {
    ControllerStarted {
        name: String,
        is_left_handed: bool,
        skin: String,
    },
    ButtonDown {
        name: String,
    },
    ButtonUp {
        name: String,
    },
    SliderChanged {
        name: String,
        value: f32,
    },
    ControlInfo {
        orientation: [f32; 4],
        position: [f32; 3],
    },
    SensorInfo {
        reset: bool,
        is_reference_platform: bool,
        attitude: [f32; 4],
        gravity: [f32; 3],
        acceleration: [f32; 3],
    },
}

/// One call together with the peer that sent it.
#[derive(Debug, Clone, PartialEq, Encode, Decode)]
pub struct WireFrame {
    pub peer: ControllerId,
    pub call: WireCall,
}

impl From<WireCall> for Message {
    fn from(call: WireCall) -> Self {
        match call {
            WireCall::ControllerStarted {
                name,
                is_left_handed,
                skin,
            } => Message::ControllerStarted {
                name,
                is_left_handed,
                skin,
            },
            WireCall::ButtonDown { name } => Message::ButtonDown { name },
            WireCall::ButtonUp { name } => Message::ButtonUp { name },
            WireCall::SliderChanged { name, value } => {
                Message::SliderChanged { name, value }
            }
            WireCall::ControlInfo {
                orientation,
                position,
            } => Message::ControlInfo {
                orientation: Quat::from_array(orientation),
                position: Vec3::from(position),
            },
            WireCall::SensorInfo {
                reset,
                is_reference_platform,
                attitude,
                gravity,
                acceleration,
            } => Message::SensorInfo(SensorFrame::from_wire(
                reset,
                is_reference_platform,
                attitude,
                gravity,
                acceleration,
            )),
        }
    }
}

/// motionlinkd frame transport.
/// listener that forwards frames from controllers to the main loop,
/// and sender that pushes frames to a running daemon.
pub trait ApiTransport {
    fn listen_frames(&self, tx: Sender<WireFrame>) -> ApiResult<JoinHandle<()>>;
    fn send_frames(&self, frames: &[WireFrame]) -> ApiResult<()>;
}
