mod error;
mod hub;
mod instance;
mod listeners;
mod message;
mod registry;
mod router;
mod state;
mod types;

pub use crate::error::{Error, Result};
pub use crate::hub::ControllerHub;
pub use crate::instance::ControllerInstance;
pub use crate::message::{Message, MessageKind};
pub use crate::registry::ControllerRegistry;
pub use crate::router::{
    ButtonListener, EventRouter, NameListener, PoseListener, SliderListener,
};
pub use crate::state::ControlStateStore;
pub use crate::types::{
    ControlSelector, ControllerId, ControllerInfo, Handedness, SubscriptionId,
};

pub use motionlink_pose as pose;
