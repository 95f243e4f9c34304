use thiserror::Error;

use crate::types::ControllerId;

/// Error type for message dispatch.
#[derive(Debug, Error)]
pub enum Error {
    /// A peer sent input before announcing itself with `ControllerStarted`.
    #[error("Controller not started: {0}")]
    NotStarted(ControllerId),
}

/// Convenient result alias for controller operations.
pub type Result<T> = std::result::Result<T, Error>;
