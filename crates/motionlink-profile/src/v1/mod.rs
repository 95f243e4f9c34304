mod parse;
mod profile;

use thiserror::Error;

pub use profile::ProfileV1;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid handedness: {0}")]
    InvalidHandedness(String),
    #[error("invalid {field}: expected 3 components, got {len}")]
    InvalidVector { field: &'static str, len: usize },
}
