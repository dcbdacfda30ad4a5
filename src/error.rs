use crate::registry::Handle;
use thiserror::Error;

/// Errors reported by the generator and the handle registry.
///
/// A call that returns an error leaves the generator untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SfmtError {
    #[error("init key must not be empty")]
    EmptyKeyArray,

    #[error("buffer length {len} is not a multiple of {multiple}")]
    BufferSizeMisaligned { len: usize, multiple: usize },

    #[error("buffer length {len} is below the minimum of {min}")]
    BufferTooSmall { len: usize, min: usize },

    #[error("unknown generator handle {0}")]
    UnknownHandle(Handle),
}

pub type Result<T> = core::result::Result<T, SfmtError>;
