//! Error types for surface listener registration

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
    #[error("failed to add `{event}` listener: {reason}")]
    Listen { event: &'static str, reason: String },

    #[error("failed to remove `{event}` listener: {reason}")]
    Unlisten { event: &'static str, reason: String },
}
