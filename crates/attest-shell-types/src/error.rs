//! Error taxonomy for the executor boundary.

use thiserror::Error;

/// Failure modes of the executor transport itself, as opposed to commands
/// that ran and exited non-zero (those are reported through
/// [`crate::ShellOutput`]).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error("shell service unreachable: {0}")]
    Transport(String),
    #[error("shell service rejected the request: {0}")]
    Rejected(String),
    #[error("malformed executor response: {0}")]
    MalformedResponse(String),
}
