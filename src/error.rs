//! Error types for CyberSec Toolkit Core

use thiserror::Error;

/// Main error type for toolkit operations
///
/// Generation against an empty charset is the only failure the core can
/// produce; the cipher and the strength analyzer are total functions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolkitError {
    /// Password generation attempted with no selectable characters
    #[error("Empty charset: enable at least one character class")]
    EmptyCharset,
}

/// Result type alias for toolkit operations
pub type Result<T> = std::result::Result<T, ToolkitError>;
