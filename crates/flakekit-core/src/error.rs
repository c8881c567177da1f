//! Error handling for FlakeKit core
//!
//! Generation itself is total over finite inputs; the only fallible core
//! operation is reading G-code text back into typed lines.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// G-Code error type
///
/// Represents errors raised while parsing a line of emitted G-code.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GcodeError {
    /// The line is empty after trimming
    #[error("Empty line")]
    EmptyLine,

    /// Unknown G-Code or M-Code command
    #[error("Unknown command: {code}")]
    UnknownCode {
        /// The unrecognised command word.
        code: String,
    },

    /// Missing required parameter
    #[error("Missing required parameter '{param}'")]
    MissingParameter {
        /// The name of the missing parameter.
        param: char,
    },

    /// Invalid parameter value
    #[error("Invalid parameter '{param}': {reason}")]
    InvalidParameter {
        /// The parameter word.
        param: char,
        /// The reason the parameter is invalid.
        reason: String,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, GcodeError>;
