//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use crate::tags::TagError;
use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The Go source could not be parsed.
    #[from(ignore)]
    #[display("Source Error: {_0}")]
    Source(String),

    /// An existing struct tag does not follow the `key:"value"` syntax.
    #[from(ignore)]
    #[display("Tag Error on field '{field}': {error}")]
    FieldTag {
        /// Name of the field carrying the broken tag.
        field: String,
        /// What was wrong with it.
        error: TagError,
    },

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
