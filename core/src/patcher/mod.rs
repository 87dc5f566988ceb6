#![deny(missing_docs)]

//! # Code Patching
//!
//! Utilities for writing computed struct tags back into Go source strings.
//!
//! - **common**: Byte-range text edits and their application.
//! - **structs**: Mapping tag edits onto field positions.
//! - **workflows**: High-level patching recipes (locate, plan, apply).

/// Text edits and their application.
pub mod common;

/// Struct-level patching operations (e.g. field tags).
pub mod structs;

/// High-level patching workflows.
pub mod workflows;

// Re-export public API
pub use common::{apply_text_edits, TextEdit};
pub use structs::tag_text_edits;
pub use workflows::{fill_struct_tags, TagPatch};
