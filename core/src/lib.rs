#![deny(missing_docs)]

//! # Tagfill Core
//!
//! Core library for filling in Go struct tags.
//!
//! Locates a struct in Go source by line, then makes sure every exported field
//! carries the configured tag keys, deriving missing values from the field
//! name (`UserID` -> `user_id`).

/// Shared error types.
pub mod error;

/// Tag generation settings.
pub mod config;

/// Field name -> tag key conversion.
pub mod naming;

/// Struct tag codec.
pub mod tags;

/// Go source parsing logic.
pub mod parser;

/// Per-field tag planning.
pub mod walker;

/// Code patching utilities.
pub mod patcher;

pub use config::{TagConfig, DEFAULT_KEYS};
pub use error::{AppError, AppResult};
pub use naming::{is_exported, to_key};
pub use parser::{locate_struct, parse_go_source, Declaration, FieldDescriptor, FieldId, FieldType};
pub use patcher::{apply_text_edits, fill_struct_tags, TagPatch, TextEdit};
pub use tags::{ensure_keys, parse_tags, Tag, TagError, Tags};
pub use walker::{plan_tag_edits, TagEdit};
