#![deny(missing_docs)]

//! # Parser Module
//!
//! Handles parsing of Go source code using tree-sitter.
//! Locates the struct type covering a line and extracts its fields, their
//! names, types and raw tag literals.

pub mod extractors;
pub mod models;

use crate::error::{AppError, AppResult};
use tree_sitter::{Parser, Tree};

// Re-export major types and functions
pub use extractors::locate_struct;
pub use models::{Declaration, FieldDescriptor, FieldId, FieldSite, FieldType, LocatedStruct};

/// Parses Go source. Files with syntax errors are rejected.
pub fn parse_go_source(source: &str) -> AppResult<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|e| AppError::Source(format!("Failed to load Go grammar: {}", e)))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| AppError::Source("Failed to parse file".into()))?;

    if tree.root_node().has_error() {
        return Err(AppError::Source(format!(
            "Failed to parse file: syntax error near line {}",
            first_error_line(&tree)
        )));
    }

    Ok(tree)
}

/// 1-based line of the first error or missing node.
fn first_error_line(tree: &Tree) -> usize {
    let mut node = tree.root_node();
    loop {
        let mut cursor = node.walk();
        let next = node.children(&mut cursor).find(|c| c.has_error());
        match next {
            Some(child) if child.is_error() || child.is_missing() => {
                return child.start_position().row + 1
            }
            Some(child) => node = child,
            None => return node.start_position().row + 1,
        }
    }
}
