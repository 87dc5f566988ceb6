use crate::error::{AppError, AppResult};
use serde::Serialize;

/// A byte-range replacement in a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextEdit {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive). Equal to `start` for insertions.
    pub end: usize,
    /// Replacement text.
    pub text: String,
}

impl TextEdit {
    /// Creates an edit inserting `text` at `offset`.
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self {
            start: offset,
            end: offset,
            text: text.into(),
        }
    }

    /// Creates an edit replacing `start..end` with `text`.
    pub fn replace(start: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }
}

/// Applies non-overlapping edits to `source`. Everything outside the edited
/// ranges is kept byte for byte.
pub fn apply_text_edits(source: &str, edits: &[TextEdit]) -> AppResult<String> {
    let mut ordered: Vec<&TextEdit> = edits.iter().collect();
    ordered.sort_by(|a, b| b.start.cmp(&a.start).then(b.end.cmp(&a.end)));

    let mut new_source = source.to_string();
    let mut limit = source.len();
    for edit in ordered {
        if edit.start > edit.end
            || edit.end > limit
            || !source.is_char_boundary(edit.start)
            || !source.is_char_boundary(edit.end)
        {
            return Err(AppError::General(format!(
                "Invalid edit range {}..{}",
                edit.start, edit.end
            )));
        }
        new_source.replace_range(edit.start..edit.end, &edit.text);
        limit = edit.start;
    }

    Ok(new_source)
}
