use crate::config::TagConfig;
use crate::error::AppResult;
use crate::parser::{locate_struct, parse_go_source};
use crate::patcher::common::{apply_text_edits, TextEdit};
use crate::patcher::structs::tag_text_edits;
use crate::walker::plan_tag_edits;

/// The result of filling in tags for one struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPatch {
    /// 1-based line of the struct that was processed.
    pub struct_line: usize,
    /// The edits, relative to the original source.
    pub edits: Vec<TextEdit>,
    /// The source with all edits applied.
    pub patched: String,
}

impl TagPatch {
    /// Whether no field needed a new tag.
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }
}

/// Adds the configured tag keys to every exported field of the struct covering
/// `line` (1-based).
///
/// Returns `None` when no struct covers the line. The whole struct is planned
/// before any edit is applied, so an error leaves nothing half done.
pub fn fill_struct_tags(source: &str, line: usize, config: &TagConfig) -> AppResult<Option<TagPatch>> {
    // 1. Parse & locate
    let tree = parse_go_source(source)?;
    let Some(located) = locate_struct(&tree, source, line) else {
        return Ok(None);
    };

    // 2. Plan tags
    let tag_edits = plan_tag_edits(&located.declaration, config)?;

    // 3. Apply changes
    let edits = tag_text_edits(&located, &tag_edits)?;
    let patched = apply_text_edits(source, &edits)?;

    Ok(Some(TagPatch {
        struct_line: located.line,
        edits,
        patched,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_fill_full_flow() {
        let code = "package m\n\ntype A struct {\n\tName string\n\tID   int `json:\"id\"`\n}\n";

        let patch = fill_struct_tags(code, 4, &TagConfig::default())
            .unwrap()
            .unwrap();

        assert_eq!(patch.struct_line, 3);
        assert_eq!(patch.edits.len(), 2);
        assert!(patch
            .patched
            .contains("\tName string `json:\"name\" form:\"name\"`\n"));
        assert!(patch
            .patched
            .contains("\tID   int `json:\"id\" form:\"id\"`\n"));
    }

    #[test]
    fn test_fill_no_struct() {
        let code = "package m\n\nvar x = 1\n";
        assert!(fill_struct_tags(code, 3, &TagConfig::default())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_fill_already_tagged() {
        let code = "package m\n\ntype A struct {\n\tName string `json:\"n\" form:\"n\"`\n}\n";
        let patch = fill_struct_tags(code, 3, &TagConfig::default())
            .unwrap()
            .unwrap();
        assert!(patch.is_empty());
        assert_eq!(patch.patched, code);
    }

    #[test]
    fn test_fill_malformed_tag() {
        let code = "package m\n\ntype A struct {\n\tName string `json`\n}\n";
        let err = fill_struct_tags(code, 3, &TagConfig::default()).unwrap_err();
        assert!(matches!(err, AppError::FieldTag { .. }));
    }
}
