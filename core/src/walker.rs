#![deny(missing_docs)]

//! # Field Walker
//!
//! Decides which fields of a struct need new tags and computes them.
//!
//! The walker never touches the source: it returns one [`TagEdit`] per field
//! whose tag changed, and the caller applies them.

use crate::config::TagConfig;
use crate::error::{AppError, AppResult};
use crate::naming::{is_exported, to_key};
use crate::parser::models::{Declaration, FieldDescriptor, FieldId, FieldType};
use crate::tags::{ensure_keys, parse_tags};

/// A replacement tag literal for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEdit {
    /// The field to retag.
    pub field: FieldId,
    /// The complete new tag literal, backticks included.
    pub tag: String,
}

/// Computes the tag edits for every field of `declaration`, recursing into
/// anonymous struct fields.
///
/// Fails on the first field whose existing tag is malformed; no edits are
/// returned in that case.
pub fn plan_tag_edits(declaration: &Declaration, config: &TagConfig) -> AppResult<Vec<TagEdit>> {
    let mut edits = Vec::new();
    walk_fields(&declaration.fields, config, &mut edits)?;
    Ok(edits)
}

fn walk_fields(
    fields: &[FieldDescriptor],
    config: &TagConfig,
    edits: &mut Vec<TagEdit>,
) -> AppResult<()> {
    for field in fields {
        // Nested fields are judged on their own, whatever the parent's name.
        match &field.ty {
            FieldType::Struct(nested) => walk_fields(nested, config, edits)?,
            FieldType::Named(_) | FieldType::Other => {}
        }

        let Some(name) = field.effective_name().filter(|n| is_exported(n)) else {
            continue;
        };

        if let Some(tag) = retag_field(field, name, config)? {
            log::debug!("field {}: tag -> {}", name, tag);
            edits.push(TagEdit {
                field: field.id,
                tag,
            });
        }
    }
    Ok(())
}

/// Returns the new tag literal, or `None` when the field already has every key.
fn retag_field(
    field: &FieldDescriptor,
    name: &str,
    config: &TagConfig,
) -> AppResult<Option<String>> {
    let raw = field.tag.as_deref().unwrap_or("");
    let mut tags = parse_tags(raw).map_err(|error| AppError::FieldTag {
        field: name.to_string(),
        error,
    })?;

    let key = to_key(name);
    if ensure_keys(&mut tags, &config.keys, |_| key.clone()) {
        Ok(Some(tags.to_string()))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::TagError;

    struct Fields {
        next: usize,
    }

    impl Fields {
        fn new() -> Self {
            Fields { next: 0 }
        }

        fn field(&mut self, names: &[&str], ty: FieldType, tag: Option<&str>) -> FieldDescriptor {
            let id = FieldId(self.next);
            self.next += 1;
            FieldDescriptor {
                id,
                names: names.iter().map(|n| n.to_string()).collect(),
                ty,
                tag: tag.map(str::to_string),
            }
        }
    }

    fn named(ty: &str) -> FieldType {
        FieldType::Named(ty.to_string())
    }

    fn plan(fields: Vec<FieldDescriptor>) -> AppResult<Vec<TagEdit>> {
        plan_tag_edits(&Declaration { fields }, &TagConfig::default())
    }

    #[test]
    fn test_untagged_field() {
        let mut f = Fields::new();
        let edits = plan(vec![f.field(&["Username"], named("string"), None)]).unwrap();
        assert_eq!(
            edits,
            vec![TagEdit {
                field: FieldId(0),
                tag: r#"`json:"username" form:"username"`"#.into(),
            }]
        );
    }

    #[test]
    fn test_existing_json_kept() {
        let mut f = Fields::new();
        let edits = plan(vec![f.field(
            &["UserID"],
            named("int"),
            Some(r#"`json:"uid"`"#),
        )])
        .unwrap();
        assert_eq!(edits[0].tag, r#"`json:"uid" form:"user_id"`"#);
    }

    #[test]
    fn test_complete_tag_is_left_alone() {
        let mut f = Fields::new();
        let edits = plan(vec![f.field(
            &["ID"],
            named("int"),
            Some(r#"`form:"x" json:"y"`"#),
        )])
        .unwrap();
        assert!(edits.is_empty());
    }

    #[test]
    fn test_unexported_fields_skipped() {
        let mut f = Fields::new();
        let edits = plan(vec![
            f.field(&["password"], named("string"), None),
            f.field(&[], named("base"), None),
            f.field(&["Name"], FieldType::Other, None),
        ])
        .unwrap();
        assert_eq!(edits.len(), 1);
        assert_eq!(edits[0].field, FieldId(2));
    }

    #[test]
    fn test_embedded_field_uses_type_name() {
        let mut f = Fields::new();
        let edits = plan(vec![f.field(&[], named("BaseModel"), None)]).unwrap();
        assert_eq!(edits[0].tag, r#"`json:"base_model" form:"base_model"`"#);
    }

    #[test]
    fn test_grouped_names_use_first() {
        let mut f = Fields::new();
        let edits = plan(vec![f.field(&["FirstName", "LastName"], named("string"), None)]).unwrap();
        assert_eq!(edits[0].tag, r#"`json:"first_name" form:"first_name"`"#);
    }

    #[test]
    fn test_nested_struct_fields() {
        let mut f = Fields::new();
        let parent_id = FieldId(0);
        f.next = 1;
        let inner = vec![
            f.field(&["Street"], named("string"), None),
            f.field(&["zip"], named("string"), None),
        ];
        let parent = FieldDescriptor {
            id: parent_id,
            names: vec!["Address".into()],
            ty: FieldType::Struct(inner),
            tag: None,
        };
        let edits = plan(vec![parent]).unwrap();
        let ids: Vec<FieldId> = edits.iter().map(|e| e.field).collect();
        assert_eq!(ids, vec![FieldId(1), FieldId(0)]);
        assert_eq!(edits[1].tag, r#"`json:"address" form:"address"`"#);
    }

    #[test]
    fn test_unexported_parent_still_recursed() {
        let mut f = Fields::new();
        let inner = vec![f.field(&["Visible"], named("bool"), None)];
        let parent = f.field(&["hidden"], FieldType::Struct(inner), None);
        let edits = plan(vec![parent]).unwrap();
        assert_eq!(edits.len(), 1);
        assert_eq!(edits[0].field, FieldId(0));
    }

    #[test]
    fn test_malformed_tag_aborts() {
        let mut f = Fields::new();
        let err = plan(vec![
            f.field(&["Good"], named("string"), None),
            f.field(&["Bad"], named("string"), Some("`json`")),
        ])
        .unwrap_err();
        match err {
            AppError::FieldTag { field, error } => {
                assert_eq!(field, "Bad");
                assert_eq!(error, TagError::Syntax(0));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_malformed_tag_on_unexported_field_ignored() {
        let mut f = Fields::new();
        let edits = plan(vec![f.field(&["bad"], named("string"), Some("`json`"))]).unwrap();
        assert!(edits.is_empty());
    }

    #[test]
    fn test_plan_is_idempotent() {
        let mut f = Fields::new();
        let first = plan(vec![f.field(&["Email"], named("string"), Some(r#"`gorm:"unique"`"#))])
            .unwrap();
        let mut f = Fields::new();
        let second = plan(vec![f.field(&["Email"], named("string"), Some(&first[0].tag))]).unwrap();
        assert!(second.is_empty());
    }
}
