use crate::error::{AppError, AppResult};
use crate::parser::models::LocatedStruct;
use crate::patcher::common::TextEdit;
use crate::walker::TagEdit;

/// Turns tag edits into source text edits.
///
/// A field that already has a tag literal gets it replaced. Otherwise the new
/// literal is inserted after the field's type, separated by a space.
pub fn tag_text_edits(located: &LocatedStruct, edits: &[TagEdit]) -> AppResult<Vec<TextEdit>> {
    edits
        .iter()
        .map(|edit| {
            let site = located.site(edit.field).ok_or_else(|| {
                AppError::General(format!("Unknown field id {} in tag edit", edit.field.0))
            })?;
            Ok(match &site.tag_range {
                Some(range) => TextEdit::replace(range.start, range.end, edit.tag.clone()),
                None => TextEdit::insert(site.insert_at, format!(" {}", edit.tag)),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::models::{Declaration, FieldId, FieldSite};

    fn located(sites: Vec<FieldSite>) -> LocatedStruct {
        LocatedStruct {
            line: 1,
            declaration: Declaration::default(),
            sites,
        }
    }

    #[test]
    fn test_insert_when_untagged() {
        let s = located(vec![FieldSite {
            tag_range: None,
            insert_at: 12,
        }]);
        let edits = tag_text_edits(
            &s,
            &[TagEdit {
                field: FieldId(0),
                tag: "`json:\"a\"`".into(),
            }],
        )
        .unwrap();
        assert_eq!(edits, vec![TextEdit::insert(12, " `json:\"a\"`")]);
    }

    #[test]
    fn test_replace_existing_tag() {
        let s = located(vec![FieldSite {
            tag_range: Some(20..30),
            insert_at: 19,
        }]);
        let edits = tag_text_edits(
            &s,
            &[TagEdit {
                field: FieldId(0),
                tag: "`new`".into(),
            }],
        )
        .unwrap();
        assert_eq!(edits, vec![TextEdit::replace(20, 30, "`new`")]);
    }

    #[test]
    fn test_unknown_field() {
        let s = located(vec![]);
        let err = tag_text_edits(
            &s,
            &[TagEdit {
                field: FieldId(3),
                tag: "``".into(),
            }],
        )
        .unwrap_err();
        assert!(err.to_string().contains("Unknown field id 3"));
    }
}
