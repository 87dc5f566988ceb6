//! # Extraction Logic
//!
//! Finds the struct type covering a line and converts it into IR models.

use crate::parser::models::{
    Declaration, FieldDescriptor, FieldId, FieldSite, FieldType, LocatedStruct,
};
use tree_sitter::{Node, Tree};

/// Returns the innermost struct type whose lines include `line` (1-based).
pub fn locate_struct(tree: &Tree, source: &str, line: usize) -> Option<LocatedStruct> {
    let row = line.checked_sub(1)?;
    let node = innermost_struct(tree.root_node(), row)?;

    let mut sites = Vec::new();
    let fields = field_list(node)
        .map(|list| extract_fields(list, source, &mut sites))
        .unwrap_or_default();

    log::trace!(
        "struct at line {} has {} fields ({} including nested)",
        node.start_position().row + 1,
        fields.len(),
        sites.len()
    );

    Some(LocatedStruct {
        line: node.start_position().row + 1,
        declaration: Declaration { fields },
        sites,
    })
}

fn covers_row(node: &Node<'_>, row: usize) -> bool {
    node.start_position().row <= row && node.end_position().row >= row
}

fn innermost_struct(node: Node<'_>, row: usize) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if covers_row(&child, row) {
            if let Some(found) = innermost_struct(child, row) {
                return Some(found);
            }
        }
    }
    (node.kind() == "struct_type" && covers_row(&node, row)).then_some(node)
}

fn field_list(struct_node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = struct_node.walk();
    let list = struct_node
        .children(&mut cursor)
        .find(|c| c.kind() == "field_declaration_list");
    list
}

fn text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    &source[node.byte_range()]
}

fn extract_fields(list: Node<'_>, source: &str, sites: &mut Vec<FieldSite>) -> Vec<FieldDescriptor> {
    let mut fields = Vec::new();
    let mut cursor = list.walk();

    for decl in list.children(&mut cursor) {
        if decl.kind() != "field_declaration" {
            continue;
        }
        let Some(ty_node) = decl.child_by_field_name("type") else {
            continue;
        };

        let tag_node = decl.child_by_field_name("tag");
        let id = FieldId(sites.len());
        sites.push(FieldSite {
            tag_range: tag_node.map(|t| t.byte_range()),
            insert_at: ty_node.end_byte(),
        });

        let mut name_cursor = decl.walk();
        let names = decl
            .children_by_field_name("name", &mut name_cursor)
            .map(|n| text(n, source).to_string())
            .collect();

        fields.push(FieldDescriptor {
            id,
            names,
            ty: extract_type(ty_node, source, sites),
            tag: tag_node.map(|t| text(t, source).to_string()),
        });
    }

    fields
}

fn extract_type(ty: Node<'_>, source: &str, sites: &mut Vec<FieldSite>) -> FieldType {
    match ty.kind() {
        "type_identifier" => FieldType::Named(text(ty, source).to_string()),
        "qualified_type" => ty
            .child_by_field_name("name")
            .map(|n| FieldType::Named(text(n, source).to_string()))
            .unwrap_or(FieldType::Other),
        "struct_type" => FieldType::Struct(
            field_list(ty)
                .map(|list| extract_fields(list, source, sites))
                .unwrap_or_default(),
        ),
        _ => FieldType::Other,
    }
}
