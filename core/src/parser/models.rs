//! # Data Models
//!
//! Intermediate Representation (IR) of a located Go struct and its fields.

use std::ops::Range;

/// Identifies a field within one located struct, nested fields included.
///
/// Ids are handed out in source order and index into [`LocatedStruct::sites`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub usize);

/// The part of a field's type the tag generator cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// A named type. For `Foo`, `*Foo` and `pkg.Foo` this holds `Foo`.
    Named(String),
    /// An anonymous `struct { ... }` type with its own fields.
    Struct(Vec<FieldDescriptor>),
    /// Anything else (slices, maps, pointers to literals, funcs, ...).
    Other,
}

impl FieldType {
    /// The type name, when the type is named.
    pub fn name(&self) -> Option<&str> {
        match self {
            FieldType::Named(name) => Some(name.as_str()),
            FieldType::Struct(_) | FieldType::Other => None,
        }
    }
}

/// A single field declaration, e.g. `FirstName, LastName string`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Position of the field in the owning struct's site table.
    pub id: FieldId,
    /// Declared names. Empty for embedded fields.
    pub names: Vec<String>,
    /// The field type.
    pub ty: FieldType,
    /// The raw tag literal, delimiters included.
    pub tag: Option<String>,
}

impl FieldDescriptor {
    /// The name a field is known by: its first identifier, or the type name for
    /// embedded fields.
    pub fn effective_name(&self) -> Option<&str> {
        match self.names.first() {
            Some(name) => Some(name.as_str()),
            None => self.ty.name(),
        }
    }
}

/// The field list of a struct type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declaration {
    /// Fields in source order.
    pub fields: Vec<FieldDescriptor>,
}

/// Where a field's tag lives in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSite {
    /// Byte range of the existing tag literal.
    pub tag_range: Option<Range<usize>>,
    /// Byte offset just past the field's type, where a new tag goes.
    pub insert_at: usize,
}

/// A struct found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedStruct {
    /// 1-based line of the `struct` keyword.
    pub line: usize,
    /// The fields.
    pub declaration: Declaration,
    /// Source positions, indexed by [`FieldId`].
    pub sites: Vec<FieldSite>,
}

impl LocatedStruct {
    /// Looks up the source position of a field.
    pub fn site(&self, id: FieldId) -> Option<&FieldSite> {
        self.sites.get(id.0)
    }
}
