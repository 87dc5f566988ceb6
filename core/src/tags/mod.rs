#![deny(missing_docs)]

//! # Struct Tags
//!
//! Codec for Go struct tags: the backtick delimited `key:"value"` strings that
//! sit after a field's type.
//!
//! - **parse**: raw tag literal -> ordered [`Tags`].
//! - **escape**: Go double-quoted string literal escaping.
//! - **merge**: appending missing keys.
//!
//! Serialization is the `Display` impl of [`Tags`].

use derive_more::Display;
use std::fmt;

pub(crate) mod escape;

/// Appending missing keys to an existing tag list.
pub mod merge;

/// Parsing of raw tag literals.
pub mod parse;

pub use merge::ensure_keys;
pub use parse::parse_tags;

/// Reasons a raw tag literal is rejected. All of them mean the tag is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum TagError {
    /// The literal is a single character and cannot hold its delimiters.
    #[display("invalid tag string")]
    TooShort,
    /// An entry has an empty key or its key is not followed by `:"`.
    #[display("invalid tag syntax at byte {_0}")]
    Syntax(usize),
    /// A quoted value contains an escape sequence Go would reject.
    #[display("invalid escape in tag value {_0}")]
    Escape(String),
}

impl std::error::Error for TagError {}

/// A single `key:"value"` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    key: String,
    value: String,
}

impl Tag {
    /// Creates a tag entry.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The tag key, e.g. `json`.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The unescaped tag value, e.g. `user_id,omitempty`.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, escape::quote(&self.value))
    }
}

/// Ordered list of tag entries.
///
/// Keys are not required to be unique: hand written tags may repeat a key and
/// those entries are kept as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags(Vec<Tag>);

impl Tags {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of the first entry with the given key.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|t| t.key == key).map(Tag::value)
    }

    /// Appends an entry at the end, even if the key already exists.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push(Tag::new(key, value));
    }

    /// Iterates the entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.0.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Tag> for Tags {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Tags {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Renders the canonical raw literal: `` `k1:"v1" k2:"v2"` ``.
impl fmt::Display for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("`")?;
        for (i, tag) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", tag)?;
        }
        f.write_str("`")
    }
}
