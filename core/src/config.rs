//! # Configuration
//!
//! Settings for tag generation.

/// Tag keys every exported field must carry.
pub const DEFAULT_KEYS: [&str; 2] = ["json", "form"];

/// Tag generation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagConfig {
    /// Keys appended when missing, in this order.
    pub keys: Vec<String>,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            keys: DEFAULT_KEYS.iter().map(|k| k.to_string()).collect(),
        }
    }
}
