#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Helper functions for deriving tag keys from Go field identifiers.

/// Returns `true` when a Go identifier is exported (starts with `A`..`Z`).
pub fn is_exported(name: &str) -> bool {
    name.as_bytes().first().is_some_and(u8::is_ascii_uppercase)
}

/// Converts a Go identifier into a lowercase, underscore separated tag key.
///
/// A separator is inserted where a lowercase (or non-letter) character is
/// followed by an uppercase one. Acronym runs collapse into a single word and
/// no separator is inserted where the run ends, so `UserID` and `UserId` both
/// become `user_id` while `HTTPServer` becomes `httpserver`.
pub fn to_key(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut result = String::with_capacity(name.len() + 4);
    result.push(first.to_ascii_lowercase());

    let mut run_upper = first.is_ascii_uppercase();
    for c in chars {
        if c.is_ascii_uppercase() {
            if !run_upper {
                result.push('_');
                run_upper = true;
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
            run_upper = false;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_conversion() {
        assert_eq!(to_key("Username"), "username");
        assert_eq!(to_key("Password"), "password");
        assert_eq!(to_key("RealName"), "real_name");
        assert_eq!(to_key("ID"), "id");
        assert_eq!(to_key("UserID"), "user_id");
        assert_eq!(to_key("UserId"), "user_id");
        assert_eq!(to_key("ACID"), "acid");
    }

    #[test]
    fn test_acronym_end_has_no_separator() {
        assert_eq!(to_key("HTTPServer"), "httpserver");
        assert_eq!(to_key("IDCard"), "idcard");
        assert_eq!(to_key("UserIDList"), "user_idlist");
    }

    #[test]
    fn test_key_edge_cases() {
        assert_eq!(to_key(""), "");
        assert_eq!(to_key("x"), "x");
        assert_eq!(to_key("userName"), "user_name");
        assert_eq!(to_key("Field2Name"), "field2_name");
        assert_eq!(to_key("Über"), "Über");
    }

    #[test]
    fn test_is_exported() {
        assert!(is_exported("Name"));
        assert!(is_exported("ID"));
        assert!(!is_exported("name"));
        assert!(!is_exported("_Name"));
        assert!(!is_exported(""));
        assert!(!is_exported("Äpfel"));
    }
}
