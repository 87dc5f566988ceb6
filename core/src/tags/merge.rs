//! Appending missing keys to a tag list.

use super::Tags;

/// Makes sure every key in `keys` is present in `tags`.
///
/// Missing keys are appended in the order given, with the value produced by
/// `default`. Existing entries are never moved or changed. Returns `true` if
/// anything was appended.
pub fn ensure_keys<K, F>(tags: &mut Tags, keys: &[K], mut default: F) -> bool
where
    K: AsRef<str>,
    F: FnMut(&str) -> String,
{
    let mut changed = false;
    for key in keys {
        let key = key.as_ref();
        if tags.lookup(key).is_none() {
            let value = default(key);
            tags.append(key, value);
            changed = true;
        }
    }
    changed
}
