use serde_json::Value;

use crate::parse::tokenize;
use crate::resolve::{resolve, walk_mut};
use crate::types::Error;

/// Overwrites the value at `path` with the string `value`, in place.
///
/// The last segment of the path must name a key that already exists on the
/// object the rest of the path resolves to; assignment never creates keys.
/// The previous value is replaced whatever its type was.
///
/// ## Example
///
/// ```rust
/// use jsonfile::set_string;
/// use serde_json::json;
///
/// let mut doc = json!({"books": [{"author": "Old"}]});
/// set_string(&mut doc, "x.books[0].author", "New").unwrap();
/// assert_eq!(doc, json!({"books": [{"author": "New"}]}));
/// ```
pub fn set_string(root: &mut Value, path: &str, value: &str) -> Result<(), Error> {
    let (parent_path, last_key) = split_last_segment(path);

    let parent_tokens = match tokenize(parent_path) {
        Ok(tokens) => tokens,
        // An empty parent path means the parent is the document root.
        Err(Error::EmptyPath) => Vec::new(),
        Err(err) => return Err(err),
    };

    let parent = walk_mut(root, &parent_tokens).ok_or_else(|| Error::KeyNotFound {
        key: last_key.to_string(),
    })?;
    let map = parent.as_object_mut().ok_or_else(|| Error::KeyNotFound {
        key: last_key.to_string(),
    })?;
    if !map.contains_key(last_key) {
        return Err(Error::KeyNotFound {
            key: last_key.to_string(),
        });
    }
    map.insert(last_key.to_string(), Value::String(value.to_string()));
    Ok(())
}

/// Appends a raw, already-serialized JSON fragment as the last element of
/// the array at `path`, returning the resulting document.
///
/// The fragment is inserted textually: the array and the whole document are
/// compact-encoded, the array's closing `]` is replaced with
/// `,<fragment>]`, and that replacement is substituted for the **first**
/// occurrence of the array's bytes in the document's bytes. The spliced
/// bytes are then re-parsed; a parse failure yields
/// [`Error::SpliceProducedInvalidJson`] and the input document is untouched.
///
/// Known limitations of the textual technique, kept for compatibility:
///
/// * If the target array's serialized form also occurs earlier in the
///   document (a structurally identical sibling array, or the same bytes
///   inside a string literal), the first occurrence is the one spliced. The
///   re-parse catches the cases that corrupt the document's syntax; a
///   duplicate sibling array silently receives the element instead.
/// * Splicing into an empty array produces `[,<fragment>]`, which the
///   re-parse rejects.
///
/// ## Example
///
/// ```rust
/// use jsonfile::add_fragment;
/// use serde_json::json;
///
/// let doc = json!({"items": [1, 2]});
/// let doc = add_fragment(&doc, "x.items", "3").unwrap();
/// assert_eq!(doc, json!({"items": [1, 2, 3]}));
/// ```
pub fn add_fragment(root: &Value, path: &str, fragment: &str) -> Result<Value, Error> {
    let target = match resolve(root, path) {
        Ok(resolved) => resolved.node.ok_or_else(|| Error::NotFound {
            path: path.to_string(),
        })?,
        // An empty path targets the document root itself.
        Err(Error::EmptyPath) => root,
        Err(err) => return Err(err),
    };
    if !target.is_array() {
        return Err(Error::NotAnArray {
            path: path.to_string(),
        });
    }

    let target_bytes = serde_json::to_vec(target)?;
    let full_bytes = serde_json::to_vec(root)?;

    // Drop the closing ']', then append ",<fragment>]".
    let mut replacement = target_bytes.clone();
    replacement.pop();
    replacement.push(b',');
    replacement.extend_from_slice(fragment.as_bytes());
    replacement.push(b']');

    let spliced = replace_first(&full_bytes, &target_bytes, &replacement);
    serde_json::from_slice(&spliced).map_err(Error::SpliceProducedInvalidJson)
}

/// Splits a path at its last `.` into parent path and final segment. A path
/// with no dots has an empty parent: the final segment hangs off the root.
fn split_last_segment(path: &str) -> (&str, &str) {
    match path.rsplit_once('.') {
        Some((parent, last)) => (parent, last),
        None => ("", path),
    }
}

/// Replaces the first occurrence of `needle` in `haystack`. Returns the
/// haystack unchanged if the needle does not occur.
fn replace_first(haystack: &[u8], needle: &[u8], replacement: &[u8]) -> Vec<u8> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return haystack.to_vec();
    }
    match haystack.windows(needle.len()).position(|w| w == needle) {
        Some(pos) => {
            let mut out = Vec::with_capacity(haystack.len() - needle.len() + replacement.len());
            out.extend_from_slice(&haystack[..pos]);
            out.extend_from_slice(replacement);
            out.extend_from_slice(&haystack[pos + needle.len()..]);
            out
        }
        None => haystack.to_vec(),
    }
}
