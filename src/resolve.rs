use serde_json::Value;

use crate::parse::tokenize;
use crate::types::{Error, PathToken};

/// The outcome of walking a tokenized path over a document.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    /// The node all tokens land on, or `None` if a key or index along the
    /// way was absent (absence propagates; it is not an error at this level).
    pub node: Option<&'a Value>,
    /// True when the path ended on an anchor or index instead of naming a
    /// final child key. Plain lookups report this as [`Error::EmptyPath`];
    /// the mutators tolerate it and use the landed-on node directly.
    pub exhausted: bool,
}

/// Resolves a path expression against a document root.
///
/// ## Example
///
/// ```rust
/// use jsonfile::resolve;
/// use serde_json::json;
///
/// let doc = json!({"books": [{"author": "Cat"}]});
/// let resolved = resolve(&doc, "x.books[0].author").unwrap();
/// assert_eq!(resolved.node, Some(&json!("Cat")));
/// assert!(!resolved.exhausted);
///
/// // A trailing index lands on a node but does not terminate the grammar.
/// let resolved = resolve(&doc, "x.books[0]").unwrap();
/// assert_eq!(resolved.node, Some(&json!({"author": "Cat"})));
/// assert!(resolved.exhausted);
/// ```
pub fn resolve<'a>(root: &'a Value, path: &str) -> Result<Resolved<'a>, Error> {
    let tokens = tokenize(path)?;
    let exhausted = !matches!(tokens.last(), Some(PathToken::Key(_)));
    Ok(Resolved {
        node: walk(root, &tokens),
        exhausted,
    })
}

/// Finds the node a path expression refers to.
///
/// Fails with [`Error::EmptyPath`] if the path stops short of naming a child
/// (e.g. `x` or `x.books[0]`), and with [`Error::NotFound`] if the named node
/// is absent from the document.
pub fn lookup<'a>(root: &'a Value, path: &str) -> Result<&'a Value, Error> {
    let resolved = resolve(root, path)?;
    if resolved.exhausted {
        return Err(Error::EmptyPath);
    }
    resolved.node.ok_or_else(|| Error::NotFound {
        path: path.to_string(),
    })
}

/// Finds the string a path expression refers to.
///
/// Fails with [`Error::NotAString`] if the node exists but is not a string
/// scalar; the error carries a compact rendering of the node for display.
pub fn lookup_string(root: &Value, path: &str) -> Result<String, Error> {
    let node = lookup(root, path)?;
    match node.as_str() {
        Some(s) => Ok(s.to_string()),
        None => Err(Error::NotAString {
            rendered: node.to_string(),
        }),
    }
}

fn walk<'a>(root: &'a Value, tokens: &[PathToken]) -> Option<&'a Value> {
    let mut node = root;
    for token in tokens {
        node = match token {
            PathToken::Anchor => node,
            PathToken::Key(key) => node.get(key.as_str())?,
            PathToken::Index(index) => node.get(*index)?,
        };
    }
    Some(node)
}

/// Mutable mirror of the walk, used by the mutators to reach a parent node.
pub(crate) fn walk_mut<'a>(root: &'a mut Value, tokens: &[PathToken]) -> Option<&'a mut Value> {
    let mut node = root;
    for token in tokens {
        node = match token {
            PathToken::Anchor => node,
            PathToken::Key(key) => node.get_mut(key.as_str())?,
            PathToken::Index(index) => node.get_mut(*index)?,
        };
    }
    Some(node)
}
