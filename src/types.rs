use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One typed unit of a parsed path expression.
///
/// A raw path such as `x.books[0].author` tokenizes to
/// `[Anchor, Key("books"), Index(0), Key("author")]`.
///
/// `Anchor` is the literal segment `x`, meaning "stay at the current node".
/// It is only meaningful as the first segment, where it denotes the document
/// root. Note that this makes a real top-level key literally named `x`
/// unreachable through a bare `x` segment; the anchor wins. This ambiguity is
/// inherited from the path dialect itself and is kept for compatibility.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum PathToken {
    /// The `x` root/no-op anchor.
    Anchor,
    /// A literal object key.
    Key(String),
    /// A literal non-negative array index.
    Index(usize),
}

/// Errors produced by path parsing, lookup, and mutation.
#[derive(Error, Debug)]
pub enum Error {
    /// The path ran out before naming a concrete child node.
    ///
    /// The mutators treat this as "the target's parent is the document root"
    /// rather than as a failure; a plain lookup surfaces it to the caller.
    #[error("could not find a specific node that matched the given path")]
    EmptyPath,

    /// Bracket content did not parse as a non-negative base-10 integer.
    #[error("invalid index: {text}")]
    InvalidIndex { text: String },

    /// Path text was left over after a bare-key segment.
    ///
    /// Only the last segment of a path may be a bare key; interior segments
    /// must be the `x` anchor or carry a bracketed index.
    #[error("JSON path left unparsed: {remainder}")]
    UnparsedRemainder { remainder: String },

    /// The path parsed but the node it names is absent from the document.
    #[error("could not look up: {path}")]
    NotFound { path: String },

    /// The resolved node exists but is not a string scalar. `rendered` holds
    /// a compact rendering of what was found, for diagnostics.
    #[error("result was not a string: {rendered}")]
    NotAString { rendered: String },

    /// The key targeted by a scalar assignment does not exist. Assignment
    /// overwrites existing keys only; it never creates new ones.
    #[error("no such key, could not set value: {key}")]
    KeyNotFound { key: String },

    /// The splice target resolved to something other than an array.
    #[error("path does not resolve to an array: {path}")]
    NotAnArray { path: String },

    /// Re-parsing the document after a textual splice failed; nothing was
    /// persisted.
    #[error("splice produced invalid JSON")]
    SpliceProducedInvalidJson(#[source] serde_json::Error),

    #[error("invalid JSON")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
