//! # jsonfile
//!
//! A Rust library to look up and edit values in JSON files using compact
//! dot/bracket path expressions.
//!
//! Sometimes you want to poke at one value inside a JSON file without
//! modelling the whole document: read `x[1].author` out of a list of books,
//! overwrite `x.books[0].author` with a new string, or append a raw JSON
//! fragment to the array at `x.items`. This library parses those path
//! expressions, resolves them against a [`serde_json::Value`] tree, and
//! persists edits back to the file the document came from.
//!
//! ## Path expressions
//!
//! - **Root anchor:** paths conventionally start with `x`, a no-op segment
//!   denoting the document root (e.g. `x[1].author` on a top-level array).
//! - **Keys and indices:** dot-separated segments; a segment may carry one
//!   bracketed non-negative integer index (e.g. `x.books[0].author`).
//! - **Terminal bare keys:** only the final segment may be a bare key;
//!   interior segments must be the anchor or carry an index.
//!
//! No wildcards, filters, or quoting: keys and indices are literal.
//!
//! ## Reading a value
//!
//! ```rust
//! use jsonfile::lookup_string;
//! use serde_json::json;
//!
//! let doc = json!([
//!     {"author": "Suzanne Collins", "book": "The Hunger Games"},
//!     {"author": "Cat", "book": "Catty"}
//! ]);
//!
//! assert_eq!(lookup_string(&doc, "x[1].author").unwrap(), "Cat");
//! ```
//!
//! ## Overwriting a string
//!
//! Assignment only overwrites keys that already exist; it never creates
//! new ones.
//!
//! ```rust
//! use jsonfile::set_string;
//! use serde_json::json;
//!
//! let mut doc = json!({"books": [{"author": "Old"}]});
//! set_string(&mut doc, "x.books[0].author", "New").unwrap();
//! assert_eq!(doc, json!({"books": [{"author": "New"}]}));
//! ```
//!
//! ## Appending a JSON fragment to an array
//!
//! The fragment is raw, already-serialized JSON and is spliced in textually;
//! the result is re-parsed before anything is persisted. See
//! [`add_fragment`] for the limitations this technique carries.
//!
//! ```rust
//! use jsonfile::add_fragment;
//! use serde_json::json;
//!
//! let doc = json!({"items": [1, 2]});
//! let doc = add_fragment(&doc, "x.items", "3").unwrap();
//! assert_eq!(doc, json!({"items": [1, 2, 3]}));
//! ```
//!
//! ## Working with files
//!
//! [`JsonFile`] binds a filename to its parsed document; mutations through
//! the binding re-encode the whole document in pretty form and write it
//! back. The one-shot helpers [`json_string`], [`json_set`] and [`json_add`]
//! load, operate, and persist in a single call.
//!
//! ```rust,no_run
//! jsonfile::json_set("books.json", "x[1].author", "Suzanne Collins")?;
//! jsonfile::json_add("books.json", "x", r#"{"author": "Cat", "book": "Catty"}"#)?;
//! let author = jsonfile::json_string("books.json", "x[2].author")?;
//! # Ok::<(), jsonfile::Error>(())
//! ```

mod file;
mod manipulators;
mod parse;
mod resolve;
mod types;

pub use file::{json_add, json_set, json_string, json_value, JsonFile};
pub use manipulators::{add_fragment, set_string};
pub use parse::tokenize;
pub use resolve::{lookup, lookup_string, resolve, Resolved};
pub use types::{Error, PathToken};
