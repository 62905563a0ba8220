use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use serde_json::Value;

use crate::manipulators::{add_fragment, set_string};
use crate::resolve;
use crate::types::Error;

/// A JSON file bound to its parsed document.
///
/// Load once, then run any number of lookups and mutations against the
/// in-memory tree; every successful mutation re-encodes the whole document
/// in pretty form and writes it back to the bound file. Physical writes on a
/// binding are serialized by an internal lock, so two writers never
/// interleave bytes into the same file. Reads are not isolated from an
/// in-flight mutation; callers needing that must coordinate externally.
///
/// ## Example
///
/// ```rust,no_run
/// use jsonfile::JsonFile;
///
/// let mut books = JsonFile::load("books.json")?;
/// let author = books.lookup_string("x[1].author")?;
/// books.set_string("x[1].author", "Suzanne Collins")?;
/// # Ok::<(), jsonfile::Error>(())
/// ```
#[derive(Debug)]
pub struct JsonFile {
    filename: PathBuf,
    root: Value,
    write_lock: Mutex<()>,
}

impl JsonFile {
    /// Reads and parses the given file into a new binding.
    pub fn load(filename: impl AsRef<Path>) -> Result<Self, Error> {
        let filename = filename.as_ref().to_path_buf();
        let data = fs::read(&filename)?;
        let root = serde_json::from_slice(&data)?;
        Ok(JsonFile {
            filename,
            root,
            write_lock: Mutex::new(()),
        })
    }

    /// The bound filename.
    pub fn filename(&self) -> &Path {
        &self.filename
    }

    /// The document root.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Finds the node the given path refers to.
    pub fn lookup(&self, path: &str) -> Result<&Value, Error> {
        resolve::lookup(&self.root, path)
    }

    /// Finds the string the given path refers to.
    pub fn lookup_string(&self, path: &str) -> Result<String, Error> {
        resolve::lookup_string(&self.root, path)
    }

    /// Overwrites the value at the given path with a string and persists the
    /// document. The last path segment must name an existing key.
    pub fn set_string(&mut self, path: &str, value: &str) -> Result<(), Error> {
        set_string(&mut self.root, path, value)?;
        let data = serde_json::to_vec_pretty(&self.root)?;
        self.write(&data)
    }

    /// Appends a raw JSON fragment to the array at the given path and
    /// persists the document. See [`add_fragment`](crate::add_fragment) for
    /// the splice technique and its limitations.
    pub fn add_json(&mut self, path: &str, fragment: &str) -> Result<(), Error> {
        let root = add_fragment(&self.root, path, fragment)?;
        let data = serde_json::to_vec_pretty(&root)?;
        self.root = root;
        self.write(&data)
    }

    /// Writes the given bytes to the bound file, replacing its previous
    /// contents. Not an atomic rename; a crash mid-write can leave a
    /// truncated file.
    pub fn write(&self, data: &[u8]) -> Result<(), Error> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        // TODO: append a trailing newline?
        fs::write(&self.filename, data)?;
        Ok(())
    }
}

/// One-shot lookup: loads `filename` and returns the node at `path`.
pub fn json_value(filename: impl AsRef<Path>, path: &str) -> Result<Value, Error> {
    let jf = JsonFile::load(filename)?;
    Ok(jf.lookup(path)?.clone())
}

/// One-shot lookup: loads `filename` and returns the string at `path`.
pub fn json_string(filename: impl AsRef<Path>, path: &str) -> Result<String, Error> {
    let jf = JsonFile::load(filename)?;
    jf.lookup_string(path)
}

/// One-shot mutation: loads `filename`, overwrites the string at `path`, and
/// persists the result.
pub fn json_set(filename: impl AsRef<Path>, path: &str, value: &str) -> Result<(), Error> {
    let mut jf = JsonFile::load(filename)?;
    jf.set_string(path, value)
}

/// One-shot mutation: loads `filename`, appends the raw JSON fragment to the
/// array at `path`, and persists the result.
pub fn json_add(filename: impl AsRef<Path>, path: &str, fragment: &str) -> Result<(), Error> {
    let mut jf = JsonFile::load(filename)?;
    jf.add_json(path, fragment)
}
