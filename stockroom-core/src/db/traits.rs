//! Section abstraction over the shared data file
//!
//! Each store owns a set of top-level keys in the JSON document. A `Section`
//! knows how to read those keys out of a loaded document and how to write
//! them back without touching anything else.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::storage::Document;

/// One store's slice of the shared document
pub trait Section: Sized {
    /// Name used in log lines
    const NAME: &'static str;

    /// Decodes the section from a loaded document. Missing keys read as empty.
    fn read_from(document: &Document) -> serde_json::Result<Self>;

    /// Overlays the section's keys onto the document
    fn write_into(&self, document: &mut Document) -> serde_json::Result<()>;
}

/// Reads an optional top-level key, treating `null` like an absent key
pub fn field<T: DeserializeOwned>(document: &Document, key: &str) -> serde_json::Result<Option<T>> {
    match document.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => T::deserialize(value).map(Some),
    }
}
