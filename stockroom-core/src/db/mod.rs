//! Bootstrap for the file-backed stores
//!
//! Both stores share one `Storage` handle on the data file. The document is
//! read once at startup and each store picks its own section out of it,
//! seeding sample data when that section is empty.

mod cell;
mod traits;

pub(crate) use cell::SectionCell;
pub use traits::{field, Section};

use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::StoreError;
use crate::feedback::FeedbackStore;
use crate::inventory::InventoryStore;
use crate::storage::Storage;

/// The stores backed by one data file
pub struct Stores {
    pub inventory: InventoryStore,
    pub feedback: FeedbackStore,
}

/// Opens the data file, loading both sections or seeding them on first run.
///
/// A missing file is not an error. A file that exists but cannot be read or
/// parsed is, and the process should not start on top of it.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Stores, StoreError> {
    let storage = Arc::new(Storage::new(path));

    let document = storage.load()?;
    if document.is_none() {
        warn!(path = ?storage.path(), "data file not found, initializing with sample data");
    }

    let inventory = InventoryStore::load(Arc::clone(&storage), document.as_ref())?;
    let feedback = FeedbackStore::load(Arc::clone(&storage), document.as_ref())?;

    info!(
        path = ?storage.path(),
        inventory = inventory.len(),
        feedback = feedback.len(),
        "data file ready"
    );

    Ok(Stores {
        inventory,
        feedback,
    })
}
