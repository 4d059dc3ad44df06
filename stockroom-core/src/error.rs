use std::fmt;
use thiserror::Error;

use crate::storage::StorageError;

/// The two record kinds held in the data file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Inventory,
    Feedback,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Inventory => write!(f, "Inventory item"),
            Resource::Feedback => write!(f, "Feedback item"),
        }
    }
}

/// Errors returned by the stores
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{resource} with ID {id} not found")]
    NotFound { resource: Resource, id: u64 },

    /// One message per rejected field
    #[error("Invalid input: {}", .0.join("; "))]
    InvalidInput(Vec<String>),

    /// Every id up to `u64::MAX` has been handed out
    #[error("No identifiers left to allocate")]
    IdsExhausted,

    /// The data file could not be read or written; the operation did not
    /// take effect
    #[error(transparent)]
    Persistence(#[from] StorageError),
}

impl StoreError {
    pub fn not_found(resource: Resource, id: u64) -> Self {
        StoreError::NotFound { resource, id }
    }
}
