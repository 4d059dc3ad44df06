use std::sync::{Arc, Mutex, PoisonError, RwLock};

use super::traits::Section;
use crate::error::StoreError;
use crate::storage::Storage;

/// In-memory copy of a section plus the storage it is persisted to.
///
/// Mutations are serialized by `mutation` and run "copy, mutate, persist,
/// commit". The `state` write guard is only taken for the final swap, so
/// readers keep seeing the last committed snapshot while a save waits on the
/// file lock. A failed save leaves memory untouched.
pub(crate) struct SectionCell<S> {
    storage: Arc<Storage>,
    mutation: Mutex<()>,
    state: RwLock<S>,
}

impl<S: Section + Clone> SectionCell<S> {
    pub(crate) fn new(storage: Arc<Storage>, state: S) -> Self {
        Self {
            storage,
            mutation: Mutex::new(()),
            state: RwLock::new(state),
        }
    }

    pub(crate) fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Runs a read-only closure against the current state
    pub(crate) fn read<T>(&self, read_fn: impl FnOnce(&S) -> T) -> T {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        read_fn(&state)
    }

    /// Perform an atomic update operation.
    /// The closure works on a copy; the copy replaces the live state only
    /// after it has been written to disk.
    pub(crate) fn update_atomically<T>(
        &self,
        update_fn: impl FnOnce(&mut S) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let _mutation = self.mutation.lock().unwrap_or_else(PoisonError::into_inner);

        // Only mutations holding `mutation` write to `state`, so this copy
        // is still current when it is committed below
        let mut next = self.read(S::clone);
        let output = update_fn(&mut next)?;
        self.storage.save_section(&next)?;

        *self.state.write().unwrap_or_else(PoisonError::into_inner) = next;
        Ok(output)
    }
}
