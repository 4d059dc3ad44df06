//! Integer id allocation
//!
//! Both resources persist their counter next to their records. When a
//! document carries no counter, the next id is derived from the highest id
//! already present.

use tracing::{error, warn};

use crate::error::StoreError;

/// Hands out strictly increasing ids; retired ids are never handed out again
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdAllocator {
    /// `None` once `u64::MAX` has been handed out
    next: Option<u64>,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next: Some(1) }
    }
}

impl IdAllocator {
    /// Rebuilds the allocator after a load.
    ///
    /// A persisted counter is used as-is unless it would collide with an
    /// existing record, in which case it is raised past the highest id.
    pub fn restore<I>(persisted: Option<u64>, existing_ids: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let floor = match existing_ids.into_iter().max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };

        let Some(floor) = floor else {
            error!("a record already holds the largest possible id; no ids left to allocate");
            return Self { next: None };
        };

        let next = match persisted {
            Some(counter) if counter >= floor => counter,
            Some(counter) => {
                warn!(counter, repaired = floor, "stored id counter is behind existing records");
                floor
            }
            None => floor,
        };

        Self { next: Some(next) }
    }

    /// Returns the next id and advances the counter.
    ///
    /// Fails with [`StoreError::IdsExhausted`] once every id has been used.
    pub fn allocate(&mut self) -> Result<u64, StoreError> {
        let id = self.next.ok_or(StoreError::IdsExhausted)?;
        self.next = id.checked_add(1);
        Ok(id)
    }

    /// Next id that `allocate` will return, `None` when exhausted
    pub fn peek(&self) -> Option<u64> {
        self.next
    }

    /// Makes sure the next id is at least `minimum`
    pub fn advance_to(&mut self, minimum: u64) {
        self.next = self.next.map(|next| next.max(minimum));
    }
}
