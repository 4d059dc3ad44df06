pub mod db;
pub mod error;
pub mod feedback;
pub mod ids;
pub mod inventory;
pub mod models;
pub mod seed;
pub mod storage;
pub mod validation;

// Re-export commonly used types
pub use db::{open, Section, Stores};
pub use error::{Resource, StoreError};
pub use feedback::FeedbackStore;
pub use ids::IdAllocator;
pub use inventory::InventoryStore;
pub use models::{FeedbackItem, InventoryItem, NewFeedbackItem, NewInventoryItem};
pub use storage::{Document, Storage, StorageError};
