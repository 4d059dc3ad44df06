use serde::{Deserialize, Serialize};

/// An item held in stock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Allocated by the store, never reused
    pub id: u64,
    pub name: String,
    pub description: String,
    /// Units on hand
    pub quantity: u64,
    /// Price per unit
    pub price: f64,
}

impl InventoryItem {
    /// Case-insensitive substring match against name or description.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// Fields supplied when creating or replacing an inventory item.
///
/// `quantity` is signed so that a negative value can reach validation and be
/// reported rather than being rejected by the type.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInventoryItem {
    pub name: String,
    pub description: String,
    pub quantity: i64,
    pub price: f64,
}

/// A customer feedback submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub id: u64,
    /// ISO-8601 date as submitted, e.g. `2025-11-14`
    pub date: String,
    pub title: String,
    /// Email of the reporter
    pub email: String,
    pub description: String,
}

/// Fields supplied when submitting feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedbackItem {
    pub date: String,
    pub title: String,
    pub email: String,
    pub description: String,
}
