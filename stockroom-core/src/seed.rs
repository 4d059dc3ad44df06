//! Sample records written on first run

use crate::models::{FeedbackItem, InventoryItem};

/// Sample inventory with ids 1-3
pub fn sample_inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            id: 1,
            name: "Laptop".to_string(),
            description: "High-performance laptop for business use".to_string(),
            quantity: 15,
            price: 1299.99,
        },
        InventoryItem {
            id: 2,
            name: "Wireless Mouse".to_string(),
            description: "Ergonomic wireless mouse with USB receiver".to_string(),
            quantity: 50,
            price: 29.99,
        },
        InventoryItem {
            id: 3,
            name: "USB-C Cable".to_string(),
            description: "6ft USB-C charging cable".to_string(),
            quantity: 100,
            price: 12.99,
        },
    ]
}

/// Sample feedback with ids 1-3
pub fn sample_feedback() -> Vec<FeedbackItem> {
    vec![
        FeedbackItem {
            id: 1,
            date: "2025-11-10".to_string(),
            title: "Excellent Service".to_string(),
            email: "john.doe@example.com".to_string(),
            description:
                "The customer support team was very helpful and responsive. Highly recommend!"
                    .to_string(),
        },
        FeedbackItem {
            id: 2,
            date: "2025-11-12".to_string(),
            title: "Product Quality Issue".to_string(),
            email: "jane.smith@example.com".to_string(),
            description:
                "The laptop I received had a defective keyboard. Hoping for a quick replacement."
                    .to_string(),
        },
        FeedbackItem {
            id: 3,
            date: "2025-11-14".to_string(),
            title: "Fast Delivery".to_string(),
            email: "mike.johnson@example.com".to_string(),
            description: "Ordered on Monday, received on Wednesday. Packaging was excellent!"
                .to_string(),
        },
    ]
}

/// First id handed out after seeding
pub const SEED_NEXT_ID: u64 = 4;
