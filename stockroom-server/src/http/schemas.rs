//! OpenAPI schema wrappers.
//!
//! These mirror the JSON produced by the handlers so the core models stay
//! free of any utoipa dependency.

use utoipa::ToSchema;

/// Inventory record as returned by the API.
#[derive(ToSchema)]
#[schema(as = InventoryItem)]
pub struct InventoryItemSchema {
    /// Auto-generated unique identifier
    #[schema(example = 1)]
    pub id: u64,
    /// Name of the inventory item
    #[schema(example = "Laptop")]
    pub name: String,
    /// Detailed description of the item
    #[schema(example = "High-performance laptop for business use")]
    pub description: String,
    /// Available quantity
    #[schema(example = 15)]
    pub quantity: u64,
    /// Price per unit
    #[schema(example = 1299.99)]
    pub price: f64,
}

/// Feedback record as returned by the API.
#[derive(ToSchema)]
#[schema(as = FeedbackItem)]
pub struct FeedbackItemSchema {
    /// Auto-generated unique identifier
    #[schema(example = 1)]
    pub id: u64,
    /// Date of the feedback
    #[schema(example = "2025-11-14")]
    pub date: String,
    /// Title of the feedback
    #[schema(example = "Great product quality")]
    pub title: String,
    /// Email of the reporter
    #[schema(example = "customer@example.com")]
    pub email: String,
    /// Detailed description of the feedback
    #[schema(example = "The product exceeded my expectations. Very satisfied with the purchase.")]
    pub description: String,
}

#[derive(ToSchema)]
pub struct InventoryListResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = 3)]
    pub count: usize,
    pub data: Vec<InventoryItemSchema>,
}

#[derive(ToSchema)]
pub struct InventoryItemResponse {
    #[schema(example = true)]
    pub success: bool,
    /// Present on create, update and delete
    #[schema(example = "Inventory item created successfully")]
    pub message: Option<String>,
    pub data: InventoryItemSchema,
}

#[derive(ToSchema)]
pub struct FeedbackListResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = 3)]
    pub count: usize,
    pub data: Vec<FeedbackItemSchema>,
}

#[derive(ToSchema)]
pub struct FeedbackItemResponse {
    #[schema(example = true)]
    pub success: bool,
    /// Present on create
    #[schema(example = "Feedback submitted successfully")]
    pub message: Option<String>,
    pub data: FeedbackItemSchema,
}

/// Failure envelope.
#[derive(ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    #[schema(example = "Inventory item with ID 1 not found")]
    pub error: String,
    /// One entry per rejected field, for validation failures
    pub errors: Option<Vec<String>>,
}
