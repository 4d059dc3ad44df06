//! Feedback store: an append-only log of customer submissions.
//! Records are created and read; there is no update or delete.

use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

use crate::db::{field, Section, SectionCell};
use crate::error::{Resource, StoreError};
use crate::ids::IdAllocator;
use crate::models::{FeedbackItem, NewFeedbackItem};
use crate::seed;
use crate::storage::{Document, Storage};
use crate::validation;

const ITEMS_KEY: &str = "feedback";
const NEXT_ID_KEY: &str = "feedbackNextId";

/// Feedback records plus their id counter, as persisted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackSection {
    pub items: Vec<FeedbackItem>,
    pub ids: IdAllocator,
}

impl Section for FeedbackSection {
    const NAME: &'static str = "feedback";

    fn read_from(document: &Document) -> serde_json::Result<Self> {
        let items: Vec<FeedbackItem> = field(document, ITEMS_KEY)?.unwrap_or_default();
        // Older files carry no counter; the next id then follows the highest id
        let persisted = field(document, NEXT_ID_KEY)?;
        let ids = IdAllocator::restore(persisted, items.iter().map(|item| item.id));
        Ok(Self { items, ids })
    }

    fn write_into(&self, document: &mut Document) -> serde_json::Result<()> {
        document.insert(ITEMS_KEY.to_string(), serde_json::to_value(&self.items)?);
        document.insert(NEXT_ID_KEY.to_string(), json!(self.ids.peek()));
        Ok(())
    }
}

/// Owns the feedback collection and persists it to the shared data file
pub struct FeedbackStore {
    cell: SectionCell<FeedbackSection>,
}

impl FeedbackStore {
    /// Builds the store from a loaded document, seeding sample feedback when
    /// the section is missing or empty
    pub fn load(storage: Arc<Storage>, document: Option<&Document>) -> Result<Self, StoreError> {
        let mut section = match document {
            Some(document) => storage.read_section::<FeedbackSection>(document)?,
            None => FeedbackSection::default(),
        };

        if section.items.is_empty() {
            warn!(path = ?storage.path(), "no feedback found, initializing with sample data");
            section.items = seed::sample_feedback();
            section.ids.advance_to(seed::SEED_NEXT_ID);
            storage.save_section(&section)?;
        }
        info!(count = section.items.len(), next_id = ?section.ids.peek(), "loaded feedback items");

        Ok(Self {
            cell: SectionCell::new(storage, section),
        })
    }

    pub fn list_all(&self) -> Vec<FeedbackItem> {
        self.cell.read(|section| section.items.clone())
    }

    pub fn get(&self, id: u64) -> Result<FeedbackItem, StoreError> {
        self.cell.read(|section| {
            section
                .items
                .iter()
                .find(|item| item.id == id)
                .cloned()
                .ok_or_else(|| StoreError::not_found(Resource::Feedback, id))
        })
    }

    pub fn create(&self, input: NewFeedbackItem) -> Result<FeedbackItem, StoreError> {
        let fields = validation::feedback(&input)?;

        let item = self.cell.update_atomically(|section| {
            let item = FeedbackItem {
                id: section.ids.allocate()?,
                date: fields.date,
                title: fields.title,
                email: fields.email,
                description: fields.description,
            };
            section.items.push(item.clone());
            Ok(item)
        })?;

        info!(id = item.id, title = %item.title, "recorded feedback");
        Ok(item)
    }

    pub fn len(&self) -> usize {
        self.cell.read(|section| section.items.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn next_id(&self) -> Option<u64> {
        self.cell.read(|section| section.ids.peek())
    }

    pub fn storage(&self) -> &Storage {
        self.cell.storage()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::TempDir;

    fn seeded_store(temp_dir: &TempDir) -> FeedbackStore {
        let storage = Arc::new(Storage::new(temp_dir.path().join("data.json")));
        FeedbackStore::load(storage, None).unwrap()
    }

    fn submission() -> NewFeedbackItem {
        NewFeedbackItem {
            date: "2025-11-20".to_string(),
            title: "  Great product quality ".to_string(),
            email: " customer@example.com".to_string(),
            description: "The product exceeded my expectations. ".to_string(),
        }
    }

    #[test]
    fn test_seeded_store_lists_sample_feedback() {
        let temp_dir = TempDir::new().unwrap();
        let store = seeded_store(&temp_dir);

        let items = store.list_all();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].title, "Excellent Service");
        assert_eq!(items[2].date, "2025-11-14");
        assert_eq!(store.next_id(), Some(4));
    }

    #[test]
    fn test_create_trims_and_appends() {
        let temp_dir = TempDir::new().unwrap();
        let store = seeded_store(&temp_dir);

        let created = store.create(submission()).unwrap();
        assert_eq!(
            created,
            FeedbackItem {
                id: 4,
                date: "2025-11-20".to_string(),
                title: "Great product quality".to_string(),
                email: "customer@example.com".to_string(),
                description: "The product exceeded my expectations.".to_string(),
            }
        );
        assert_eq!(store.get(4).unwrap(), created);
        assert_eq!(store.list_all().last(), Some(&created));
    }

    #[test]
    fn test_create_rejects_invalid_email() {
        let temp_dir = TempDir::new().unwrap();
        let store = seeded_store(&temp_dir);

        let result = store.create(NewFeedbackItem {
            email: "not-an-email".to_string(),
            ..submission()
        });

        match result {
            Err(StoreError::InvalidInput(problems)) => {
                assert_eq!(problems, vec!["email must be an email"]);
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_get_missing_id() {
        let temp_dir = TempDir::new().unwrap();
        let store = seeded_store(&temp_dir);

        let err = store.get(42).unwrap_err();
        assert_eq!(err.to_string(), "Feedback item with ID 42 not found");
    }

    #[test]
    fn test_next_id_derived_when_counter_missing() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Arc::new(Storage::new(temp_dir.path().join("data.json")));
        let document = serde_json::json!({
            "feedback": [
                { "id": 3, "date": "2025-11-14", "title": "A", "email": "a@example.com", "description": "x" },
                { "id": 8, "date": "2025-11-15", "title": "B", "email": "b@example.com", "description": "y" }
            ]
        });

        let store = FeedbackStore::load(storage, document.as_object()).unwrap();
        assert_eq!(store.next_id(), Some(9));
        assert_eq!(store.create(submission()).unwrap().id, 9);
    }

    #[test]
    fn test_write_preserves_inventory_on_disk() {
        let temp_dir = TempDir::new().unwrap();
        let store = seeded_store(&temp_dir);
        let path = store.storage().path().to_path_buf();

        let mut document: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        document["inventory"] = serde_json::json!([
            { "id": 1, "name": "Laptop", "description": "Portable", "quantity": 1, "price": 1.0 }
        ]);
        document["nextId"] = serde_json::json!(2);
        fs::write(&path, document.to_string()).unwrap();

        store.create(submission()).unwrap();

        let on_disk: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk["inventory"][0]["description"], "Portable");
        assert_eq!(on_disk["nextId"], 2);
        assert_eq!(on_disk["feedback"].as_array().unwrap().len(), 4);
        assert_eq!(on_disk["feedbackNextId"], 5);
    }
}
