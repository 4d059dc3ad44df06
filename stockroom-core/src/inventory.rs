//! Inventory store: CRUD and search over inventory items

use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

use crate::db::{field, Section, SectionCell};
use crate::error::{Resource, StoreError};
use crate::ids::IdAllocator;
use crate::models::{InventoryItem, NewInventoryItem};
use crate::seed;
use crate::storage::{Document, Storage};
use crate::validation::{self, InventoryFields};

const ITEMS_KEY: &str = "inventory";
const NEXT_ID_KEY: &str = "nextId";

/// Inventory records plus their id counter, as persisted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventorySection {
    pub items: Vec<InventoryItem>,
    pub ids: IdAllocator,
}

impl Section for InventorySection {
    const NAME: &'static str = "inventory";

    fn read_from(document: &Document) -> serde_json::Result<Self> {
        let items: Vec<InventoryItem> = field(document, ITEMS_KEY)?.unwrap_or_default();
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

/// Owns the inventory collection and persists it to the shared data file
pub struct InventoryStore {
    cell: SectionCell<InventorySection>,
}

impl InventoryStore {
    /// Builds the store from a loaded document, seeding sample items when
    /// the section is missing or empty
    pub fn load(storage: Arc<Storage>, document: Option<&Document>) -> Result<Self, StoreError> {
        let mut section = match document {
            Some(document) => storage.read_section::<InventorySection>(document)?,
            None => InventorySection::default(),
        };

        if section.items.is_empty() {
            warn!(path = ?storage.path(), "no inventory items found, initializing with sample data");
            section.items = seed::sample_inventory();
            section.ids.advance_to(seed::SEED_NEXT_ID);
            storage.save_section(&section)?;
        }
        info!(count = section.items.len(), next_id = ?section.ids.peek(), "loaded inventory items");

        Ok(Self {
            cell: SectionCell::new(storage, section),
        })
    }

    /// All items in insertion order
    pub fn list_all(&self) -> Vec<InventoryItem> {
        self.cell.read(|section| section.items.clone())
    }

    /// Items whose name or description contains `term`, ignoring case.
    /// An empty term matches every item.
    pub fn search(&self, term: &str) -> Vec<InventoryItem> {
        let needle = term.to_lowercase();
        self.cell.read(|section| {
            section
                .items
                .iter()
                .filter(|item| item.matches(&needle))
                .cloned()
                .collect()
        })
    }

    pub fn get(&self, id: u64) -> Result<InventoryItem, StoreError> {
        self.cell.read(|section| {
            section
                .items
                .iter()
                .find(|item| item.id == id)
                .cloned()
                .ok_or_else(|| StoreError::not_found(Resource::Inventory, id))
        })
    }

    pub fn create(&self, input: NewInventoryItem) -> Result<InventoryItem, StoreError> {
        let fields = validation::inventory(&input)?;

        let item = self.cell.update_atomically(|section| {
            let item = InventoryItem {
                id: section.ids.allocate()?,
                name: fields.name,
                description: fields.description,
                quantity: fields.quantity,
                price: fields.price,
            };
            section.items.push(item.clone());
            Ok(item)
        })?;

        info!(id = item.id, name = %item.name, "created inventory item");
        Ok(item)
    }

    /// Replaces every mutable field of an existing item
    pub fn update(&self, id: u64, input: NewInventoryItem) -> Result<InventoryItem, StoreError> {
        let fields = validation::inventory(&input)?;

        let item = self.cell.update_atomically(|section| {
            let item = section
                .items
                .iter_mut()
                .find(|item| item.id == id)
                .ok_or_else(|| StoreError::not_found(Resource::Inventory, id))?;
            replace_fields(item, fields);
            Ok(item.clone())
        })?;

        info!(id, "updated inventory item");
        Ok(item)
    }

    /// Removes an item and returns it
    pub fn delete(&self, id: u64) -> Result<InventoryItem, StoreError> {
        let item = self.cell.update_atomically(|section| {
            let index = section
                .items
                .iter()
                .position(|item| item.id == id)
                .ok_or_else(|| StoreError::not_found(Resource::Inventory, id))?;
            Ok(section.items.remove(index))
        })?;

        info!(id, "deleted inventory item");
        Ok(item)
    }

    pub fn len(&self) -> usize {
        self.cell.read(|section| section.items.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Id the next created item will receive
    pub fn next_id(&self) -> Option<u64> {
        self.cell.read(|section| section.ids.peek())
    }

    pub fn storage(&self) -> &Storage {
        self.cell.storage()
    }
}

fn replace_fields(item: &mut InventoryItem, fields: InventoryFields) {
    item.name = fields.name;
    item.description = fields.description;
    item.quantity = fields.quantity;
    item.price = fields.price;
}
