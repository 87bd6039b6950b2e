//! InMemoryItemRepository - Vec-backed item store living in process memory.

use std::sync::{Arc, RwLock};

use tracing::debug;

use super::{ItemRepository, RepositoryError};
use crate::item::{coerce_price, Item, ItemInput};

/// Items plus the next id to hand out. Guarded together so id assignment
/// and insertion happen under one write lock. `next_id` is `None` once
/// `u64::MAX` has been handed out.
struct Catalog {
    items: Vec<Item>,
    next_id: Option<u64>,
}

impl Catalog {
    fn position(&self, id: u64) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

/// In-memory item repository.
///
/// Reads share the lock; `create`, `update` and `delete` are serialized
/// behind the write lock. Clone-friendly via Arc: clones see the same items.
#[derive(Clone)]
pub struct InMemoryItemRepository {
    catalog: Arc<RwLock<Catalog>>,
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryItemRepository {
    /// Create an empty repository whose first id is 1.
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Create a repository holding `items`, with the counter set past the
    /// highest existing id. If that id is `u64::MAX`, every later create
    /// fails with `IdsExhausted`.
    pub fn with_items(items: Vec<Item>) -> Self {
        let next_id = match items.iter().map(|item| item.id).max() {
            Some(highest) => highest.checked_add(1),
            None => Some(1),
        };
        Self {
            catalog: Arc::new(RwLock::new(Catalog { items, next_id })),
        }
    }

    /// Create a repository pre-populated with three sample items (ids 1-3).
    /// The next created item gets id 4.
    pub fn seeded() -> Self {
        Self::with_items(vec![
            Item {
                id: 1,
                name: "Sample Item 1".into(),
                description: "This is a sample item".into(),
                price: 29.99,
            },
            Item {
                id: 2,
                name: "Sample Item 2".into(),
                description: "Another sample item".into(),
                price: 39.99,
            },
            Item {
                id: 3,
                name: "Sample Item 3".into(),
                description: "Another sample item - Description 3".into(),
                price: 39.99,
            },
        ])
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Catalog>, RepositoryError> {
        self.catalog
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("read"))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Catalog>, RepositoryError> {
        self.catalog
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("write"))
    }
}

impl ItemRepository for InMemoryItemRepository {
    fn list(&self) -> Result<Vec<Item>, RepositoryError> {
        Ok(self.read()?.items.clone())
    }

    fn get(&self, id: u64) -> Result<Item, RepositoryError> {
        self.read()?
            .items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    fn create(&self, input: ItemInput) -> Result<Item, RepositoryError> {
        let (Some(name), Some(description), Some(price)) =
            (input.name.as_ref(), input.description.as_ref(), input.price.as_ref())
        else {
            return Err(RepositoryError::InvalidInput {
                missing: input.missing_fields(),
            });
        };

        let mut catalog = self.write()?;
        let id = catalog.next_id.ok_or(RepositoryError::IdsExhausted)?;
        let item = Item {
            id,
            name: name.clone(),
            description: description.clone(),
            price: coerce_price(price),
        };
        catalog.next_id = id.checked_add(1);
        catalog.items.push(item.clone());

        debug!(id = item.id, "item stored");
        Ok(item)
    }

    fn update(&self, id: u64, input: ItemInput) -> Result<Item, RepositoryError> {
        let mut catalog = self.write()?;
        let index = catalog.position(id).ok_or(RepositoryError::NotFound)?;
        let item = &mut catalog.items[index];
        item.apply(input);
        Ok(item.clone())
    }

    fn delete(&self, id: u64) -> Result<(), RepositoryError> {
        let mut catalog = self.write()?;
        let index = catalog.position(id).ok_or(RepositoryError::NotFound)?;
        catalog.items.remove(index);

        debug!(id, remaining = catalog.items.len(), "item removed");
        Ok(())
    }
}
