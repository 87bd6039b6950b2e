//! Repository - the item collection and its CRUD contract.
//!
//! [`ItemRepository`] is the seam the HTTP layer talks to;
//! [`InMemoryItemRepository`] is the process-memory implementation.

mod error;
mod in_memory;

use crate::item::{parse_id, Item, ItemInput};

pub use error::RepositoryError;
pub use in_memory::InMemoryItemRepository;

/// CRUD operations over the item collection.
///
/// Ids are assigned by the repository from a counter that only increases,
/// so an id is never handed out twice, even after the item is deleted.
pub trait ItemRepository: Send + Sync {
    /// All items in insertion order.
    fn list(&self) -> Result<Vec<Item>, RepositoryError>;

    /// The item with exactly this id.
    fn get(&self, id: u64) -> Result<Item, RepositoryError>;

    /// Store a new item. `name`, `description` and `price` must all be present.
    fn create(&self, input: ItemInput) -> Result<Item, RepositoryError>;

    /// Overwrite the fields present in `input` and return the result.
    fn update(&self, id: u64, input: ItemInput) -> Result<Item, RepositoryError>;

    /// Remove the item, keeping the order of the rest.
    fn delete(&self, id: u64) -> Result<(), RepositoryError>;

    /// [`get`](Self::get) by a raw, unparsed id. Ids that do not parse are
    /// reported as `NotFound`, same as an unknown id.
    fn get_raw(&self, raw: &str) -> Result<Item, RepositoryError> {
        self.get(parse_id(raw).ok_or(RepositoryError::NotFound)?)
    }

    fn update_raw(&self, raw: &str, input: ItemInput) -> Result<Item, RepositoryError> {
        self.update(parse_id(raw).ok_or(RepositoryError::NotFound)?, input)
    }

    fn delete_raw(&self, raw: &str) -> Result<(), RepositoryError> {
        self.delete(parse_id(raw).ok_or(RepositoryError::NotFound)?)
    }
}
