mod item;
mod repository;

#[cfg(feature = "http")]
pub mod api;
#[cfg(feature = "http")]
pub mod config;
#[cfg(feature = "http")]
pub mod logging;

pub use item::{coerce_price, parse_id, Item, ItemInput};
pub use repository::{InMemoryItemRepository, ItemRepository, RepositoryError};
