//! Items - the single resource kept by the catalogue.
//!
//! An [`Item`] is a flat record with a server-assigned id. Writes go through
//! [`ItemInput`], whose fields are all optional so the same shape serves both
//! creation (every field required) and partial updates (any subset).
//!
//! ## Example
//!
//! ```ignore
//! use items_api::{InMemoryItemRepository, ItemInput, ItemRepository};
//!
//! let repo = InMemoryItemRepository::new();
//! let item = repo.create(ItemInput::new("Widget", "A widget", 10))?;
//! assert_eq!(item.id, 1);
//! ```

mod price;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub use price::coerce_price;

/// A stored catalogue item.
///
/// `price` is serialized as a plain JSON number; a `NaN` price becomes `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl Item {
    /// Overwrite every field that is present in `input`.
    pub(crate) fn apply(&mut self, input: ItemInput) {
        if let Some(name) = input.name {
            self.name = name;
        }
        if let Some(description) = input.description {
            self.description = description;
        }
        if let Some(price) = input.price {
            self.price = coerce_price(&price);
        }
    }
}

/// Client-supplied fields for creating or updating an item.
///
/// A field is "present" when it is `Some`. A `null` name or description
/// decodes as absent; a `null` price is present and coerces to `NaN`.
/// `price` is kept as raw JSON until the repository coerces it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Value>,
}

/// Any value that appears in the input, `null` included, is `Some`.
/// Only a missing key falls back to `None` via `#[serde(default)]`.
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl ItemInput {
    /// Input with all three fields present.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<Value>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            price: Some(price.into()),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_price(mut self, price: impl Into<Value>) -> Self {
        self.price = Some(price.into());
        self
    }

    /// Names of the creation fields that are absent, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.description.is_none() {
            missing.push("description");
        }
        if self.price.is_none() {
            missing.push("price");
        }
        missing
    }
}

/// Parse a raw path segment into an item id.
///
/// Anything that is not a plain unsigned integer yields `None`, which callers
/// treat exactly like an id that matches no item.
pub fn parse_id(raw: &str) -> Option<u64> {
    raw.parse::<u64>().ok()
}
