//! Menu data: the dish record and its DTOs.
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Category name that matches every item in a [`CatalogFilter`].
pub const ALL_CATEGORIES: &str = "All";

/// Category given to items created without one.
pub const DEFAULT_CATEGORY: &str = "Desserts";

/// Glyph given to items created without one.
pub const DEFAULT_IMAGE: &str = "🍰";

/// Type-safe identifier for catalog items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u64);

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

/// A dish on the menu.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](resource_actor::ResourceActor).
///
/// See [`impl ActorEntity for CatalogItem`](#impl-ActorEntity-for-CatalogItem) for details on:
/// - Creation parameters ([`CatalogItemCreate`])
/// - Update parameters ([`CatalogItemUpdate`])
/// - List filtering ([`CatalogFilter`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub image: String,
}

impl CatalogItem {
    /// Builds an item from already-validated parts.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        category: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            category: category.into(),
            image: image.into(),
        }
    }
}

/// DTO for adding a dish. The price is the text an operator typed, e.g. `"45.00"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItemCreate {
    pub name: String,
    pub description: String,
    pub price: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
}

impl CatalogItemCreate {
    /// A create request with the default category and glyph.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price: price.into(),
            category: String::new(),
            image: String::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

/// DTO for edits. Absent fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
}

/// Browse criteria: a case-insensitive name query plus a category.
///
/// An empty query matches every name and [`ALL_CATEGORIES`] matches every category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogFilter {
    pub query: String,
    pub category: String,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl CatalogFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            ..Self::default()
        }
    }

    pub fn accepts(&self, item: &CatalogItem) -> bool {
        let category_ok = self.category == ALL_CATEGORIES || self.category == item.category;
        let query = self.query.to_lowercase();
        category_ok && (query.is_empty() || item.name.to_lowercase().contains(&query))
    }
}
