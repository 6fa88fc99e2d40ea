//! Products in the catalog.
//!
//! # Storage
//! [`Product`] implements the [`StoredEntity`](entity_store::StoredEntity) trait,
//! allowing it to be held by a [`StoreActor`](entity_store::StoreActor).
//!
//! Products are built by [`ProductService`](crate::service::ProductService) from a
//! [`ProductInput`] once it has passed validation and its category has been resolved.
use crate::model::{Category, CategoryId};
use entity_store::StoredEntity;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<ProductId>,
    pub name: String,
    pub price: f64,
    pub category: Category,
}

impl Product {
    /// Creates a new, unsaved Product instance.
    ///
    /// # Arguments
    /// * `name` - Product name
    /// * `price` - Product price
    /// * `category` - The resolved category (not just a reference)
    pub fn new(name: impl Into<String>, price: f64, category: Category) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
            category,
        }
    }

    /// The id as text, or `-` for a product that was never saved.
    pub fn id_label(&self) -> String {
        self.id.map_or_else(|| "-".to_string(), |id| id.to_string())
    }
}

impl StoredEntity for Product {
    type Id = ProductId;

    fn id(&self) -> Option<ProductId> {
        self.id
    }

    fn assign_id(&mut self, id: ProductId) {
        self.id = Some(id);
    }
}

/// Reference to a category by id, as it arrives in a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CategoryRef {
    pub id: Option<CategoryId>,
}

/// Unvalidated product data for insert and update. `None` marks a missing field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductInput {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<CategoryRef>,
}

impl ProductInput {
    /// A candidate with every field present.
    pub fn new(name: impl Into<String>, price: f64, category_id: CategoryId) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price),
            category: Some(CategoryRef {
                id: Some(category_id),
            }),
        }
    }

    /// The referenced category id, if both the reference and its id are present.
    pub fn category_id(&self) -> Option<CategoryId> {
        self.category.and_then(|category| category.id)
    }
}
