//! A customer's in-progress selection.
//!
//! The merge rules live here as plain synchronous methods so they can be tested without
//! an actor; the cart actor's actions delegate to them.
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use std::fmt::Display;

use super::catalog::{CatalogItem, ItemId};

/// Type-safe identifier for carts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CartId(pub u64);

impl From<u64> for CartId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cart_{}", self.0)
    }
}

/// One aggregated entry: a copy of the catalog item taken when it was first added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: ItemId,
    pub name: String,
    pub unit_price: Decimal,
    pub image: String,
    pub description: String,
    pub category: String,
    pub quantity: u32,
}

impl CartLine {
    pub fn from_item(item: &CatalogItem) -> Self {
        Self {
            item_id: item.id,
            name: item.name.clone(),
            unit_price: item.price,
            image: item.image.clone(),
            description: item.description.clone(),
            category: item.category.clone(),
            quantity: 1,
        }
    }

    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// A cart scoped to one customer session.
///
/// Holds at most one line per catalog item, in the order items were first added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: CartId,
    pub customer_name: String,
    pub table: String,
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new(id: CartId, customer_name: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            id,
            customer_name: customer_name.into(),
            table: table.into(),
            lines: Vec::new(),
        }
    }

    /// Adds one unit of `item`.
    ///
    /// A repeat add bumps the quantity and keeps the snapshot from the first add, so a
    /// price edited in the catalog meanwhile does not reach this cart.
    pub fn add(&mut self, item: &CatalogItem) -> &CartLine {
        let index = match self.lines.iter().position(|line| line.item_id == item.id) {
            Some(index) => {
                self.lines[index].quantity += 1;
                index
            }
            None => {
                self.lines.push(CartLine::from_item(item));
                self.lines.len() - 1
            }
        };
        &self.lines[index]
    }

    /// Drops the whole line for `item_id`, whatever its quantity.
    pub fn remove(&mut self, item_id: ItemId) -> Option<CartLine> {
        let index = self.lines.iter().position(|line| line.item_id == item_id)?;
        Some(self.lines.remove(index))
    }

    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Sum of quantities, as opposed to the number of lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, item_id: ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.item_id == item_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// DTO for opening a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartCreate {
    pub customer_name: String,
    pub table: String,
}
