//! Custom actions for the Cart actor.
//!
//! Everything a customer does to a cart goes through one of these, so two input sources
//! adding to the same cart are serialized by the actor queue.

use rust_decimal::Decimal;

use crate::model::{CartLine, CatalogItem, ItemId, Order};

/// Custom actions for Cart entities.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds one unit of an item snapshot the caller already holds.
    AddItem(CatalogItem),
    /// Looks the item up in the catalog, then adds one unit of it.
    ///
    /// # Errors
    /// Fails with `ItemNotFound` if the catalog has no such item.
    AddFromCatalog(ItemId),
    /// Removes the whole line for an item.
    ///
    /// # Errors
    /// Fails with `LineNotFound` if the cart holds no line for it.
    Remove(ItemId),
    /// Reads the current total.
    Total,
    /// Reads the sum of quantities.
    ItemCount,
    /// Reads a copy of the lines.
    Lines,
    /// Submits the cart to the order feed and closes it, in one step of the cart's queue.
    ///
    /// # Errors
    /// Fails with `EmptyCart` if there are no lines, or with the feed's error if the
    /// submission is refused. Either way the cart stays open and unchanged.
    Checkout,
}

impl CartAction {
    /// Whether the action changes the cart. Reads publish no change event.
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            CartAction::AddItem(_)
                | CartAction::AddFromCatalog(_)
                | CartAction::Remove(_)
                | CartAction::Checkout
        )
    }

    /// Whether a successful action closes the cart.
    pub fn closes_cart(&self) -> bool {
        matches!(self, CartAction::Checkout)
    }
}

/// Results from CartActions - variants match 1:1 with CartAction
#[derive(Debug, Clone, PartialEq)]
pub enum CartActionResult {
    /// The line as it stands after the add.
    AddItem(CartLine),
    AddFromCatalog(CartLine),
    /// The line that was dropped.
    Remove(CartLine),
    Total(Decimal),
    ItemCount(u32),
    Lines(Vec<CartLine>),
    /// The order the cart became.
    Checkout(Order),
}
