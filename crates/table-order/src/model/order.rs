//! Submitted orders.
//!
//! An [`Order`] is a frozen copy of a cart plus a kitchen status. The status rules are in
//! [`crate::order_actor::lifecycle`].
use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use std::fmt::Display;

use super::cart::{Cart, CartLine};
use crate::display::{format_clock, format_money};

/// Type-safe identifier for orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Kitchen progress of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Ready => "Ready",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl OrderLine {
    pub fn new(name: impl Into<String>, quantity: u32, unit_price: Decimal) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        Self::new(line.name.clone(), line.quantity, line.unit_price)
    }
}

/// An order on the kitchen feed.
///
/// # Actor Framework
/// Managed by a capacity-bounded [`ResourceActor`](resource_actor::ResourceActor). Its only
/// mutation is the status transition action; there is no update DTO, so the lines can not
/// change after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub table: String,
    pub lines: Vec<OrderLine>,
    pub status: OrderStatus,
    pub created_at: DateTime<Local>,
}

impl Order {
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(OrderLine::subtotal).sum()
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Order #{} | {} | {} | {} | {} | {} items | {}",
            self.id.0,
            self.customer_name,
            self.table,
            format_clock(&self.created_at),
            self.status,
            self.item_count(),
            format_money(self.total()),
        )
    }
}

/// DTO for submitting an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer_name: String,
    pub table: String,
    pub lines: Vec<OrderLine>,
}

impl OrderCreate {
    /// Copies the cart's lines. Emptiness is checked when the order is created.
    pub fn from_cart(cart: &Cart) -> Self {
        Self {
            customer_name: cart.customer_name.clone(),
            table: cart.table.clone(),
            lines: cart.lines().iter().map(OrderLine::from).collect(),
        }
    }
}
