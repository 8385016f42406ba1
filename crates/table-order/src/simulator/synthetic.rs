//! Made-up orders for the simulated feed.

use rand::Rng;
use rust_decimal::Decimal;

use crate::model::{OrderCreate, OrderLine};

/// The fixed basket every simulated customer orders.
pub fn demo_lines() -> Vec<OrderLine> {
    vec![
        OrderLine::new("Milk Tart", 2, Decimal::new(45, 0)),
        OrderLine::new("Chocolate Cake", 1, Decimal::new(85, 0)),
    ]
}

/// A random `"Customer N"` (N in 0..100) at a random `"Table M"` (M in 1..=20).
pub fn synthetic_order<R: Rng + ?Sized>(rng: &mut R) -> OrderCreate {
    OrderCreate {
        customer_name: format!("Customer {}", rng.gen_range(0..100)),
        table: format!("Table {}", rng.gen_range(1..=20)),
        lines: demo_lines(),
    }
}
