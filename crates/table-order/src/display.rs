//! Rendering helpers shared by the demo binary and the `Display` impls.

use chrono::{DateTime, Local};
use rust_decimal::{Decimal, RoundingStrategy};

/// Currency prefix shown in front of amounts.
pub const CURRENCY: &str = "R";

/// Two decimal places, always: `45` renders as `"45.00"`.
pub fn format_price(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

pub fn format_money(amount: Decimal) -> String {
    format!("{CURRENCY}{}", format_price(amount))
}

/// Local hour and minute, e.g. `"14:05"`.
pub fn format_clock(at: &DateTime<Local>) -> String {
    at.format("%H:%M").to_string()
}
