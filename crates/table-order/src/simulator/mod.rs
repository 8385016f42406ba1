//! # Arrival Simulator
//!
//! Stands in for an external order source while the kitchen view is open: a cancellable
//! background task that, on each tick, may submit a made-up order to the feed.
//!
//! ```rust,ignore
//! let guard = ArrivalSimulator::start(feed.clone(), SimulatorConfig::default());
//! // ... kitchen view is showing ...
//! guard.stop().await?;
//! ```
//!
//! The task is bound to the [`SimulatorGuard`] it returns, so leaving the kitchen view is
//! releasing the guard, not remembering to clear a timer.

pub mod arrivals;
pub mod synthetic;

pub use arrivals::{ArrivalSimulator, SimulatorGuard};
pub use synthetic::{demo_lines, synthetic_order};
