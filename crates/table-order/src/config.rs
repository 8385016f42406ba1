//! Runtime settings for [`TableOrderSystem`](crate::lifecycle::TableOrderSystem).
//!
//! Every field has a default, so a host can deserialize a partial document (or none) and
//! get the kitchen the demo runs with.

use std::time::Duration;

use serde::Deserialize;

use crate::order_actor::FEED_CAPACITY;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Request queue length of each actor.
    pub mailbox_size: usize,
    /// Orders visible on the kitchen feed at once.
    pub feed_capacity: usize,
    pub simulator: SimulatorConfig,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            mailbox_size: 32,
            feed_capacity: FEED_CAPACITY,
            simulator: SimulatorConfig::default(),
        }
    }
}

/// Settings for the simulated order arrivals.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Milliseconds between draws.
    pub tick_ms: u64,
    /// Chance that a draw produces an order.
    pub probability: f64,
    /// Fixed RNG seed; entropy when absent.
    pub seed: Option<u64>,
}

impl SimulatorConfig {
    /// Tick period, at least one millisecond.
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    /// `probability` clamped into `0.0..=1.0`; NaN counts as never.
    pub fn chance(&self) -> f64 {
        if self.probability.is_nan() {
            0.0
        } else {
            self.probability.clamp(0.0, 1.0)
        }
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            tick_ms: 1000,
            probability: 0.10,
            seed: None,
        }
    }
}
