//! The timer task that drops made-up orders onto the feed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::synthetic::synthetic_order;
use crate::clients::OrderFeedClient;
use crate::config::SimulatorConfig;

/// Emulates an outside order source for the kitchen view.
///
/// Every tick it draws once; on a hit it offers a synthetic order through
/// [`OrderFeedClient::submit_if_room`]. A full feed turns the offer down, so simulated
/// arrivals never push a customer's order out.
pub struct ArrivalSimulator {
    feed: OrderFeedClient,
    config: SimulatorConfig,
    rng: StdRng,
    cancel: CancellationToken,
}

impl ArrivalSimulator {
    /// Spawns the simulator. It runs until the returned guard is stopped or dropped.
    pub fn start(feed: OrderFeedClient, config: SimulatorConfig) -> SimulatorGuard {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let cancel = CancellationToken::new();
        let simulator = Self {
            feed,
            config,
            rng,
            cancel: cancel.clone(),
        };
        SimulatorGuard {
            cancel,
            handle: Some(tokio::spawn(simulator.run())),
        }
    }

    async fn run(mut self) {
        let chance = self.config.chance();
        info!(tick_ms = self.config.tick_ms, chance, "Arrival simulator started");

        let mut ticker = tokio::time::interval(self.config.tick());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately; draws start one period in.
        ticker.tick().await;

        loop {
            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => break,
                _ = ticker.tick() => {}
            }

            if !self.rng.gen_bool(chance) {
                continue;
            }

            if self.cancel.is_cancelled() {
                break;
            }
            let order = synthetic_order(&mut self.rng);
            match self.feed.submit_if_room(order).await {
                Ok(Some(order)) => info!(order = %order.id, customer = %order.customer_name, table = %order.table, "Simulated arrival"),
                Ok(None) => debug!("Feed full, skipping arrival"),
                Err(e) => {
                    warn!(error = %e, "Simulated arrival rejected, stopping");
                    break;
                }
            }
        }

        info!("Arrival simulator stopped");
    }
}

/// Scope of an active kitchen view.
///
/// While it is alive the simulator keeps ticking. [`SimulatorGuard::stop`] cancels the
/// task and waits for it, after which nothing more is submitted. Dropping the guard
/// cancels without waiting.
#[must_use = "dropping the guard stops the simulator"]
pub struct SimulatorGuard {
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl SimulatorGuard {
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Cancels the simulator and waits for its task to end.
    pub async fn stop(mut self) -> Result<(), String> {
        self.cancel.cancel();
        if let Some(handle) = self.handle.take() {
            handle
                .await
                .map_err(|e| format!("Arrival simulator failed: {e}"))?;
        }
        Ok(())
    }
}

impl Drop for SimulatorGuard {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
