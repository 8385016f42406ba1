use tracing::{error, info};

use crate::cart_actor::CartContext;
use crate::catalog_actor::{seed_menu, CatalogError};
use crate::clients::{CartClient, CatalogClient, OrderFeedClient};
use crate::config::SystemConfig;
use crate::simulator::{ArrivalSimulator, SimulatorGuard};

/// The runtime orchestrator for the table-ordering system.
///
/// `TableOrderSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the catalog, cart and order actors
/// - **Dependency Wiring**: The cart actor reads the catalog and checks out to the order
///   feed, so it runs with both clients in its `CartContext`
/// - **Kitchen View**: Starting the arrival simulator for as long as the view is open
///
/// # Example
///
/// ```ignore
/// let system = TableOrderSystem::with_seed_menu(SystemConfig::default()).await?;
///
/// let cart = system.carts.open_cart("Thandi", "Table 4").await?;
/// system.carts.add_from_catalog(cart.id, ItemId(1)).await?;
/// let order = system.orders.submit_cart(&system.carts, cart.id).await?;
///
/// system.shutdown().await?;
/// ```
pub struct TableOrderSystem {
    /// Client for the menu
    pub catalog: CatalogClient,

    /// Client for the customers' carts
    pub carts: CartClient,

    /// Client for the kitchen feed
    pub orders: OrderFeedClient,

    config: SystemConfig,

    /// Task handles for all running actors, dependents first
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl TableOrderSystem {
    /// Creates and starts every actor with an empty catalog.
    pub fn new(config: SystemConfig) -> Self {
        let mailbox = config.mailbox_size.max(1);
        let capacity = config.feed_capacity.max(1);

        // 1. Create actors (no dependencies)
        let (catalog_actor, catalog) = crate::catalog_actor::new(mailbox);
        let (cart_actor, carts) = crate::cart_actor::new(mailbox);
        let (order_actor, orders) = crate::order_actor::new(mailbox, capacity);

        let catalog = CatalogClient::new(catalog);
        let carts = CartClient::new(carts);
        let orders = OrderFeedClient::new(orders, capacity);

        // 2. Start actors with injected context
        let catalog_handle = tokio::spawn(catalog_actor.run(()));
        let cart_handle = tokio::spawn(cart_actor.run(CartContext {
            catalog: catalog.clone(),
            orders: orders.clone(),
        }));
        let order_handle = tokio::spawn(order_actor.run(()));

        info!(
            mailbox_size = mailbox,
            feed_capacity = capacity,
            "Table order system started"
        );

        Self {
            catalog,
            carts,
            orders,
            config,
            // The cart actor holds the other two clients, so it has to finish first.
            handles: vec![cart_handle, order_handle, catalog_handle],
        }
    }

    /// Creates the system and loads the house menu into the catalog.
    pub async fn with_seed_menu(config: SystemConfig) -> Result<Self, CatalogError> {
        let system = Self::new(config);
        for item in seed_menu() {
            system.catalog.create_item(item).await?;
        }
        info!("Seed menu loaded");
        Ok(system)
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    /// Opens the kitchen view: simulated orders arrive until the guard is released.
    pub fn open_kitchen_view(&self) -> SimulatorGuard {
        ArrivalSimulator::start(self.orders.clone(), self.config.simulator.clone())
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Drops the clients, which closes the actors' channels, then waits for every actor
    /// task. Clones handed out earlier, including the one inside a live
    /// [`SimulatorGuard`], keep their actor running, so release them first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.orders);
        drop(self.carts);
        drop(self.catalog);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
