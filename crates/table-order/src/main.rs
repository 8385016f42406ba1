use resource_actor::tracing::setup_tracing;
use resource_actor::ActorClient;
use table_order::config::SystemConfig;
use table_order::display::format_money;
use table_order::lifecycle::TableOrderSystem;
use table_order::model::{CatalogFilter, CatalogItemCreate};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting table order demo");

    let config = SystemConfig::default();
    let tick = config.simulator.tick();
    let system = TableOrderSystem::with_seed_menu(config)
        .await
        .map_err(|e| e.to_string())?;

    // Staff add a special
    let special = system
        .catalog
        .create_item(
            CatalogItemCreate::new("Malva Pudding", "Warm apricot sponge with custard", "52.50")
                .with_image("🍮"),
        )
        .await
        .map_err(|e| e.to_string())?;
    info!(item = %special.id, "Special added");

    // A diner browses and fills a cart
    let span = tracing::info_span!("customer_session");
    let cart_id = async {
        let cart = system
            .carts
            .open_cart("Thandi", "Table 4")
            .await
            .map_err(|e| e.to_string())?;
        let tarts = system
            .catalog
            .list(CatalogFilter::query("milk tart"))
            .await
            .map_err(|e| e.to_string())?;
        for item in tarts.iter().chain([&special]) {
            system
                .carts
                .add_from_catalog(cart.id, item.id)
                .await
                .map_err(|e| e.to_string())?;
        }
        if let Some(tart) = tarts.first() {
            system
                .carts
                .add_from_catalog(cart.id, tart.id)
                .await
                .map_err(|e| e.to_string())?;
        }
        let total = system.carts.total(cart.id).await.map_err(|e| e.to_string())?;
        info!(cart = %cart.id, total = %format_money(total), "Cart ready");
        Ok::<_, String>(cart.id)
    }
    .instrument(span)
    .await?;

    match system.orders.submit_cart(&system.carts, cart_id).await {
        Ok(order) => info!(order = %order, "Order sent to kitchen"),
        Err(e) => error!(error = %e, "Order submission failed"),
    }

    // The kitchen view is open for a few ticks
    let span = tracing::info_span!("kitchen_view");
    async {
        let kitchen = system.open_kitchen_view();
        tokio::time::sleep(tick * 5).await;

        for order in system.orders.list().await.map_err(|e| e.to_string())? {
            let (Some(target), Some(action)) = (order.status.next(), order.status.staff_action())
            else {
                info!(order = %order, "Ready for pickup");
                continue;
            };
            match system.orders.transition(order.id, target).await {
                Ok(updated) => info!(order = %updated, action, "Advanced"),
                Err(e) => error!(error = %e, "Transition failed"),
            }
        }

        kitchen.stop().await
    }
    .instrument(span)
    .await?;

    let visible = system.orders.len().await.map_err(|e| e.to_string())?;
    info!(visible, capacity = system.orders.capacity(), "Orders on the feed");

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
