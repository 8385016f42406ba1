use resource_actor::{ActorClient, ResourceEvent};
use rust_decimal::Decimal;
use table_order::cart_actor::CartError;
use table_order::catalog_actor::CatalogError;
use table_order::config::SystemConfig;
use table_order::lifecycle::TableOrderSystem;
use table_order::model::{
    CatalogFilter, CatalogItemCreate, CatalogItemUpdate, ItemId, OrderCreate, OrderId, OrderLine,
    OrderStatus,
};
use table_order::order_actor::OrderError;

fn price(text: &str) -> Decimal {
    text.parse().unwrap()
}

fn one_line_order(customer: &str) -> OrderCreate {
    OrderCreate {
        customer_name: customer.to_string(),
        table: "Table 1".to_string(),
        lines: vec![OrderLine::new("Brownie", 1, price("32.00"))],
    }
}

#[tokio::test]
async fn test_milk_tart_from_catalog_to_ready() {
    let system = TableOrderSystem::new(SystemConfig::default());

    let tart = system
        .catalog
        .create_item(CatalogItemCreate::new("Milk Tart", "Custard tart", "45.00"))
        .await
        .unwrap();

    let cart = system.carts.open_cart("Thandi", "Table 4").await.unwrap();
    system.carts.add_from_catalog(cart.id, tart.id).await.unwrap();
    let line = system.carts.add_from_catalog(cart.id, tart.id).await.unwrap();
    assert_eq!(line.quantity, 2);
    assert_eq!(system.carts.lines(cart.id).await.unwrap().len(), 1);
    assert_eq!(system.carts.total(cart.id).await.unwrap(), price("90.00"));

    let order = system.orders.submit_cart(&system.carts, cart.id).await.unwrap();
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.lines, vec![OrderLine::new("Milk Tart", 2, price("45.00"))]);
    assert_eq!(order.customer_name, "Thandi");
    assert_eq!(order.table, "Table 4");

    // The cart is gone once submitted
    assert!(system.carts.get(cart.id).await.unwrap().is_none());

    let preparing = system.orders.start_preparing(order.id).await.unwrap();
    assert_eq!(preparing.status, OrderStatus::Preparing);

    assert_eq!(
        system.orders.transition(order.id, OrderStatus::Pending).await,
        Err(OrderError::InvalidTransition {
            from: OrderStatus::Preparing,
            to: OrderStatus::Pending,
        })
    );

    let ready = system.orders.mark_ready(order.id).await.unwrap();
    assert_eq!(ready.status, OrderStatus::Ready);

    assert!(matches!(
        system.orders.mark_ready(order.id).await,
        Err(OrderError::InvalidTransition { from: OrderStatus::Ready, .. })
    ));
    assert_eq!(
        system.orders.get(order.id).await.unwrap().unwrap().status,
        OrderStatus::Ready
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_cart_submission_is_refused() {
    let system = TableOrderSystem::new(SystemConfig::default());
    system.orders.submit(one_line_order("Customer 1")).await.unwrap();

    let cart = system.carts.open_cart("Sipho", "Table 2").await.unwrap();
    assert_eq!(
        system.orders.submit_cart(&system.carts, cart.id).await,
        Err(OrderError::EmptyCart)
    );
    assert_eq!(
        system
            .orders
            .submit(OrderCreate {
                customer_name: "Sipho".into(),
                table: "Table 2".into(),
                lines: vec![],
            })
            .await,
        Err(OrderError::EmptyCart)
    );

    assert_eq!(system.orders.len().await.unwrap(), 1);
    // The customer can keep shopping
    assert!(system.carts.get(cart.id).await.unwrap().is_some());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_submissions_of_one_cart_make_one_order() {
    let system = TableOrderSystem::new(SystemConfig::default());
    let tart = system
        .catalog
        .create_item(CatalogItemCreate::new("Milk Tart", "Custard tart", "45.00"))
        .await
        .unwrap();
    let cart = system.carts.open_cart("Thandi", "Table 4").await.unwrap();
    system.carts.add_from_catalog(cart.id, tart.id).await.unwrap();

    let (first, second) = tokio::join!(
        system.orders.submit_cart(&system.carts, cart.id),
        system.orders.submit_cart(&system.carts, cart.id),
    );

    let (placed, refused): (Vec<_>, Vec<_>) = [first, second].into_iter().partition(Result::is_ok);
    assert_eq!(placed.len(), 1);
    assert_eq!(
        refused[0],
        Err(OrderError::Cart(CartError::NotFound(cart.id.to_string())))
    );
    assert_eq!(system.orders.len().await.unwrap(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_add_racing_submission_is_never_lost() {
    let system = TableOrderSystem::new(SystemConfig::default());
    let tart = system
        .catalog
        .create_item(CatalogItemCreate::new("Milk Tart", "Custard tart", "45.00"))
        .await
        .unwrap();
    let cake = system
        .catalog
        .create_item(CatalogItemCreate::new("Chocolate Cake", "Rich sponge", "85.00"))
        .await
        .unwrap();

    for _ in 0..10 {
        let cart = system.carts.open_cart("Thandi", "Table 4").await.unwrap();
        system.carts.add_from_catalog(cart.id, tart.id).await.unwrap();

        let (order, added) = tokio::join!(
            system.orders.submit_cart(&system.carts, cart.id),
            async {
                tokio::task::yield_now().await;
                system.carts.add_from_catalog(cart.id, cake.id).await
            },
        );
        let order = order.unwrap();
        let has_cake = order.lines.iter().any(|line| line.name == "Chocolate Cake");

        // Either the add made it into the order, or it was told the cart is closed
        match added {
            Ok(_) => assert!(has_cake),
            Err(e) => {
                assert_eq!(e, CartError::NotFound(cart.id.to_string()));
                assert!(!has_cake);
            }
        }
        assert!(system.carts.get(cart.id).await.unwrap().is_none());
    }

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_pending_cannot_skip_to_ready() {
    let system = TableOrderSystem::new(SystemConfig::default());
    let order = system.orders.submit(one_line_order("Customer 1")).await.unwrap();

    assert!(matches!(
        system.orders.mark_ready(order.id).await,
        Err(OrderError::InvalidTransition { .. })
    ));
    assert_eq!(
        system.orders.get(order.id).await.unwrap().unwrap().status,
        OrderStatus::Pending
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_feed_keeps_five_most_recent() {
    let system = TableOrderSystem::new(SystemConfig::default());
    let mut events = system.orders.subscribe();

    for n in 1..=6 {
        system
            .orders
            .submit(one_line_order(&format!("Customer {n}")))
            .await
            .unwrap();
    }

    let visible: Vec<OrderId> = system
        .orders
        .list()
        .await
        .unwrap()
        .iter()
        .map(|order| order.id)
        .collect();
    assert_eq!(
        visible,
        vec![OrderId(6), OrderId(5), OrderId(4), OrderId(3), OrderId(2)]
    );

    // The evicted order can no longer be advanced
    assert_eq!(
        system.orders.start_preparing(OrderId(1)).await,
        Err(OrderError::NotFound("order_1".into()))
    );

    let mut seen = Vec::new();
    while let Ok(event) = events.try_recv() {
        seen.push(event);
    }
    assert_eq!(seen.last(), Some(&ResourceEvent::Evicted(OrderId(1))));
    assert_eq!(
        seen.iter()
            .filter(|event| matches!(event, ResourceEvent::Created(_)))
            .count(),
        6
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_orders_ignore_later_catalog_edits() {
    let system = TableOrderSystem::new(SystemConfig::default());
    let tart = system
        .catalog
        .create_item(CatalogItemCreate::new("Milk Tart", "Custard tart", "45.00"))
        .await
        .unwrap();

    let cart = system.carts.open_cart("Lerato", "Table 9").await.unwrap();
    system.carts.add_from_catalog(cart.id, tart.id).await.unwrap();

    system
        .catalog
        .update_item(
            tart.id,
            CatalogItemUpdate {
                price: Some("60.00".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    // The repeat add keeps the price quoted the first time
    system.carts.add_from_catalog(cart.id, tart.id).await.unwrap();
    assert_eq!(system.carts.total(cart.id).await.unwrap(), price("90.00"));

    let order = system.orders.submit_cart(&system.carts, cart.id).await.unwrap();

    system
        .catalog
        .update_item(
            tart.id,
            CatalogItemUpdate {
                name: Some("Milk Tart (large)".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    system.catalog.delete_item(tart.id).await.unwrap();

    let stored = system.orders.get(order.id).await.unwrap().unwrap();
    assert_eq!(stored.lines, vec![OrderLine::new("Milk Tart", 2, price("45.00"))]);
    assert_eq!(stored.total(), price("90.00"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_catalog_ids_are_never_reused() {
    let system = TableOrderSystem::new(SystemConfig::default());
    let first = system
        .catalog
        .create_item(CatalogItemCreate::new("Croissant", "Buttery", "22.00"))
        .await
        .unwrap();
    let second = system
        .catalog
        .create_item(CatalogItemCreate::new("Brownie", "Fudgy", "32.00"))
        .await
        .unwrap();
    system.catalog.delete_item(second.id).await.unwrap();

    let third = system
        .catalog
        .create_item(CatalogItemCreate::new("Tiramisu", "Coffee", "68.00"))
        .await
        .unwrap();
    assert_eq!((first.id, second.id, third.id), (ItemId(1), ItemId(2), ItemId(3)));

    assert_eq!(
        system.catalog.delete_item(second.id).await,
        Err(CatalogError::NotFound("item_2".into()))
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_catalog_input_changes_nothing() {
    let system = TableOrderSystem::new(SystemConfig::default());
    let tart = system
        .catalog
        .create_item(CatalogItemCreate::new("Milk Tart", "Custard tart", "45.00"))
        .await
        .unwrap();

    assert!(matches!(
        system
            .catalog
            .create_item(CatalogItemCreate::new("Koeksisters", "Syrup", "abc"))
            .await,
        Err(CatalogError::Validation { field: "price", .. })
    ));
    assert!(matches!(
        system
            .catalog
            .update_item(
                tart.id,
                CatalogItemUpdate {
                    name: Some("".into()),
                    price: Some("50.00".into()),
                    ..Default::default()
                },
            )
            .await,
        Err(CatalogError::Validation { field: "name", .. })
    ));
    assert_eq!(
        system
            .catalog
            .update_item(ItemId(99), CatalogItemUpdate::default())
            .await,
        Err(CatalogError::NotFound("item_99".into()))
    );

    assert_eq!(system.catalog.len().await.unwrap(), 1);
    assert_eq!(system.catalog.get(tart.id).await.unwrap().unwrap(), tart);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_seed_menu_browsing() {
    let system = TableOrderSystem::with_seed_menu(SystemConfig::default())
        .await
        .unwrap();

    assert_eq!(system.catalog.len().await.unwrap(), 20);
    assert_eq!(
        system.catalog.categories().await.unwrap(),
        vec!["All", "Desserts", "Cakes", "Macaroons", "Croissants", "Milkshakes", "Cookies"]
    );

    let milkshakes = system
        .catalog
        .list(CatalogFilter::category("Milkshakes"))
        .await
        .unwrap();
    assert_eq!(milkshakes.len(), 4);

    let chocolate: Vec<String> = system
        .catalog
        .list(CatalogFilter::query("CHOCOLATE"))
        .await
        .unwrap()
        .into_iter()
        .map(|item| item.name)
        .collect();
    assert_eq!(
        chocolate,
        vec!["Chocolate Cake", "Chocolate Macarons", "Chocolate Milkshake"]
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cart_remove_and_unknown_items() {
    let system = TableOrderSystem::with_seed_menu(SystemConfig::default())
        .await
        .unwrap();
    let cart = system.carts.open_cart("", "").await.unwrap();
    assert_eq!(cart.customer_name, "Table Guest");
    assert_eq!(cart.table, "1");

    system.carts.add_from_catalog(cart.id, ItemId(1)).await.unwrap(); // Milk Tart 45
    system.carts.add_from_catalog(cart.id, ItemId(1)).await.unwrap();
    system.carts.add_from_catalog(cart.id, ItemId(3)).await.unwrap(); // Chocolate Cake 85
    assert_eq!(system.carts.item_count(cart.id).await.unwrap(), 3);

    let removed = system.carts.remove_item(cart.id, ItemId(1)).await.unwrap();
    assert_eq!(removed.quantity, 2);
    assert_eq!(system.carts.total(cart.id).await.unwrap(), price("85.00"));

    assert_eq!(
        system.carts.remove_item(cart.id, ItemId(1)).await,
        Err(CartError::LineNotFound("item_1".into()))
    );
    assert_eq!(
        system.carts.add_from_catalog(cart.id, ItemId(404)).await,
        Err(CartError::ItemNotFound("item_404".into()))
    );
    assert_eq!(system.carts.item_count(cart.id).await.unwrap(), 1);

    system.carts.abandon(cart.id).await.unwrap();
    assert_eq!(
        system.carts.total(cart.id).await,
        Err(CartError::NotFound(cart.id.to_string()))
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_carts_are_isolated() {
    let system = TableOrderSystem::with_seed_menu(SystemConfig::default())
        .await
        .unwrap();
    let first = system.carts.open_cart("Anele", "Table 1").await.unwrap();
    let second = system.carts.open_cart("Bongani", "Table 2").await.unwrap();

    system.carts.add_from_catalog(first.id, ItemId(2)).await.unwrap();
    assert!(system.carts.lines(second.id).await.unwrap().is_empty());
    assert_eq!(system.carts.total(first.id).await.unwrap(), price("25.00"));

    system.shutdown().await.unwrap();
}
