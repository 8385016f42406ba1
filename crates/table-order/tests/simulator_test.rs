use std::time::Duration;

use resource_actor::{ActorClient, ResourceEvent};
use table_order::config::{SimulatorConfig, SystemConfig};
use table_order::lifecycle::TableOrderSystem;
use table_order::model::{OrderCreate, OrderLine, OrderStatus};
use table_order::simulator::{demo_lines, ArrivalSimulator};

fn config(feed_capacity: usize, probability: f64) -> SystemConfig {
    SystemConfig {
        feed_capacity,
        simulator: SimulatorConfig {
            tick_ms: 5,
            probability,
            seed: Some(42),
        },
        ..SystemConfig::default()
    }
}

#[tokio::test]
async fn test_simulator_fills_feed_up_to_capacity() {
    let system = TableOrderSystem::new(config(5, 1.0));
    let mut events = system.orders.subscribe();

    let kitchen = system.open_kitchen_view();
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert!(kitchen.is_running());
    kitchen.stop().await.unwrap();

    let orders = system.orders.list().await.unwrap();
    assert_eq!(orders.len(), 5);
    for order in &orders {
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.lines, demo_lines());
        assert!(order.customer_name.starts_with("Customer "));
        assert!(order.table.starts_with("Table "));
    }

    // Arrivals stop at the cap instead of pushing older orders out
    while let Ok(event) = events.try_recv() {
        assert!(!matches!(event, ResourceEvent::Evicted(_)));
    }

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_zero_probability_never_submits() {
    let system = TableOrderSystem::new(config(5, 0.0));

    let kitchen = system.open_kitchen_view();
    tokio::time::sleep(Duration::from_millis(100)).await;
    kitchen.stop().await.unwrap();

    assert_eq!(system.orders.len().await.unwrap(), 0);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_no_arrivals_after_stop() {
    let system = TableOrderSystem::new(config(10_000, 1.0));

    let kitchen = system.open_kitchen_view();
    tokio::time::sleep(Duration::from_millis(60)).await;
    kitchen.stop().await.unwrap();

    let stopped_at = system.orders.len().await.unwrap();
    assert!(stopped_at > 0);
    tokio::time::sleep(Duration::from_millis(60)).await;
    assert_eq!(system.orders.len().await.unwrap(), stopped_at);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_dropping_guard_cancels_simulator() {
    let system = TableOrderSystem::new(config(10_000, 1.0));

    let kitchen = ArrivalSimulator::start(system.orders.clone(), system.config().simulator.clone());
    tokio::time::sleep(Duration::from_millis(40)).await;
    drop(kitchen);

    // Let an in-flight submission land
    tokio::time::sleep(Duration::from_millis(20)).await;
    let after_drop = system.orders.len().await.unwrap();
    tokio::time::sleep(Duration::from_millis(60)).await;
    assert_eq!(system.orders.len().await.unwrap(), after_drop);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_customer_orders_share_the_feed_with_arrivals() {
    let system = TableOrderSystem::new(config(5, 1.0));

    let kitchen = system.open_kitchen_view();
    tokio::time::sleep(Duration::from_millis(300)).await;
    kitchen.stop().await.unwrap();
    let oldest = system.orders.list().await.unwrap().last().unwrap().id;

    // A real submission still goes through when the feed is full, evicting the oldest
    let order = system
        .orders
        .submit(OrderCreate {
            customer_name: "Thandi".into(),
            table: "Table 4".into(),
            lines: vec![OrderLine::new("Milk Tart", 1, "45.00".parse().unwrap())],
        })
        .await
        .unwrap();

    let orders = system.orders.list().await.unwrap();
    assert_eq!(orders.len(), 5);
    assert_eq!(orders[0].id, order.id);
    assert!(orders.iter().all(|o| o.id != oldest));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_arrivals_never_push_out_customer_orders() {
    let system = TableOrderSystem::new(config(5, 1.0));
    let mut placed = Vec::new();
    for customer in ["Thandi", "Sipho", "Lerato", "Anele"] {
        let order = system
            .orders
            .submit(OrderCreate {
                customer_name: customer.into(),
                table: "Table 4".into(),
                lines: vec![OrderLine::new("Milk Tart", 1, "45.00".parse().unwrap())],
            })
            .await
            .unwrap();
        placed.push(order.id);
    }
    let mut events = system.orders.subscribe();

    // One free slot: arrivals may take it, but never more than it
    let kitchen = system.open_kitchen_view();
    tokio::time::sleep(Duration::from_millis(200)).await;
    kitchen.stop().await.unwrap();

    let visible: Vec<_> = system.orders.list().await.unwrap().iter().map(|o| o.id).collect();
    assert_eq!(visible.len(), 5);
    assert!(placed.iter().all(|id| visible.contains(id)));
    while let Ok(event) = events.try_recv() {
        assert!(!matches!(event, ResourceEvent::Evicted(_)));
    }

    system.shutdown().await.unwrap();
}

