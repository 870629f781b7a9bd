//! Many callers racing for the same stock.

use rust_decimal::Decimal;
use sales_tracker::config::TrackerConfig;
use sales_tracker::lifecycle::SalesSystem;
use sales_tracker::model::{ClientDetails, LineItem, ProductCreate, ProductId};
use sales_tracker::order_actor::OrderError;
use sales_tracker::product_actor::ProductError;

fn system() -> SalesSystem {
    SalesSystem::start(&TrackerConfig::with_secret("concurrency-test-secret-0123456789ab").unwrap())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_racing_decrements_never_oversell() {
    let system = system();
    let id = system
        .products
        .create_product(ProductCreate {
            name: "Last units".into(),
            price: Decimal::ONE,
            stock: 10,
        })
        .await
        .unwrap();

    let tasks: Vec<_> = (0..40)
        .map(|_| {
            let products = system.products.clone();
            tokio::spawn(async move { products.adjust_stock(id, -1).await })
        })
        .collect();

    let mut accepted = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => accepted += 1,
            Err(ProductError::WouldGoNegative { available, .. }) => assert_eq!(available, 0),
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(accepted, 10);
    assert_eq!(system.products.check_stock(id).await.unwrap(), 0);
    system.shutdown().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_orders_reserve_exactly_the_stock() {
    let system = system();
    system
        .identity
        .register("Ana", "ana@shop.io", "pa55word")
        .await
        .unwrap();
    let session = system
        .identity
        .authenticate("ana@shop.io", "pa55word")
        .await
        .unwrap();
    let ana = system
        .identity
        .current_seller(Some(&session.token))
        .await
        .unwrap()
        .unwrap();
    let client = system
        .clients
        .create_client(
            Some(&ana),
            ClientDetails {
                name: "Acme".into(),
                surname: "Corp".into(),
                company: Some("Acme".into()),
                email: "buyer@acme.io".into(),
                phone: None,
            },
        )
        .await
        .unwrap();
    let a = system
        .products
        .create_product(ProductCreate {
            name: "A".into(),
            price: Decimal::ONE,
            stock: 25,
        })
        .await
        .unwrap();
    let b = system
        .products
        .create_product(ProductCreate {
            name: "B".into(),
            price: Decimal::ONE,
            stock: 12,
        })
        .await
        .unwrap();

    let tasks: Vec<_> = (0..30u32)
        .map(|i| {
            let orders = system.orders.clone();
            let ana = ana.clone();
            let lines = vec![LineItem::new(a, 1 + i % 3), LineItem::new(b, 1)];
            tokio::spawn(async move { orders.create_order(Some(&ana), client, lines).await })
        })
        .collect();

    for task in tasks {
        match task.await.unwrap() {
            Ok(_) | Err(OrderError::InsufficientStock { .. }) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    let placed = system.orders.all_orders().await.unwrap();
    let held = |product: ProductId| -> u32 {
        placed
            .iter()
            .flat_map(|o| &o.lines)
            .filter(|l| l.product_id == product)
            .map(|l| l.quantity)
            .sum()
    };
    assert!(!placed.is_empty());
    assert_eq!(system.products.check_stock(a).await.unwrap() + held(a), 25);
    assert_eq!(system.products.check_stock(b).await.unwrap() + held(b), 12);

    system.shutdown().await.unwrap();
}
