//! Real order actor, mocked client and product actors. Each test scripts exactly
//! the requests the order hooks are expected to send, in the order they send them.

use chrono::Utc;
use rust_decimal::Decimal;
use sales_tracker::clients::{ClientClient, OrderClient, ProductClient};
use sales_tracker::model::{
    Client, ClientId, CurrentSeller, LineItem, Order, OrderChanges, OrderStatus, Product,
    ProductId, SellerId,
};
use sales_tracker::order_actor::{self, OrderContext, OrderError};
use sales_tracker::product_actor::{ProductActionResult, ProductError};
use tokio::task::JoinHandle;
use tracker_actors::mock::MockClient;
use tracker_actors::{ActorClient, FrameworkError};

fn seller(id: u32) -> CurrentSeller {
    CurrentSeller {
        id: SellerId(id),
        email: format!("seller{id}@example.com"),
        name: format!("Seller {id}"),
    }
}

fn client(id: u32, owner: u32) -> Client {
    Client {
        id: ClientId(id),
        name: "Bob".into(),
        surname: "Stone".into(),
        company: None,
        email: format!("client{id}@example.com"),
        phone: None,
        seller_id: SellerId(owner),
        created_at: Utc::now(),
    }
}

fn product(id: u32, price_cents: i64, stock: u32) -> Product {
    Product {
        id: ProductId(id),
        name: format!("Product {id}"),
        price: Decimal::new(price_cents, 2),
        stock,
        created_at: Utc::now(),
    }
}

fn start(
    client_mock: &MockClient<Client>,
    product_mock: &MockClient<Product>,
) -> (OrderClient, JoinHandle<()>) {
    let (order_actor, orders) = order_actor::new(10);
    let handle = tokio::spawn(order_actor.run(OrderContext {
        clients: ClientClient::new(client_mock.client()),
        products: ProductClient::new(product_mock.client()),
    }));
    (orders, handle)
}

/// Creates an order for client 1 (owned by seller 1) holding 3 units of product 1.
async fn place_order(
    orders: &OrderClient,
    client_mock: &mut MockClient<Client>,
    product_mock: &mut MockClient<Product>,
) -> Order {
    client_mock
        .expect_get(ClientId(1))
        .return_ok(Some(client(1, 1)));
    product_mock
        .expect_get(ProductId(1))
        .return_ok(Some(product(1, 2500, 10)));
    product_mock
        .expect_action(ProductId(1))
        .return_ok(ProductActionResult::ApplyDelta(7));

    orders
        .create_order(Some(&seller(1)), ClientId(1), vec![LineItem::new(ProductId(1), 3)])
        .await
        .unwrap()
}

#[tokio::test]
async fn test_create_prices_lines_and_copies_seller_from_client() {
    let mut client_mock = MockClient::<Client>::new();
    let mut product_mock = MockClient::<Product>::new();
    let (orders, handle) = start(&client_mock, &product_mock);

    let order = place_order(&orders, &mut client_mock, &mut product_mock).await;

    assert_eq!(order.seller_id, SellerId(1));
    assert_eq!(order.status, OrderStatus::Completed);
    assert_eq!(order.lines[0].unit_price, Decimal::new(2500, 2));
    assert_eq!(order.total, Decimal::new(7500, 2));

    client_mock.verify();
    product_mock.verify();
    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_foreign_client_is_refused_before_any_stock_request() {
    let mut client_mock = MockClient::<Client>::new();
    let product_mock = MockClient::<Product>::new();
    let (orders, handle) = start(&client_mock, &product_mock);

    client_mock
        .expect_get(ClientId(5))
        .return_ok(Some(client(5, 2)));

    let result = orders
        .create_order(Some(&seller(1)), ClientId(5), vec![LineItem::new(ProductId(1), 1)])
        .await;

    assert_eq!(result, Err(OrderError::NotAuthorized));
    assert!(orders.all_orders().await.unwrap().is_empty());
    client_mock.verify();
    product_mock.verify();
    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_missing_client_is_not_found() {
    let mut client_mock = MockClient::<Client>::new();
    let product_mock = MockClient::<Product>::new();
    let (orders, handle) = start(&client_mock, &product_mock);

    client_mock.expect_get(ClientId(9)).return_ok(None);

    let result = orders
        .create_order(Some(&seller(1)), ClientId(9), vec![LineItem::new(ProductId(1), 1)])
        .await;

    assert!(matches!(result, Err(OrderError::NotFound { id, .. }) if id == "client_9"));
    client_mock.verify();
    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_refused_reservation_reverses_earlier_lines() {
    let mut client_mock = MockClient::<Client>::new();
    let mut product_mock = MockClient::<Product>::new();
    let (orders, handle) = start(&client_mock, &product_mock);

    client_mock
        .expect_get(ClientId(1))
        .return_ok(Some(client(1, 1)));
    // Validation sees enough of both products.
    product_mock
        .expect_get(ProductId(1))
        .return_ok(Some(product(1, 100, 10)));
    product_mock
        .expect_get(ProductId(2))
        .return_ok(Some(product(2, 100, 5)));
    // Product 2 was drained by someone else between validation and reservation.
    product_mock
        .expect_action(ProductId(1))
        .return_ok(ProductActionResult::ApplyDelta(8));
    product_mock
        .expect_action(ProductId(2))
        .return_err(FrameworkError::Entity(ProductError::WouldGoNegative {
            product_id: ProductId(2),
            delta: -3,
            available: 1,
        }));
    // The two units taken from product 1 go back.
    product_mock
        .expect_action(ProductId(1))
        .return_ok(ProductActionResult::ApplyDelta(10));

    let result = orders
        .create_order(
            Some(&seller(1)),
            ClientId(1),
            vec![LineItem::new(ProductId(1), 2), LineItem::new(ProductId(2), 3)],
        )
        .await;

    assert_eq!(
        result,
        Err(OrderError::InsufficientStock {
            product_id: ProductId(2),
            requested: 3,
            available: 1,
        })
    );
    assert!(orders.all_orders().await.unwrap().is_empty());
    client_mock.verify();
    product_mock.verify();
    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_repeated_product_beyond_stock_never_reaches_the_ledger() {
    let mut client_mock = MockClient::<Client>::new();
    let mut product_mock = MockClient::<Product>::new();
    let (orders, handle) = start(&client_mock, &product_mock);

    client_mock
        .expect_get(ClientId(1))
        .return_ok(Some(client(1, 1)));
    // One read for both lines and no stock action at all.
    product_mock
        .expect_get(ProductId(1))
        .return_ok(Some(product(1, 100, 5)));

    let result = orders
        .create_order(
            Some(&seller(1)),
            ClientId(1),
            vec![LineItem::new(ProductId(1), 3), LineItem::new(ProductId(1), 3)],
        )
        .await;

    assert_eq!(
        result,
        Err(OrderError::InsufficientStock {
            product_id: ProductId(1),
            requested: 3,
            available: 2,
        })
    );
    assert!(orders.all_orders().await.unwrap().is_empty());
    client_mock.verify();
    product_mock.verify();
    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_status_change_sends_no_stock_requests() {
    let mut client_mock = MockClient::<Client>::new();
    let mut product_mock = MockClient::<Product>::new();
    let (orders, handle) = start(&client_mock, &product_mock);
    let order = place_order(&orders, &mut client_mock, &mut product_mock).await;

    let updated = orders
        .update_order(
            Some(&seller(1)),
            order.id,
            OrderChanges {
                status: Some(OrderStatus::Canceled),
                ..OrderChanges::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.status, OrderStatus::Canceled);
    assert_eq!(updated.lines, order.lines);
    client_mock.verify();
    product_mock.verify();
    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_amendment_moves_only_the_difference() {
    let mut client_mock = MockClient::<Client>::new();
    let mut product_mock = MockClient::<Product>::new();
    let (orders, handle) = start(&client_mock, &product_mock);
    let order = place_order(&orders, &mut client_mock, &mut product_mock).await;

    // 3 held, 7 left: asking for 9 is validated against 7 + 3.
    product_mock
        .expect_get(ProductId(1))
        .return_ok(Some(product(1, 2500, 7)));
    product_mock
        .expect_action(ProductId(1))
        .return_ok(ProductActionResult::ApplyDelta(1));

    let amended = orders
        .update_order(
            Some(&seller(1)),
            order.id,
            OrderChanges {
                lines: Some(vec![LineItem::new(ProductId(1), 9)]),
                ..OrderChanges::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(amended.lines[0].quantity, 9);
    assert_eq!(amended.total, Decimal::new(22500, 2));
    client_mock.verify();
    product_mock.verify();
    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_other_seller_cannot_amend_and_nothing_changes() {
    let mut client_mock = MockClient::<Client>::new();
    let mut product_mock = MockClient::<Product>::new();
    let (orders, handle) = start(&client_mock, &product_mock);
    let order = place_order(&orders, &mut client_mock, &mut product_mock).await;

    let result = orders
        .update_order(
            Some(&seller(2)),
            order.id,
            OrderChanges {
                status: Some(OrderStatus::Canceled),
                ..OrderChanges::default()
            },
        )
        .await;

    assert_eq!(result, Err(OrderError::NotAuthorized));
    assert_eq!(orders.get(order.id).await.unwrap(), Some(order));
    product_mock.verify();
    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_delete_releases_held_units() {
    let mut client_mock = MockClient::<Client>::new();
    let mut product_mock = MockClient::<Product>::new();
    let (orders, handle) = start(&client_mock, &product_mock);
    let order = place_order(&orders, &mut client_mock, &mut product_mock).await;

    product_mock
        .expect_action(ProductId(1))
        .return_ok(ProductActionResult::ApplyDelta(10));

    orders.delete_order(Some(&seller(1)), order.id).await.unwrap();

    assert!(orders.get(order.id).await.unwrap().is_none());
    product_mock.verify();
    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_delete_skips_products_removed_from_catalog() {
    let mut client_mock = MockClient::<Client>::new();
    let mut product_mock = MockClient::<Product>::new();
    let (orders, handle) = start(&client_mock, &product_mock);
    let order = place_order(&orders, &mut client_mock, &mut product_mock).await;

    product_mock
        .expect_action(ProductId(1))
        .return_err(FrameworkError::NotFound("product_1".into()));

    orders.delete_order(Some(&seller(1)), order.id).await.unwrap();

    assert!(orders.all_orders().await.unwrap().is_empty());
    product_mock.verify();
    drop(orders);
    handle.await.unwrap();
}
