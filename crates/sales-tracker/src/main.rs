use anyhow::Context;
use rust_decimal::Decimal;
use sales_tracker::config::TrackerConfig;
use sales_tracker::lifecycle::{setup_tracing, SalesSystem};
use sales_tracker::model::{ClientDetails, LineItem, OrderChanges, OrderStatus, ProductCreate};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::from_filename("variables.env").ok();
    let config = TrackerConfig::from_env().context("loading configuration")?;
    setup_tracing();

    info!("Starting sales tracker");
    let system = SalesSystem::start(&config);

    let current = async {
        system
            .identity
            .register("Alice", "alice@example.com", "correct horse battery")
            .await?;
        let session = system
            .identity
            .authenticate("alice@example.com", "correct horse battery")
            .await?;
        system.identity.current_seller(Some(&session.token)).await
    }
    .instrument(tracing::info_span!("sign_in"))
    .await?;
    let current = current.context("token did not resolve to a seller")?;
    info!(seller_id = %current.id, "Signed in");

    let client_id = system
        .clients
        .create_client(
            Some(&current),
            ClientDetails {
                name: "Bob".to_string(),
                surname: "Stone".to_string(),
                company: Some("Stone & Sons".to_string()),
                email: "bob@stone.example".to_string(),
                phone: None,
            },
        )
        .await?;

    let widget = system
        .products
        .create_product(ProductCreate {
            name: "Widget".to_string(),
            price: Decimal::new(2500, 2),
            stock: 10,
        })
        .await?;
    let gadget = system
        .products
        .create_product(ProductCreate {
            name: "Gadget".to_string(),
            price: Decimal::new(9900, 2),
            stock: 3,
        })
        .await?;

    let span = tracing::info_span!("order_processing");
    let order = system
        .orders
        .create_order(
            Some(&current),
            client_id,
            vec![LineItem::new(widget, 6), LineItem::new(gadget, 1)],
        )
        .instrument(span)
        .await?;
    info!(order_id = %order.id, total = %order.total, "Order placed");

    // Asks for more widgets than are left; nothing moves.
    match system
        .orders
        .create_order(Some(&current), client_id, vec![LineItem::new(widget, 6)])
        .await
    {
        Ok(order) => info!(order_id = %order.id, "Unexpectedly placed"),
        Err(e) => error!(error = %e, "Order refused"),
    }

    let amended = system
        .orders
        .update_order(
            Some(&current),
            order.id,
            OrderChanges {
                lines: Some(vec![LineItem::new(widget, 8)]),
                ..OrderChanges::default()
            },
        )
        .await?;
    let widgets_left = system.products.check_stock(widget).await?;
    let gadgets_left = system.products.check_stock(gadget).await?;
    info!(
        order_id = %amended.id,
        total = %amended.total,
        widgets_left,
        gadgets_left,
        "Order amended"
    );

    let pending = system
        .orders
        .update_order(
            Some(&current),
            order.id,
            OrderChanges {
                status: Some(OrderStatus::Pending),
                ..OrderChanges::default()
            },
        )
        .await?;
    info!(order_id = %pending.id, status = %pending.status, "Status changed");

    for entry in system.reports.best_clients().await? {
        info!(client = %entry.client.email, revenue = %entry.total_revenue, "Top client");
    }
    for entry in system.reports.best_sellers().await? {
        info!(seller = %entry.seller.email, revenue = %entry.total_revenue, "Top seller");
    }

    system.shutdown().await?;
    info!("Sales tracker stopped");
    Ok(())
}
