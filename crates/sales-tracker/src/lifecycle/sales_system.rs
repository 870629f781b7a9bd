use crate::clients::{ClientClient, OrderClient, ProductClient, SellerClient};
use crate::config::TrackerConfig;
use crate::identity::IdentityService;
use crate::order_actor::OrderContext;
use crate::reports::SalesAggregator;
use crate::{client_actor, order_actor, product_actor, seller_actor};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}

/// Every actor of the tracker, running, plus the services built on their clients.
///
/// ```rust,no_run
/// # use sales_tracker::{config::TrackerConfig, lifecycle::SalesSystem};
/// # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let config = TrackerConfig::from_env()?;
/// let system = SalesSystem::start(&config);
/// let best = system.reports.best_sellers().await?;
/// system.shutdown().await?;
/// # Ok(())
/// # }
/// ```
pub struct SalesSystem {
    pub sellers: SellerClient,
    pub clients: ClientClient,
    pub products: ProductClient,
    pub orders: OrderClient,
    pub identity: IdentityService,
    pub reports: SalesAggregator,
    handles: Vec<JoinHandle<()>>,
}

impl SalesSystem {
    /// Spawns the actors on the current Tokio runtime and wires the order actor to
    /// the client and product actors.
    pub fn start(config: &TrackerConfig) -> Self {
        let capacity = config.channel_capacity;

        let (seller_actor, sellers) = seller_actor::new(capacity);
        let (client_actor, clients) = client_actor::new(capacity);
        let (product_actor, products) = product_actor::new(capacity);
        let (order_actor, orders) = order_actor::new(capacity);

        let handles = vec![
            tokio::spawn(seller_actor.run(())),
            tokio::spawn(client_actor.run(())),
            tokio::spawn(product_actor.run(())),
            tokio::spawn(order_actor.run(OrderContext {
                clients: clients.clone(),
                products: products.clone(),
            })),
        ];

        let identity = IdentityService::new(config.identity.clone(), sellers.clone());
        let reports = SalesAggregator::new(orders.clone(), clients.clone(), sellers.clone())
            .with_limits(config.top_clients, config.top_sellers);

        info!(capacity, "Sales system started");
        Self {
            sellers,
            clients,
            products,
            orders,
            identity,
            reports,
            handles,
        }
    }

    /// Drops every client and waits for the actors to drain their mailboxes.
    ///
    /// The order actor exits first; that releases the client and product handles in
    /// its context, which lets those actors exit too. Clones of the clients held
    /// elsewhere keep their actors alive and make this wait.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        let Self {
            sellers,
            clients,
            products,
            orders,
            identity,
            reports,
            handles,
        } = self;
        drop((reports, identity, orders, clients, products, sellers));

        for handle in handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }
        info!("System shutdown complete.");
        Ok(())
    }
}
