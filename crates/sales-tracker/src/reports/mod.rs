//! # Reports
//!
//! Leaderboards of completed revenue. The aggregator takes one snapshot of each
//! collection it needs, then ranks in memory with [`leaderboard`].

pub mod leaderboard;

pub use leaderboard::{ClientRevenue, SellerRevenue};

use crate::client_actor::ClientError;
use crate::clients::{ClientClient, OrderClient, SellerClient};
use crate::model::SellerProfile;
use crate::order_actor::OrderError;
use crate::seller_actor::SellerError;
use thiserror::Error;
use tracing::{debug, instrument};
use tracker_actors::ActorClient;

/// Number of entries in the best-clients board.
pub const DEFAULT_TOP_CLIENTS: usize = 10;
/// Number of entries in the best-sellers board.
pub const DEFAULT_TOP_SELLERS: usize = 3;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReportError {
    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Seller(#[from] SellerError),
}

#[derive(Clone)]
pub struct SalesAggregator {
    orders: OrderClient,
    clients: ClientClient,
    sellers: SellerClient,
    top_clients: usize,
    top_sellers: usize,
}

impl SalesAggregator {
    pub fn new(orders: OrderClient, clients: ClientClient, sellers: SellerClient) -> Self {
        Self {
            orders,
            clients,
            sellers,
            top_clients: DEFAULT_TOP_CLIENTS,
            top_sellers: DEFAULT_TOP_SELLERS,
        }
    }

    /// Overrides the sizes used by [`best_clients`](Self::best_clients) and
    /// [`best_sellers`](Self::best_sellers).
    pub fn with_limits(mut self, top_clients: usize, top_sellers: usize) -> Self {
        self.top_clients = top_clients;
        self.top_sellers = top_sellers;
        self
    }

    #[instrument(skip(self))]
    pub async fn top_clients_by_revenue(
        &self,
        limit: usize,
    ) -> Result<Vec<ClientRevenue>, ReportError> {
        let orders = self.orders.all_orders().await?;
        let clients = self.clients.all_clients().await?;
        debug!(orders = orders.len(), clients = clients.len(), "Ranking clients");
        Ok(leaderboard::top_clients(&orders, &clients, limit))
    }

    #[instrument(skip(self))]
    pub async fn top_sellers_by_revenue(
        &self,
        limit: usize,
    ) -> Result<Vec<SellerRevenue>, ReportError> {
        let orders = self.orders.all_orders().await?;
        let sellers: Vec<SellerProfile> = self
            .sellers
            .list()
            .await?
            .iter()
            .map(SellerProfile::from)
            .collect();
        debug!(orders = orders.len(), sellers = sellers.len(), "Ranking sellers");
        Ok(leaderboard::top_sellers(&orders, &sellers, limit))
    }

    pub async fn best_clients(&self) -> Result<Vec<ClientRevenue>, ReportError> {
        self.top_clients_by_revenue(self.top_clients).await
    }

    pub async fn best_sellers(&self) -> Result<Vec<SellerRevenue>, ReportError> {
        self.top_sellers_by_revenue(self.top_sellers).await
    }
}
