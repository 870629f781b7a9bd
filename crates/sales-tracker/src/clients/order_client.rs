//! # Order Client
//!
//! Entry point of the fulfillment orchestrator. The stock-affecting work runs in
//! the order actor's hooks; this wrapper supplies the acting seller, scopes reads,
//! and checks ownership before a delete is sent.
use super::acting;
use crate::model::{
    ClientId, CurrentSeller, EntityKind, LineItem, Order, OrderChanges, OrderCreate, OrderId,
    OrderStatus, OrderUpdate,
};
use crate::order_actor::OrderError;
use crate::ownership::authorize;
use async_trait::async_trait;
use tracing::{debug, info, instrument};
use tracker_actors::{ActorClient, FrameworkError, ResourceClient};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError<OrderError>) -> Self::Error {
        match e {
            FrameworkError::Entity(e) => e,
            FrameworkError::NotFound(id) => OrderError::NotFound {
                entity: EntityKind::Order,
                id,
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Places an order for `client_id`, reserving stock for every line.
    ///
    /// On any error no stock has moved and no order exists.
    #[instrument(skip(self))]
    pub async fn create_order(
        &self,
        current: Option<&CurrentSeller>,
        client_id: ClientId,
        lines: Vec<LineItem>,
    ) -> Result<Order, OrderError> {
        let acting = acting(current)?;
        info!("Sending create_order to actor");
        let id = self
            .inner
            .create(OrderCreate {
                acting,
                client_id,
                lines,
            })
            .await
            .map_err(Self::map_error)?;
        self.get(id)
            .await?
            .ok_or_else(|| OrderError::not_found(EntityKind::Order, id))
    }

    /// Amends an order. Replacing the lines moves only the net difference in stock;
    /// a status-only change never touches stock.
    #[instrument(skip(self))]
    pub async fn update_order(
        &self,
        current: Option<&CurrentSeller>,
        id: OrderId,
        changes: OrderChanges,
    ) -> Result<Order, OrderError> {
        let acting = acting(current)?;
        debug!("Sending request");
        self.inner
            .update(id, OrderUpdate { acting, changes })
            .await
            .map_err(Self::map_error)
    }

    /// Deletes an order and returns its reserved stock.
    #[instrument(skip(self))]
    pub async fn delete_order(
        &self,
        current: Option<&CurrentSeller>,
        id: OrderId,
    ) -> Result<(), OrderError> {
        self.get_order(current, id).await?;
        debug!("Sending request");
        self.inner.delete(id).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn get_order(
        &self,
        current: Option<&CurrentSeller>,
        id: OrderId,
    ) -> Result<Order, OrderError> {
        let acting = acting(current)?;
        let order = self
            .get(id)
            .await?
            .ok_or_else(|| OrderError::not_found(EntityKind::Order, id))?;
        authorize(&order, Some(&acting)).into_result()?;
        Ok(order)
    }

    /// The acting seller's orders, ordered by id.
    #[instrument(skip(self))]
    pub async fn orders_for_seller(
        &self,
        current: Option<&CurrentSeller>,
    ) -> Result<Vec<Order>, OrderError> {
        let acting = acting(current)?;
        let orders = self.list().await?;
        Ok(orders.into_iter().filter(|o| o.seller_id == acting).collect())
    }

    /// The acting seller's orders in `status`.
    #[instrument(skip(self))]
    pub async fn orders_by_status(
        &self,
        current: Option<&CurrentSeller>,
        status: OrderStatus,
    ) -> Result<Vec<Order>, OrderError> {
        let orders = self.orders_for_seller(current).await?;
        Ok(orders.into_iter().filter(|o| o.status == status).collect())
    }

    /// Every order regardless of owner.
    #[instrument(skip(self))]
    pub async fn all_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.list().await
    }
}
