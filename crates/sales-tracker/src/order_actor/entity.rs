//! [`ActorEntity`] implementation for [`Order`].
//!
//! The hooks are the fulfillment orchestrator: they resolve and authorize the
//! client, validate the lines, and move stock through the product ledger before
//! the order actor commits anything.

use super::{fulfillment, validator, OrderContext, OrderError};
use crate::model::{
    Client, ClientId, EntityKind, LineItem, Order, OrderChanges, OrderCreate, OrderId, OrderLine,
    OrderStatus, OrderUpdate, SellerId,
};
use crate::ownership::authorize;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info};
use tracker_actors::{ActorClient, ActorEntity};

impl OrderContext {
    /// Fetches `client_id` and checks that `acting` owns it.
    async fn owned_client(
        &self,
        client_id: ClientId,
        acting: SellerId,
    ) -> Result<Client, OrderError> {
        let client = self
            .clients
            .get(client_id)
            .await?
            .ok_or_else(|| OrderError::not_found(EntityKind::Client, client_id))?;
        authorize(&client, Some(&acting)).into_result()?;
        Ok(client)
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = OrderContext;
    type Error = OrderError;

    /// Builds an unpriced draft: the requested lines carry a zero price and
    /// `seller_id` holds the acting seller until `on_create` resolves both.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        let lines = params
            .lines
            .into_iter()
            .map(|l| OrderLine {
                product_id: l.product_id,
                quantity: l.quantity,
                unit_price: Decimal::ZERO,
            })
            .collect();
        Ok(Self {
            id,
            client_id: params.client_id,
            seller_id: params.acting,
            lines,
            total: Decimal::ZERO,
            status: OrderStatus::Completed,
            created_at: Utc::now(),
        })
    }

    /// Client ownership, validation, then reservation in input order.
    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), OrderError> {
        let client = ctx.owned_client(self.client_id, self.seller_id).await?;

        let requested: Vec<LineItem> = self
            .lines
            .iter()
            .map(|l| LineItem::new(l.product_id, l.quantity))
            .collect();
        let resolved = validator::validate(&requested, &ctx.products).await?;
        fulfillment::apply(&ctx.products, &fulfillment::reservation(&resolved)).await?;

        self.seller_id = client.seller_id;
        self.set_lines(resolved);
        info!(
            order_id = %self.id,
            client_id = %self.client_id,
            total = %self.total,
            "Stock reserved"
        );
        Ok(())
    }

    /// Runs on a draft; the order actor stores it only if this returns `Ok`.
    async fn on_update(
        &mut self,
        update: OrderUpdate,
        ctx: &OrderContext,
    ) -> Result<(), OrderError> {
        let acting = update.acting;
        authorize(&*self, Some(&acting)).into_result()?;

        let OrderChanges {
            client_id,
            lines,
            status,
        } = update.changes;

        if let Some(client_id) = client_id {
            ctx.owned_client(client_id, acting).await?;
            self.client_id = client_id;
        }
        if let Some(status) = status {
            debug!(order_id = %self.id, from = %self.status, to = %status, "Status change");
            self.status = status;
        }
        if let Some(lines) = lines {
            let held = self.held();
            let credited = validator::CreditedCatalog::new(&ctx.products, &held);
            let resolved = validator::validate(&lines, &credited).await?;
            fulfillment::apply(&ctx.products, &fulfillment::rebalance(&held, &resolved)).await?;
            self.set_lines(resolved);
            info!(order_id = %self.id, total = %self.total, "Stock rebalanced");
        }
        Ok(())
    }

    /// Returns everything the order holds to stock.
    async fn on_delete(&self, ctx: &OrderContext) -> Result<(), OrderError> {
        fulfillment::apply(&ctx.products, &fulfillment::release(&self.held())).await?;
        info!(order_id = %self.id, "Stock released");
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &OrderContext) -> Result<(), OrderError> {
        Ok(())
    }
}
