//! # Order Actor
//!
//! Orders are the only documents whose mutations reach into other actors. The
//! order actor's hooks call the client actor (ownership) and the product actor
//! (validation and stock), so creating, amending or deleting an order is one
//! logical unit:
//!
//! 1. **create**: client exists and belongs to the acting seller, every line
//!    validates, every line reserves. Any failure restores the stock already
//!    reserved and stores nothing.
//! 2. **amend**: same checks against the new lines, with the units the order
//!    already holds credited back. Only the net difference per product moves.
//! 3. **delete**: the held units are released before the order disappears.
//!
//! Order mutations are serialized by the order actor; stock is serialized per
//! product collection by the product actor. Neither calls back into the order
//! actor, so waits cannot cycle.
//!
//! ## Structure
//!
//! - [`entity`]: the hooks
//! - [`validator`]: read-only line checks
//! - [`fulfillment`]: stock movements with compensation
//! - [`error`]: [`OrderError`]

pub mod entity;
pub mod error;
pub mod fulfillment;
pub mod validator;

pub use error::*;

use crate::clients::{ClientClient, OrderClient, ProductClient};
use crate::model::Order;
use tracker_actors::ResourceActor;

/// Dependencies of the order hooks, injected at `run()`.
#[derive(Clone)]
pub struct OrderContext {
    pub clients: ClientClient,
    pub products: ProductClient,
}

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
