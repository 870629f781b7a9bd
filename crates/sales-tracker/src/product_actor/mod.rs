//! # Product Actor
//!
//! Owns the product catalog and every product's stock counter.
//!
//! ## Structure
//!
//! - [`entity`]: [`ActorEntity`](tracker_actors::ActorEntity) implementation and
//!   [`Product::apply_delta`](crate::model::Product::apply_delta)
//! - [`actions`]: [`ProductAction`] / [`ProductActionResult`], the stock ledger
//! - [`ledger`]: [`CatalogLookup`] and [`StockLedger`], the traits fulfillment
//!   code is written against
//! - [`error`]: [`ProductError`]
//!
//! ## Atomicity
//!
//! `ApplyDelta` computes `stock + delta`, refuses a negative result, and commits,
//! all while handling one message. Two orders racing for the last units are
//! therefore serialized by the actor: one succeeds, the other sees the reduced
//! level and fails with [`ProductError::WouldGoNegative`].
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use sales_tracker::model::ProductCreate;
//! use sales_tracker::product_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = product_actor::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create_product(ProductCreate {
//!             name: "Widget".to_string(),
//!             price: Decimal::new(2999, 2),
//!             stock: 10,
//!         })
//!         .await?;
//!
//!     assert_eq!(client.adjust_stock(id, -6).await?, 4);
//!     assert!(client.adjust_stock(id, -6).await.is_err());
//!     assert_eq!(client.check_stock(id).await?, 4);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;
pub mod ledger;

pub use actions::*;
pub use error::*;
pub use ledger::*;

use crate::clients::ProductClient;
use crate::model::Product;
use tracker_actors::ResourceActor;

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ProductClient::new(generic_client))
}
