//! # Clients
//!
//! Typed wrappers around each actor's `ResourceClient`. They translate runtime
//! failures into the resource's own error, and they are where ownership scoping
//! and the `Option<&CurrentSeller>` contract live for reads and deletes.

pub mod client_client;
pub mod order_client;
pub mod product_client;
pub mod seller_client;

pub use client_client::ClientClient;
pub use order_client::OrderClient;
pub use product_client::ProductClient;
pub use seller_client::SellerClient;

use crate::model::{CurrentSeller, SellerId};
use crate::ownership::Denial;

/// The acting seller's id, or `Unauthenticated` when nobody is signed in.
pub(crate) fn acting(current: Option<&CurrentSeller>) -> Result<SellerId, Denial> {
    current.map(|seller| seller.id).ok_or(Denial::Unauthenticated)
}
