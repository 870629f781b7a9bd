//! # Stock Ledger
//!
//! The two seams order fulfillment uses to reach the catalog: a read-only lookup
//! for validation and the signed-delta ledger for reservations. `ProductClient`
//! implements both by messaging the product actor; tests can substitute an
//! in-memory catalog.

use super::ProductError;
use crate::model::{Product, ProductId};
use async_trait::async_trait;

/// Point-in-time reads of catalog entries.
#[async_trait]
pub trait CatalogLookup: Send + Sync {
    async fn product(&self, id: ProductId) -> Result<Option<Product>, ProductError>;
}

/// The only write path for `Product::stock`.
#[async_trait]
pub trait StockLedger: Send + Sync {
    /// Applies `delta` atomically and returns the new stock level.
    async fn apply_delta(&self, id: ProductId, delta: i64) -> Result<u32, ProductError>;
}
