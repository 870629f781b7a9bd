//! Error types for the Product actor.

use crate::model::{EntityKind, ProductId};
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: EntityKind, id: String },

    /// Applying the delta would leave stock below zero.
    #[error("Stock of {product_id} would go negative: delta {delta}, available {available}")]
    WouldGoNegative {
        product_id: ProductId,
        delta: i64,
        available: u32,
    },

    #[error("Stock of {product_id} would overflow: delta {delta}, available {available}")]
    StockOverflow {
        product_id: ProductId,
        delta: i64,
        available: u32,
    },

    #[error("Invalid product data: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl ProductError {
    pub fn not_found(id: ProductId) -> Self {
        ProductError::NotFound {
            entity: EntityKind::Product,
            id: id.to_string(),
        }
    }
}
