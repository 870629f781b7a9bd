//! Error types for the Order actor.

use crate::client_actor::ClientError;
use crate::model::{EntityKind, ProductId};
use crate::ownership::Denial;
use crate::product_actor::ProductError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The order, its client, or one of its products does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: EntityKind, id: String },

    /// The order or the referenced client belongs to another seller.
    #[error("Not authorized to access this order")]
    NotAuthorized,

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u64,
        available: u32,
    },

    #[error("An order needs at least one line item")]
    EmptyOrder,

    #[error("Invalid quantity for {product_id}: must be at least 1")]
    InvalidQuantity { product_id: ProductId },

    /// Releasing stock would overflow the product's counter.
    #[error("Stock of {product_id} would overflow")]
    StockOverflow { product_id: ProductId },

    /// A failed reservation could not be fully undone.
    #[error("Could not restore stock of {product_id} after {cause}: {reason}")]
    CompensationFailed {
        product_id: ProductId,
        cause: String,
        reason: String,
    },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    pub(crate) fn not_found(entity: EntityKind, id: impl ToString) -> Self {
        OrderError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

impl From<Denial> for OrderError {
    fn from(denial: Denial) -> Self {
        match denial {
            Denial::NotOwner => OrderError::NotAuthorized,
            Denial::Unauthenticated => OrderError::Unauthenticated,
        }
    }
}

impl From<ProductError> for OrderError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound { entity, id } => OrderError::NotFound { entity, id },
            ProductError::WouldGoNegative {
                product_id,
                delta,
                available,
            } => OrderError::InsufficientStock {
                product_id,
                requested: delta.unsigned_abs(),
                available,
            },
            ProductError::StockOverflow { product_id, .. } => {
                OrderError::StockOverflow { product_id }
            }
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<ClientError> for OrderError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::NotFound { entity, id } => OrderError::NotFound { entity, id },
            ClientError::NotAuthorized => OrderError::NotAuthorized,
            ClientError::Unauthenticated => OrderError::Unauthenticated,
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
