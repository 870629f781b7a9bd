//! Error types for the Seller actor.

use crate::model::EntityKind;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SellerError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: EntityKind, id: String },

    /// Another seller already registered the same email.
    #[error("{entity} with this {field} already exists")]
    AlreadyExists {
        entity: EntityKind,
        field: &'static str,
    },

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Invalid seller data: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
