//! Error types for the Client actor.

use crate::model::EntityKind;
use crate::ownership::Denial;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: EntityKind, id: String },

    #[error("{entity} with this {field} already exists")]
    AlreadyExists {
        entity: EntityKind,
        field: &'static str,
    },

    /// The client belongs to another seller.
    #[error("Not authorized to access this client")]
    NotAuthorized,

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Invalid client data: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<Denial> for ClientError {
    fn from(denial: Denial) -> Self {
        match denial {
            Denial::NotOwner => ClientError::NotAuthorized,
            Denial::Unauthenticated => ClientError::Unauthenticated,
        }
    }
}
