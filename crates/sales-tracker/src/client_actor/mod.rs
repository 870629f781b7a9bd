//! # Client Actor
//!
//! Stores customer records. Each client belongs to the seller who created it; the
//! update hook re-checks ownership inside the actor, so an edit can never land on
//! another seller's client. Emails are unique across the collection.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ClientClient;
use crate::model::Client;
use tracker_actors::ResourceActor;

/// Creates a new Client actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Client>, ClientClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ClientClient::new(generic_client))
}
