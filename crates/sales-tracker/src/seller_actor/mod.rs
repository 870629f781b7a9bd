//! # Seller Actor
//!
//! Stores registered sellers. No dependencies and no custom actions; the email is
//! the collection's unique key, so a second registration with the same address is
//! rejected by the actor itself.
//!
//! Registration and login go through [`IdentityService`](crate::identity::IdentityService),
//! which hashes passwords before they reach this actor.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::SellerClient;
use crate::model::Seller;
use tracker_actors::ResourceActor;

/// Creates a new Seller actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Seller>, SellerClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, SellerClient::new(generic_client))
}
