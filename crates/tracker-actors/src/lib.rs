//! # Tracker Actors
//!
//! A small resource-actor runtime: every collection of documents is owned by one
//! Tokio task that processes its requests sequentially, and everything else talks to
//! it through a cheap, cloneable client.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]): the document type, its payloads and its hooks.
//! 2. **Runtime** ([`ResourceActor`]): the message loop that owns the collection.
//! 3. **Interface** ([`ResourceClient`]): typed async requests with oneshot replies.
//!
//! Because one actor handles one request at a time, a hook that reads and then writes
//! its own document (a stock counter, say) is atomic with respect to every other
//! request for that collection.
//!
//! ## Context Injection
//!
//! Dependencies are handed to [`ResourceActor::run`], not to the constructor, so a
//! set of actors can be created first and wired to each other's clients afterwards:
//!
//! ```rust
//! use tracker_actors::{ActorEntity, ResourceActor, ResourceClient};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Shelf { id: u32, items: u32 }
//! #[derive(Debug, thiserror::Error)] #[error("shelf error")] struct ShelfError;
//!
//! #[async_trait]
//! impl ActorEntity for Shelf {
//!     type Id = u32; type Create = u32; type Update = ();
//!     type Action = (); type ActionResult = (); type Context = (); type Error = ShelfError;
//!     fn from_create_params(id: u32, items: u32) -> Result<Self, ShelfError> { Ok(Self { id, items }) }
//!     async fn on_update(&mut self, _: (), _: &()) -> Result<(), ShelfError> { Ok(()) }
//!     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), ShelfError> { Ok(()) }
//! }
//!
//! #[derive(Clone, Debug)] struct Picking { id: u32, shelf: u32 }
//! #[derive(Debug, thiserror::Error)] #[error("no such shelf")] struct PickingError;
//!
//! #[async_trait]
//! impl ActorEntity for Picking {
//!     type Id = u32; type Create = u32; type Update = ();
//!     type Action = (); type ActionResult = ();
//!     type Context = ResourceClient<Shelf>;
//!     type Error = PickingError;
//!
//!     fn from_create_params(id: u32, shelf: u32) -> Result<Self, PickingError> { Ok(Self { id, shelf }) }
//!
//!     async fn on_create(&mut self, shelves: &ResourceClient<Shelf>) -> Result<(), PickingError> {
//!         match shelves.get(self.shelf).await {
//!             Ok(Some(_)) => Ok(()),
//!             _ => Err(PickingError),
//!         }
//!     }
//!     async fn on_update(&mut self, _: (), _: &ResourceClient<Shelf>) -> Result<(), PickingError> { Ok(()) }
//!     async fn handle_action(&mut self, _: (), _: &ResourceClient<Shelf>) -> Result<(), PickingError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (shelf_actor, shelves) = ResourceActor::<Shelf>::new(8);
//!     let (picking_actor, pickings) = ResourceActor::<Picking>::new(8);
//!
//!     tokio::spawn(shelf_actor.run(()));
//!     tokio::spawn(picking_actor.run(shelves.clone()));
//!
//!     let shelf = shelves.create(5).await.unwrap();
//!     assert!(pickings.create(shelf).await.is_ok());
//!     assert!(pickings.create(99).await.is_err());
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module scripts replies for code that depends on a client, so domain
//! wrappers can be unit-tested without spawning the actors behind them.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
