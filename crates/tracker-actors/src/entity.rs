//! # ActorEntity Trait
//!
//! The contract a stored document (Seller, Client, Product, Order, …) implements so a
//! generic [`ResourceActor`](crate::ResourceActor) can own a collection of it.
//!
//! Associated types pin every payload to its entity: an `Order` actor only accepts
//! `Order::Create`, and its hooks only ever see `Order::Context`.
//!
//! # Hooks and atomicity
//! `on_update` and `handle_action` run against a **copy** of the stored document. The
//! actor commits the copy only when the hook returns `Ok` and the unique key (if any)
//! is still free, so a failing hook never leaves a half-applied change behind.
//!
//! `on_create` and `on_delete` have no-op defaults.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are async so they can await other actors. `Context` is handed to `run()`
/// rather than `new()`, which lets actors be created first and wired afterwards.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier assigned by the actor from a sequential `u32` counter.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload for creating a new document.
    type Create: Send + Sync + Debug;

    /// Payload for updating an existing document.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations (e.g. `ApplyDelta`).
    type Action: Send + Sync + Debug;

    /// Result of a custom action.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into every hook. Use `()` when there are none.
    type Context: Send + Sync;

    /// One error enum per entity; it reaches callers unchanged inside
    /// [`FrameworkError::Entity`](crate::FrameworkError::Entity).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the document from its assigned id and the create payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Value that must be unique across the collection, such as a normalized email.
    ///
    /// Checked before `on_create` runs and again after every update or action.
    fn unique_key(&self) -> Option<String> {
        None
    }

    /// Called after `from_create_params` and before the document is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn on_update(&mut self, update: Self::Update, ctx: &Self::Context)
        -> Result<(), Self::Error>;

    /// Called before the document is removed. An error keeps the document stored.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
