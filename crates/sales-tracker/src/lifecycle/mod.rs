//! # Lifecycle
//!
//! Starting, wiring and stopping the actors.
//!
//! Actors are created first and receive their dependencies when they are run, so
//! the order actor can be handed clones of the client and product clients after
//! all four exist. The dependency graph is acyclic (orders depend on clients and
//! products, nothing depends on orders), which is what lets shutdown rely on channel
//! closure alone: once every client handle is dropped each actor sees its mailbox
//! close and returns.

pub mod sales_system;
pub mod tracing;

pub use self::sales_system::{SalesSystem, SystemError};
pub use self::tracing::setup_tracing;
