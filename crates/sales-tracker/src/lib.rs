//! # Sales Tracker
//!
//! Order fulfillment and inventory consistency for a small sales team. Sellers own
//! their clients and orders; products carry a stock counter that orders reserve
//! from and release back to.
//!
//! Every collection lives in its own resource actor (see the `tracker-actors`
//! crate). The interesting one is the order actor, whose hooks validate lines
//! against the catalog, move stock through the product actor's ledger, and undo
//! whatever they already moved when a later step fails.
//!
//! ## Module Tour
//!
//! - [`model`]: documents, payloads and typed ids
//! - [`ownership`]: the seller ownership check
//! - [`seller_actor`], [`client_actor`], [`product_actor`], [`order_actor`]: entity
//!   hooks and per-resource errors
//! - [`clients`]: typed wrappers callers use, scoped by the acting seller
//! - [`identity`]: registration, sign-in, session tokens
//! - [`reports`]: revenue leaderboards
//! - [`config`]: environment configuration
//! - [`lifecycle`]: starting and stopping the whole system, tracing setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rust_decimal::Decimal;
//! use sales_tracker::config::TrackerConfig;
//! use sales_tracker::lifecycle::SalesSystem;
//! use sales_tracker::model::{ClientDetails, LineItem, ProductCreate};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let system = SalesSystem::start(&TrackerConfig::from_env()?);
//!
//! system.identity.register("Ana", "ana@shop.io", "hunter22").await?;
//! let session = system.identity.authenticate("ana@shop.io", "hunter22").await?;
//! let me = system.identity.current_seller(Some(&session.token)).await?;
//!
//! let client = system
//!     .clients
//!     .create_client(
//!         me.as_ref(),
//!         ClientDetails {
//!             name: "Bo".into(),
//!             surname: "Ng".into(),
//!             company: None,
//!             email: "bo@acme.io".into(),
//!             phone: None,
//!         },
//!     )
//!     .await?;
//! let widget = system
//!     .products
//!     .create_product(ProductCreate {
//!         name: "Widget".into(),
//!         price: Decimal::new(2500, 2),
//!         stock: 10,
//!     })
//!     .await?;
//!
//! let order = system
//!     .orders
//!     .create_order(me.as_ref(), client, vec![LineItem::new(widget, 6)])
//!     .await?;
//! assert_eq!(system.products.check_stock(widget).await?, 4);
//! assert_eq!(order.total, Decimal::new(15000, 2));
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod client_actor;
pub mod clients;
pub mod config;
pub mod identity;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod ownership;
pub mod product_actor;
pub mod reports;
pub mod seller_actor;
