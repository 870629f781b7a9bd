//! Plain data: documents, their create/update payloads and typed identifiers.
//!
//! Each document implements [`ActorEntity`](tracker_actors::ActorEntity) in its
//! actor module (`seller_actor`, `client_actor`, `product_actor`, `order_actor`).

pub mod client;
pub mod order;
pub mod product;
pub mod seller;

pub use client::*;
pub use order::*;
pub use product::*;
pub use seller::*;

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Declares a `u32` newtype id displayed as `<prefix>_<n>`.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

entity_id!(
    /// Type-safe identifier for Sellers.
    SellerId,
    "seller"
);
entity_id!(
    /// Type-safe identifier for Clients.
    ClientId,
    "client"
);
entity_id!(
    /// Type-safe identifier for Products.
    ProductId,
    "product"
);
entity_id!(
    /// Type-safe identifier for Orders.
    OrderId,
    "order"
);

/// Names the kind of document an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Seller,
    Client,
    Product,
    Order,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::Seller => "seller",
            EntityKind::Client => "client",
            EntityKind::Product => "product",
            EntityKind::Order => "order",
        };
        f.write_str(name)
    }
}

/// The authenticated seller a request acts on behalf of.
///
/// Produced from a session token by
/// [`IdentityService::current_seller`](crate::identity::IdentityService::current_seller). Scoped operations take `Option<&CurrentSeller>`; `None`
/// means the caller is not authenticated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentSeller {
    pub id: SellerId,
    pub email: String,
    pub name: String,
}

/// Lowercased, trimmed email used for uniqueness checks and lookups.
pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_display_with_prefix() {
        assert_eq!(SellerId(1).to_string(), "seller_1");
        assert_eq!(ClientId(22).to_string(), "client_22");
        assert_eq!(ProductId(3).to_string(), "product_3");
        assert_eq!(OrderId(40).to_string(), "order_40");
    }

    #[test]
    fn emails_compare_case_insensitively() {
        assert_eq!(normalize_email("  Ana@Example.COM "), "ana@example.com");
    }
}
