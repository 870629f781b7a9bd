//! # Ownership Guard
//!
//! Decides whether the acting seller may touch a seller-owned document. Pure: no
//! I/O, no state. Each resource maps a [`Denial`] into its own error type.

use crate::model::{Client, Order, SellerId};

/// A document that belongs to exactly one seller.
pub trait SellerOwned {
    fn seller_id(&self) -> SellerId;
}

impl SellerOwned for Client {
    fn seller_id(&self) -> SellerId {
        self.seller_id
    }
}

impl SellerOwned for Order {
    fn seller_id(&self) -> SellerId {
        self.seller_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    /// The document belongs to another seller.
    NotOwner,
    /// No seller is acting.
    Unauthenticated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    Authorized,
    Denied(Denial),
}

impl Authorization {
    pub fn is_authorized(self) -> bool {
        matches!(self, Authorization::Authorized)
    }

    pub fn into_result(self) -> Result<(), Denial> {
        match self {
            Authorization::Authorized => Ok(()),
            Authorization::Denied(denial) => Err(denial),
        }
    }
}

/// Authorizes `acting` against the owner of `entity`.
pub fn authorize<E: SellerOwned + ?Sized>(entity: &E, acting: Option<&SellerId>) -> Authorization {
    match acting {
        None => Authorization::Denied(Denial::Unauthenticated),
        Some(seller) if *seller == entity.seller_id() => Authorization::Authorized,
        Some(_) => Authorization::Denied(Denial::NotOwner),
    }
}
