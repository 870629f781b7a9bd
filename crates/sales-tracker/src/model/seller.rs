use super::SellerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered seller, as stored. Holds the password hash, so it is never handed
/// out directly; use [`SellerProfile`] for anything caller-facing.
#[derive(Debug, Clone, PartialEq)]
pub struct Seller {
    pub id: SellerId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for storing a new seller. The password is already hashed.
#[derive(Clone)]
pub struct SellerCreate {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl std::fmt::Debug for SellerCreate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SellerCreate")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SellerUpdate {
    pub name: Option<String>,
}

/// Public view of a seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerProfile {
    pub id: SellerId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Seller> for SellerProfile {
    fn from(seller: &Seller) -> Self {
        Self {
            id: seller.id,
            name: seller.name.clone(),
            email: seller.email.clone(),
            created_at: seller.created_at,
        }
    }
}
