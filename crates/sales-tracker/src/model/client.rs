use super::{ClientId, SellerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer record. Owned by the seller who created it; `seller_id` never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub surname: String,
    pub company: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub seller_id: SellerId,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied client fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientDetails {
    pub name: String,
    pub surname: String,
    pub company: Option<String>,
    pub email: String,
    pub phone: Option<String>,
}

/// Payload for creating a client on behalf of `seller_id`.
#[derive(Debug, Clone)]
pub struct ClientCreate {
    pub seller_id: SellerId,
    pub details: ClientDetails,
}

/// Field changes for a client. Applied only when `acting` owns the client.
#[derive(Debug, Clone)]
pub struct ClientUpdate {
    pub acting: SellerId,
    pub changes: ClientChanges,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientChanges {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}
