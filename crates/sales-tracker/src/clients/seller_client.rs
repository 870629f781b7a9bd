//! # Seller Client
//!
//! Wraps a `ResourceClient<Seller>`. Password handling lives in
//! [`IdentityService`](crate::identity::IdentityService); this client only stores
//! and looks up accounts.
use super::acting;
use crate::model::{
    normalize_email, CurrentSeller, EntityKind, Seller, SellerCreate, SellerId, SellerProfile,
    SellerUpdate,
};
use crate::seller_actor::SellerError;
use async_trait::async_trait;
use tracing::{debug, instrument};
use tracker_actors::{ActorClient, FrameworkError, ResourceClient};

#[derive(Clone)]
pub struct SellerClient {
    inner: ResourceClient<Seller>,
}

impl SellerClient {
    pub fn new(inner: ResourceClient<Seller>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Seller> for SellerClient {
    type Error = SellerError;

    fn inner(&self) -> &ResourceClient<Seller> {
        &self.inner
    }

    fn map_error(e: FrameworkError<SellerError>) -> Self::Error {
        match e {
            FrameworkError::Entity(e) => e,
            FrameworkError::NotFound(id) => SellerError::NotFound {
                entity: EntityKind::Seller,
                id,
            },
            FrameworkError::Conflict(_) => SellerError::AlreadyExists {
                entity: EntityKind::Seller,
                field: "email",
            },
            other => SellerError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl SellerClient {
    /// Stores a new account. Fails with `AlreadyExists` if the email is taken.
    #[instrument(skip(self))]
    pub async fn create_seller(&self, params: SellerCreate) -> Result<SellerId, SellerError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Case-insensitive lookup by email.
    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Seller>, SellerError> {
        let wanted = normalize_email(email);
        let sellers = self.list().await?;
        Ok(sellers
            .into_iter()
            .find(|s| normalize_email(&s.email) == wanted))
    }

    #[instrument(skip(self))]
    pub async fn profile(&self, id: SellerId) -> Result<SellerProfile, SellerError> {
        self.get(id)
            .await?
            .map(|seller| SellerProfile::from(&seller))
            .ok_or_else(|| SellerError::NotFound {
                entity: EntityKind::Seller,
                id: id.to_string(),
            })
    }

    /// Edits the acting seller's own profile.
    #[instrument(skip(self))]
    pub async fn update_profile(
        &self,
        current: Option<&CurrentSeller>,
        update: SellerUpdate,
    ) -> Result<SellerProfile, SellerError> {
        let id = acting(current).map_err(|_| SellerError::Unauthenticated)?;
        debug!("Sending request");
        let seller = self.inner.update(id, update).await.map_err(Self::map_error)?;
        Ok(SellerProfile::from(&seller))
    }
}
