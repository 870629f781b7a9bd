//! # Client Client
//!
//! Ownership-scoped access to customer records. Every method that touches a
//! particular client requires an acting seller and refuses clients that belong to
//! someone else.
use super::acting;
use crate::client_actor::ClientError;
use crate::model::{
    Client, ClientChanges, ClientCreate, ClientDetails, ClientId, ClientUpdate, CurrentSeller,
    EntityKind,
};
use crate::ownership::authorize;
use async_trait::async_trait;
use tracing::{debug, instrument};
use tracker_actors::{ActorClient, FrameworkError, ResourceClient};

#[derive(Clone)]
pub struct ClientClient {
    inner: ResourceClient<Client>,
}

impl ClientClient {
    pub fn new(inner: ResourceClient<Client>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Client> for ClientClient {
    type Error = ClientError;

    fn inner(&self) -> &ResourceClient<Client> {
        &self.inner
    }

    fn map_error(e: FrameworkError<ClientError>) -> Self::Error {
        match e {
            FrameworkError::Entity(e) => e,
            FrameworkError::NotFound(id) => ClientError::NotFound {
                entity: EntityKind::Client,
                id,
            },
            FrameworkError::Conflict(_) => ClientError::AlreadyExists {
                entity: EntityKind::Client,
                field: "email",
            },
            other => ClientError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ClientClient {
    /// Creates a client owned by the acting seller.
    #[instrument(skip(self))]
    pub async fn create_client(
        &self,
        current: Option<&CurrentSeller>,
        details: ClientDetails,
    ) -> Result<ClientId, ClientError> {
        let seller_id = acting(current)?;
        debug!("Sending request");
        self.inner
            .create(ClientCreate { seller_id, details })
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn get_client(
        &self,
        current: Option<&CurrentSeller>,
        id: ClientId,
    ) -> Result<Client, ClientError> {
        let seller_id = acting(current)?;
        let client = self.get(id).await?.ok_or_else(|| ClientError::NotFound {
            entity: EntityKind::Client,
            id: id.to_string(),
        })?;
        authorize(&client, Some(&seller_id)).into_result()?;
        Ok(client)
    }

    /// Every client owned by the acting seller, ordered by id.
    #[instrument(skip(self))]
    pub async fn clients_for_seller(
        &self,
        current: Option<&CurrentSeller>,
    ) -> Result<Vec<Client>, ClientError> {
        let seller_id = acting(current)?;
        let clients = self.list().await?;
        Ok(clients
            .into_iter()
            .filter(|c| c.seller_id == seller_id)
            .collect())
    }

    /// Every client regardless of owner.
    #[instrument(skip(self))]
    pub async fn all_clients(&self) -> Result<Vec<Client>, ClientError> {
        self.list().await
    }

    /// Ownership is re-checked by the client actor while it applies the change.
    #[instrument(skip(self))]
    pub async fn update_client(
        &self,
        current: Option<&CurrentSeller>,
        id: ClientId,
        changes: ClientChanges,
    ) -> Result<Client, ClientError> {
        let acting = acting(current)?;
        debug!("Sending request");
        self.inner
            .update(id, ClientUpdate { acting, changes })
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn delete_client(
        &self,
        current: Option<&CurrentSeller>,
        id: ClientId,
    ) -> Result<(), ClientError> {
        self.get_client(current, id).await?;
        debug!("Sending request");
        self.inner.delete(id).await.map_err(Self::map_error)
    }
}
