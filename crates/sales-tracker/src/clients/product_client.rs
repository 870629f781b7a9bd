//! # Product Client
//!
//! Catalog access plus the stock ledger. Products are not seller-scoped.
use crate::model::{EntityKind, Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::{
    CatalogLookup, ProductAction, ProductActionResult, ProductError, StockLedger,
};
use async_trait::async_trait;
use tracing::{debug, instrument};
use tracker_actors::{ActorClient, FrameworkError, ResourceClient};

/// Maximum number of results returned by [`ProductClient::search_products`].
pub const SEARCH_LIMIT: usize = 10;

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError<ProductError>) -> Self::Error {
        match e {
            FrameworkError::Entity(e) => e,
            FrameworkError::NotFound(id) => ProductError::NotFound {
                entity: EntityKind::Product,
                id,
            },
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

fn unexpected(result: ProductActionResult) -> ProductError {
    ProductError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ProductError> {
        self.get(id)
            .await?
            .ok_or_else(|| ProductError::not_found(id))
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        self.list().await
    }

    /// Products whose name contains `query`, ignoring case, by id, at most
    /// [`SEARCH_LIMIT`].
    #[instrument(skip(self))]
    pub async fn search_products(&self, query: &str) -> Result<Vec<Product>, ProductError> {
        let needle = query.trim().to_lowercase();
        let products = self.list().await?;
        Ok(products
            .into_iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .take(SEARCH_LIMIT)
            .collect())
    }

    /// Edits name and price. Stock goes through [`adjust_stock`](Self::adjust_stock).
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ProductError> {
        debug!("Sending request");
        self.inner.delete(id).await.map_err(Self::map_error)
    }

    /// Current stock level.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        debug!("Checking stock for product {}", id);
        match self
            .inner
            .perform_action(id, ProductAction::CheckStock)
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::CheckStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    /// Applies a signed stock delta through the ledger and returns the new level.
    ///
    /// Used by order fulfillment and for manual restocks or corrections.
    #[instrument(skip(self))]
    pub async fn adjust_stock(&self, id: ProductId, delta: i64) -> Result<u32, ProductError> {
        debug!("Applying delta {} to product {}", delta, id);
        match self
            .inner
            .perform_action(id, ProductAction::ApplyDelta(delta))
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::ApplyDelta(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }
}

#[async_trait]
impl CatalogLookup for ProductClient {
    async fn product(&self, id: ProductId) -> Result<Option<Product>, ProductError> {
        self.get(id).await
    }
}

#[async_trait]
impl StockLedger for ProductClient {
    async fn apply_delta(&self, id: ProductId, delta: i64) -> Result<u32, ProductError> {
        self.adjust_stock(id, delta).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use tracker_actors::mock::{create_mock_client, expect_action, expect_get, MockClient};

    #[tokio::test]
    async fn test_check_stock_returns_correct_level() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let check_task =
            tokio::spawn(async move { product_client.check_stock(ProductId(1)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, ProductId(1));
        assert_eq!(action, ProductAction::CheckStock);

        responder
            .send(Ok(ProductActionResult::CheckStock(42)))
            .unwrap();

        assert_eq!(check_task.await.unwrap().unwrap(), 42);
    }

    #[tokio::test]
    async fn test_adjust_stock_sends_signed_delta() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task = tokio::spawn(async move { product_client.adjust_stock(ProductId(1), -5).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, ProductId(1));
        assert_eq!(action, ProductAction::ApplyDelta(-5));

        responder
            .send(Ok(ProductActionResult::ApplyDelta(95)))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 95);
    }

    #[tokio::test]
    async fn test_catalog_lookup_reads_the_product() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task = tokio::spawn(async move { product_client.product(ProductId(4)).await });

        let (id, responder) = expect_get(&mut receiver)
            .await
            .expect("Expected Get request");
        assert_eq!(id, ProductId(4));
        let widget = Product {
            id: ProductId(4),
            name: "Widget".into(),
            price: Decimal::new(1250, 2),
            stock: 3,
            created_at: Utc::now(),
        };
        responder.send(Ok(Some(widget.clone()))).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), Some(widget));
    }

    #[tokio::test]
    async fn test_ledger_refusal_keeps_its_type() {
        let mut mock = MockClient::<Product>::new();
        let refusal = ProductError::WouldGoNegative {
            product_id: ProductId(1),
            delta: -100,
            available: 3,
        };
        mock.expect_action(ProductId(1))
            .return_err(FrameworkError::Entity(refusal.clone()));

        let product_client = ProductClient::new(mock.client());
        let result = product_client.apply_delta(ProductId(1), -100).await;

        assert_eq!(result, Err(refusal));
        mock.verify();
    }

    #[tokio::test]
    async fn test_missing_product_maps_to_not_found() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_get(ProductId(7)).return_ok(None);
        mock.expect_action(ProductId(7))
            .return_err(FrameworkError::NotFound("product_7".into()));

        let product_client = ProductClient::new(mock.client());
        assert_eq!(
            product_client.get_product(ProductId(7)).await,
            Err(ProductError::not_found(ProductId(7)))
        );
        assert_eq!(
            product_client.check_stock(ProductId(7)).await,
            Err(ProductError::not_found(ProductId(7)))
        );
        mock.verify();
    }
}
