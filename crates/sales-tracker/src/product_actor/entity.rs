//! [`ActorEntity`] implementation for [`Product`], plus the stock arithmetic the
//! ledger actions use.

use super::actions::{ProductAction, ProductActionResult};
use super::ProductError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tracker_actors::ActorEntity;

fn validate_name(name: &str) -> Result<String, ProductError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ProductError::ValidationError("name must not be empty".into()));
    }
    Ok(name.to_string())
}

fn validate_price(price: Decimal) -> Result<Decimal, ProductError> {
    if price.is_sign_negative() {
        return Err(ProductError::ValidationError(format!(
            "price must not be negative: {price}"
        )));
    }
    Ok(price)
}

impl Product {
    /// Adds `delta` to the stock and returns the new level.
    ///
    /// On error the stock is left as it was.
    pub fn apply_delta(&mut self, delta: i64) -> Result<u32, ProductError> {
        let available = self.stock;
        let next = match i64::from(available).checked_add(delta) {
            Some(next) if next < 0 => {
                return Err(ProductError::WouldGoNegative {
                    product_id: self.id,
                    delta,
                    available,
                })
            }
            Some(next) => u32::try_from(next).ok(),
            None => None,
        };
        let Some(next) = next else {
            return Err(ProductError::StockOverflow {
                product_id: self.id,
                delta,
                available,
            });
        };
        self.stock = next;
        Ok(next)
    }
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        Ok(Self {
            id,
            name: validate_name(&params.name)?,
            price: validate_price(params.price)?,
            stock: params.stock,
            created_at: Utc::now(),
        })
    }

    /// # Fields Updated
    /// - `name`
    /// - `price`
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), ProductError> {
        if let Some(name) = update.name {
            self.name = validate_name(&name)?;
        }
        if let Some(price) = update.price {
            self.price = validate_price(price)?;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.stock)),
            ProductAction::ApplyDelta(delta) => {
                self.apply_delta(delta).map(ProductActionResult::ApplyDelta)
            }
        }
    }
}
