//! # Order Validator
//!
//! Checks a requested line list against the catalog before anything is reserved.
//! Reads only; stock is untouched whatever the outcome.

use super::OrderError;
use crate::model::{EntityKind, LineItem, OrderLine, Product, ProductId};
use crate::product_actor::{CatalogLookup, ProductError};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Resolves every line to a priced [`OrderLine`], in input order.
///
/// Fails on the first line that names a missing product, asks for zero units, or
/// asks for more than the product has left. Each product is read once; lines that
/// repeat a product draw down the same remaining stock.
pub async fn validate<C>(lines: &[LineItem], catalog: &C) -> Result<Vec<OrderLine>, OrderError>
where
    C: CatalogLookup + ?Sized,
{
    if lines.is_empty() {
        return Err(OrderError::EmptyOrder);
    }

    // Price and units not yet claimed by earlier lines, per product.
    let mut remaining: BTreeMap<ProductId, (Decimal, u32)> = BTreeMap::new();
    let mut resolved = Vec::with_capacity(lines.len());

    for line in lines {
        if line.quantity == 0 {
            return Err(OrderError::InvalidQuantity {
                product_id: line.product_id,
            });
        }

        let (unit_price, available) = match remaining.get(&line.product_id) {
            Some(&entry) => entry,
            None => {
                let product: Product = catalog
                    .product(line.product_id)
                    .await?
                    .ok_or_else(|| OrderError::not_found(EntityKind::Product, line.product_id))?;
                (product.price, product.stock)
            }
        };

        if line.quantity > available {
            return Err(OrderError::InsufficientStock {
                product_id: line.product_id,
                requested: u64::from(line.quantity),
                available,
            });
        }
        remaining.insert(line.product_id, (unit_price, available - line.quantity));

        resolved.push(OrderLine {
            product_id: line.product_id,
            quantity: line.quantity,
            unit_price,
        });
    }

    Ok(resolved)
}

/// Catalog view that adds back what an order already holds, so an amendment is
/// validated against `stock + held` rather than against stock alone.
pub struct CreditedCatalog<'a, C: ?Sized> {
    inner: &'a C,
    held: &'a BTreeMap<ProductId, u64>,
}

impl<'a, C: ?Sized> CreditedCatalog<'a, C> {
    pub fn new(inner: &'a C, held: &'a BTreeMap<ProductId, u64>) -> Self {
        Self { inner, held }
    }
}

#[async_trait]
impl<'a, C> CatalogLookup for CreditedCatalog<'a, C>
where
    C: CatalogLookup + ?Sized,
{
    async fn product(&self, id: ProductId) -> Result<Option<Product>, ProductError> {
        let Some(mut product) = self.inner.product(id).await? else {
            return Ok(None);
        };
        if let Some(&held) = self.held.get(&id) {
            let credited = u64::from(product.stock).saturating_add(held);
            product.stock = u32::try_from(credited).unwrap_or(u32::MAX);
        }
        Ok(Some(product))
    }
}
