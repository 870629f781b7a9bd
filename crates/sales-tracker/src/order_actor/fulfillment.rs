//! # Fulfillment
//!
//! Turns an order's lines into stock movements and applies them all-or-nothing.
//!
//! Every movement goes through [`StockLedger::apply_delta`]. When one is refused,
//! the movements already applied in the same batch are reversed, newest first,
//! before the error is returned. Reversal of a reservation cannot be refused for
//! lack of stock, so a batch either lands completely or leaves stock where it was.

use super::OrderError;
use crate::model::{quantities, OrderLine, ProductId};
use crate::product_actor::{ProductError, StockLedger};
use std::collections::BTreeMap;
use tracing::{debug, error, warn};

/// A signed stock movement for one product.
pub type Movement = (ProductId, i64);

fn signed(quantity: u64) -> i64 {
    i64::try_from(quantity).unwrap_or(i64::MAX)
}

/// Reservations for a new order: one negative movement per line, in input order.
pub fn reservation(lines: &[OrderLine]) -> Vec<Movement> {
    lines
        .iter()
        .map(|l| (l.product_id, -i64::from(l.quantity)))
        .collect()
}

/// Releases for everything an order holds.
pub fn release(held: &BTreeMap<ProductId, u64>) -> Vec<Movement> {
    held.iter()
        .filter(|(_, quantity)| **quantity > 0)
        .map(|(&product_id, &quantity)| (product_id, signed(quantity)))
        .collect()
}

/// Net movements that take an order from `held` to `lines`.
///
/// Products that need more stock come first, in the order they appear in `lines`;
/// products that give stock back follow. Unchanged products produce no movement.
pub fn rebalance(held: &BTreeMap<ProductId, u64>, lines: &[OrderLine]) -> Vec<Movement> {
    let wanted = quantities(lines.iter().map(|l| (l.product_id, l.quantity)));

    let mut order: Vec<ProductId> = Vec::new();
    for line in lines {
        if !order.contains(&line.product_id) {
            order.push(line.product_id);
        }
    }
    order.extend(held.keys().filter(|id| !wanted.contains_key(*id)));

    let mut reserves = Vec::new();
    let mut releases = Vec::new();
    for product_id in order {
        let new = signed(wanted.get(&product_id).copied().unwrap_or(0));
        let old = signed(held.get(&product_id).copied().unwrap_or(0));
        match new - old {
            0 => {}
            more if more > 0 => reserves.push((product_id, -more)),
            fewer => releases.push((product_id, -fewer)),
        }
    }
    reserves.extend(releases);
    reserves
}

/// Applies `movements` in order, reversing the applied ones if any is refused.
///
/// A release for a product that no longer exists is skipped: there is no stock
/// left to return it to.
pub async fn apply<L>(ledger: &L, movements: &[Movement]) -> Result<(), OrderError>
where
    L: StockLedger + ?Sized,
{
    let mut applied: Vec<Movement> = Vec::with_capacity(movements.len());

    for &(product_id, delta) in movements {
        match ledger.apply_delta(product_id, delta).await {
            Ok(level) => {
                debug!(%product_id, delta, level, "Stock moved");
                applied.push((product_id, delta));
            }
            Err(ProductError::NotFound { .. }) if delta > 0 => {
                warn!(%product_id, delta, "Product no longer exists; release skipped");
            }
            Err(e) => {
                let cause = OrderError::from(e);
                compensate(ledger, &applied, &cause).await?;
                return Err(cause);
            }
        }
    }
    Ok(())
}

async fn compensate<L>(
    ledger: &L,
    applied: &[Movement],
    cause: &OrderError,
) -> Result<(), OrderError>
where
    L: StockLedger + ?Sized,
{
    for &(product_id, delta) in applied.iter().rev() {
        let undo = -delta;
        match ledger.apply_delta(product_id, undo).await {
            Ok(_) => debug!(%product_id, delta = undo, "Stock restored"),
            Err(ProductError::NotFound { .. }) if undo > 0 => {
                warn!(%product_id, delta = undo, "Product no longer exists; restore skipped");
            }
            Err(e) => {
                error!(%product_id, delta = undo, error = %e, "Stock compensation failed");
                return Err(OrderError::CompensationFailed {
                    product_id,
                    cause: cause.to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }
    Ok(())
}
