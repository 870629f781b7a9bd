use super::{ClientId, OrderId, ProductId, SellerId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Pending,
    Completed,
    Canceled,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Canceled => "CANCELED",
        };
        f.write_str(status)
    }
}

/// A requested `(product, quantity)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// A line as stored on an order, priced at the time it was reserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl OrderLine {
    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// A customer order.
///
/// `lines` are exactly the quantities currently held against product stock, so
/// they double as the order's reservation: amending them rebalances stock by the
/// difference and deleting the order releases all of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub client_id: ClientId,
    /// Copied from the client when the order is created.
    pub seller_id: SellerId,
    pub lines: Vec<OrderLine>,
    pub total: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Units held per product, summed over lines.
    pub fn held(&self) -> BTreeMap<ProductId, u64> {
        quantities(self.lines.iter().map(|l| (l.product_id, l.quantity)))
    }

    /// Replaces the lines and recomputes `total`.
    pub fn set_lines(&mut self, lines: Vec<OrderLine>) {
        self.total = lines.iter().map(OrderLine::subtotal).sum();
        self.lines = lines;
    }
}

/// Sums quantities per product.
pub fn quantities(lines: impl IntoIterator<Item = (ProductId, u32)>) -> BTreeMap<ProductId, u64> {
    let mut held = BTreeMap::new();
    for (product_id, quantity) in lines {
        *held.entry(product_id).or_insert(0) += u64::from(quantity);
    }
    held
}

/// Payload for placing an order. `acting` is the authenticated seller.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub acting: SellerId,
    pub client_id: ClientId,
    pub lines: Vec<LineItem>,
}

/// An amendment requested by `acting`.
#[derive(Debug, Clone)]
pub struct OrderUpdate {
    pub acting: SellerId,
    pub changes: OrderChanges,
}

/// Fields an amendment may replace. `None` keeps the current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderChanges {
    pub client_id: Option<ClientId>,
    pub lines: Option<Vec<LineItem>>,
    pub status: Option<OrderStatus>,
}
