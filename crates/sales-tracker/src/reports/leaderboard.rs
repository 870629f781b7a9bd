//! Revenue rankings over a snapshot of orders. No I/O.

use crate::model::{Client, ClientId, Order, OrderStatus, SellerId, SellerProfile};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRevenue {
    pub client: Client,
    pub total_revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerRevenue {
    pub seller: SellerProfile,
    pub total_revenue: Decimal,
}

/// Sums `total` of completed orders per key.
pub fn completed_revenue<K: Ord>(
    orders: &[Order],
    key: impl Fn(&Order) -> K,
) -> BTreeMap<K, Decimal> {
    let mut revenue = BTreeMap::new();
    for order in orders.iter().filter(|o| o.status == OrderStatus::Completed) {
        *revenue.entry(key(order)).or_insert(Decimal::ZERO) += order.total;
    }
    revenue
}

/// Joins each group to its record, drops groups with no record, sorts by revenue
/// descending (key ascending on ties) and keeps `limit` entries.
pub fn rank<K: Ord + Copy, T>(
    revenue: BTreeMap<K, Decimal>,
    mut join: impl FnMut(K) -> Option<T>,
    limit: usize,
) -> Vec<(T, Decimal)> {
    let mut ranked: Vec<(K, T, Decimal)> = revenue
        .into_iter()
        .filter_map(|(key, total)| join(key).map(|record| (key, record, total)))
        .collect();
    ranked.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked.into_iter().map(|(_, record, total)| (record, total)).collect()
}

pub fn top_clients(orders: &[Order], clients: &[Client], limit: usize) -> Vec<ClientRevenue> {
    let by_id: HashMap<ClientId, &Client> = clients.iter().map(|c| (c.id, c)).collect();
    let revenue = completed_revenue(orders, |o| o.client_id);
    rank(revenue, |id| by_id.get(&id).map(|c| (*c).clone()), limit)
        .into_iter()
        .map(|(client, total_revenue)| ClientRevenue {
            client,
            total_revenue,
        })
        .collect()
}

pub fn top_sellers(
    orders: &[Order],
    sellers: &[SellerProfile],
    limit: usize,
) -> Vec<SellerRevenue> {
    let by_id: HashMap<SellerId, &SellerProfile> = sellers.iter().map(|s| (s.id, s)).collect();
    let revenue = completed_revenue(orders, |o| o.seller_id);
    rank(revenue, |id| by_id.get(&id).map(|s| (*s).clone()), limit)
        .into_iter()
        .map(|(seller, total_revenue)| SellerRevenue {
            seller,
            total_revenue,
        })
        .collect()
}
