use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    error::AppResult,
    models::{Medication, Order, OrderStatus, StockStatus},
    state::AppState,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub orders_total: usize,
    pub orders_by_status: BTreeMap<OrderStatus, usize>,
    pub to_prepare: usize,
    pub ready: usize,
    pub urgent: usize,
    pub medications_total: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    pub medications_by_category: BTreeMap<String, usize>,
    pub delivered_revenue_fcfa: u64,
}

pub async fn summary(state: &AppState) -> AppResult<Summary> {
    let orders = state.store.get_orders().await?;
    let medications = state.store.get_medications().await?;
    Ok(summarize(&orders, &medications))
}

pub fn summarize(orders: &[Order], medications: &[Medication]) -> Summary {
    let mut orders_by_status = BTreeMap::new();
    for order in orders {
        *orders_by_status.entry(order.status).or_insert(0) += 1;
    }
    let count = |status: OrderStatus| orders_by_status.get(&status).copied().unwrap_or(0);
    let to_prepare = count(OrderStatus::PendingPharmacy)
        + count(OrderStatus::Accepted)
        + count(OrderStatus::Preparing);
    let ready = count(OrderStatus::Ready);

    let mut medications_by_category = BTreeMap::new();
    for medication in medications {
        *medications_by_category
            .entry(medication.category.clone())
            .or_insert(0) += 1;
    }

    let delivered_revenue_fcfa = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Delivered)
        .filter_map(|o| {
            let amount = parse_amount(&o.total);
            if amount.is_none() {
                tracing::warn!(
                    id = %o.id,
                    total = %o.total,
                    "order total is not a readable amount"
                );
            }
            amount
        })
        .fold(0u64, u64::saturating_add);

    Summary {
        orders_total: orders.len(),
        to_prepare,
        ready,
        orders_by_status,
        urgent: orders.iter().filter(|o| o.is_urgent).count(),
        medications_total: medications.len(),
        low_stock: medications.iter().filter(|m| m.is_low_stock()).count(),
        out_of_stock: medications
            .iter()
            .filter(|m| m.stock_status() == StockStatus::OutOfStock)
            .count(),
        medications_by_category,
        delivered_revenue_fcfa,
    }
}

/// Digits of a display amount such as `"45 000 FCFA"`. `None` when there
/// are no digits or the amount does not fit a `u64`.
pub fn parse_amount(total: &str) -> Option<u64> {
    let digits: String = total.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}
