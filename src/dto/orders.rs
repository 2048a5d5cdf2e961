use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    lifecycle::TransitionOutcome,
    models::{Order, OrderStatus, OrderType},
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer: String,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub items: i32,
    pub total: String,
    #[serde(rename = "type", default = "default_order_type")]
    pub order_type: OrderType,
    #[serde(default)]
    pub is_urgent: bool,
    pub prescription_image: Option<String>,
}

fn default_order_type() -> OrderType {
    OrderType::List
}

impl CreateOrderRequest {
    pub fn new(customer: impl Into<String>, items: i32, total: impl Into<String>) -> Self {
        Self {
            customer: customer.into(),
            customer_email: None,
            customer_phone: None,
            items,
            total: total.into(),
            order_type: OrderType::List,
            is_urgent: false,
            prescription_image: None,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTransition {
    pub order: Order,
    pub from: OrderStatus,
    pub issued_pickup_code: bool,
    pub notification_id: Option<String>,
}

impl OrderTransition {
    pub fn new(order: Order, outcome: &TransitionOutcome) -> Self {
        Self {
            order,
            from: outcome.from,
            issued_pickup_code: outcome.issued_pickup_code,
            notification_id: outcome.notification.as_ref().map(|n| n.id.clone()),
        }
    }
}

/// An order as displayed, with its pickup code checked against `now`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    #[serde(flatten)]
    pub order: Order,
    pub pickup_code_expired: bool,
}

impl OrderView {
    pub fn new(order: Order, now: DateTime<Utc>) -> Self {
        let pickup_code_expired = order.pickup_code_expired(now);
        Self {
            order,
            pickup_code_expired,
        }
    }
}
