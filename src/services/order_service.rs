use chrono::{DateTime, Local, Utc};

use crate::{
    dto::orders::{CreateOrderRequest, OrderTransition},
    error::{AppError, AppResult},
    lifecycle::apply_transition,
    models::{Order, OrderStatus, OrderType},
    params::OrderFilter,
    services::{medication_service::require_text, notification_service},
    state::AppState,
};

pub async fn list_orders(state: &AppState, filter: OrderFilter) -> AppResult<Vec<Order>> {
    let orders = state.store.get_orders().await?;
    Ok(orders.into_iter().filter(|o| filter.matches(o)).collect())
}

pub async fn get_order(state: &AppState, id: &str) -> AppResult<Order> {
    state
        .store
        .get_orders()
        .await?
        .into_iter()
        .find(|o| o.id == id)
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))
}

pub async fn create_order(state: &AppState, payload: CreateOrderRequest) -> AppResult<Order> {
    create_order_at(state, payload, Utc::now()).await
}

pub async fn create_order_at(
    state: &AppState,
    payload: CreateOrderRequest,
    now: DateTime<Utc>,
) -> AppResult<Order> {
    require_text("customer", &payload.customer)?;
    require_text("total", &payload.total)?;
    if payload.items <= 0 {
        return Err(AppError::BadRequest("items must be at least 1".into()));
    }

    let mut orders = state.store.get_orders().await?;
    let order = Order {
        id: order_id_for(orders.len() + 1),
        customer: payload.customer.trim().to_string(),
        customer_email: payload.customer_email,
        customer_phone: payload.customer_phone,
        status: OrderStatus::PendingPharmacy,
        order_type: payload.order_type,
        items: payload.items,
        total: payload.total.trim().to_string(),
        time: now.with_timezone(&Local).format("%H:%M").to_string(),
        is_urgent: payload.is_urgent,
        prescription_image: match payload.order_type {
            OrderType::Prescription => payload.prescription_image,
            OrderType::List => None,
        },
        pickup_code: None,
        pickup_code_expires_at: None,
        assigned_driver_id: None,
        assigned_at: None,
        picked_up_at: None,
        delivered_at: None,
        created_at: now,
    };

    orders.insert(0, order.clone());
    state.store.save_orders(&orders).await?;

    tracing::info!(id = %order.id, customer = %order.customer, urgent = order.is_urgent, "order created");
    Ok(order)
}

/// `PH-` followed by the 1-based sequence number, zero-padded to three digits.
pub fn order_id_for(sequence: usize) -> String {
    format!("PH-{sequence:03}")
}

pub async fn update_order_status(
    state: &AppState,
    id: &str,
    status: OrderStatus,
) -> AppResult<OrderTransition> {
    update_order_status_at(state, id, status, Utc::now()).await
}

pub async fn update_order_status_at(
    state: &AppState,
    id: &str,
    status: OrderStatus,
    now: DateTime<Utc>,
) -> AppResult<OrderTransition> {
    let mut orders = state.store.get_orders().await?;
    let existing = orders
        .iter_mut()
        .find(|o| o.id == id)
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;

    if !existing.status.allows(status) {
        tracing::warn!(
            id = %existing.id,
            from = %existing.status,
            to = %status,
            "order status jump outside the fulfilment path"
        );
    }

    let outcome = apply_transition(existing, status, now, &mut rand::thread_rng());
    let order = existing.clone();
    state.store.save_orders(&orders).await?;

    tracing::info!(
        id = %order.id,
        from = %outcome.from,
        to = %outcome.to,
        pickup_code_issued = outcome.issued_pickup_code,
        "order status updated"
    );

    if let Some(notification) = outcome.notification.clone() {
        notification_service::emit(state, notification).await;
    }

    Ok(OrderTransition::new(order, &outcome))
}

/// Move an order one step along the fulfilment path.
pub async fn advance_order(state: &AppState, id: &str) -> AppResult<OrderTransition> {
    let order = get_order(state, id).await?;
    let next = order.status.next().ok_or_else(|| {
        AppError::BadRequest(format!("order {id} is already {}", order.status))
    })?;
    update_order_status(state, id, next).await
}

pub async fn cancel_order(state: &AppState, id: &str) -> AppResult<OrderTransition> {
    let order = get_order(state, id).await?;
    if order.status.is_terminal() {
        return Err(AppError::BadRequest(format!(
            "order {id} is already {}",
            order.status
        )));
    }
    update_order_status(state, id, OrderStatus::Cancelled).await
}
