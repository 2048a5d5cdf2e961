//! Order status progression and its side effects.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::models::{NotificationItem, NotificationType, Order, OrderStatus};

pub const PICKUP_CODE_MIN: u32 = 100_000;
pub const PICKUP_CODE_MAX: u32 = 999_999;
pub const PICKUP_CODE_TTL_MINUTES: i64 = 60;

impl OrderStatus {
    /// Forward successor on the fulfilment path.
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Created => Some(OrderStatus::PendingPharmacy),
            OrderStatus::PendingPharmacy => Some(OrderStatus::Accepted),
            OrderStatus::Accepted => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Assigned),
            OrderStatus::Assigned => Some(OrderStatus::PickedUp),
            OrderStatus::PickedUp => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Whether moving to `target` follows the lifecycle. Transitions are
    /// advisory, so callers only use this to log.
    pub fn allows(&self, target: OrderStatus) -> bool {
        match target {
            OrderStatus::Cancelled => !self.is_terminal(),
            _ => self.next() == Some(target),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransitionOutcome {
    pub from: OrderStatus,
    pub to: OrderStatus,
    /// A pickup code was issued by this transition.
    pub issued_pickup_code: bool,
    pub notification: Option<NotificationItem>,
}

pub fn generate_pickup_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.gen_range(PICKUP_CODE_MIN..=PICKUP_CODE_MAX).to_string()
}

pub fn pickup_expiry(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::minutes(PICKUP_CODE_TTL_MINUTES)
}

/// Write `target` onto `order` and apply the side effects of entering it.
pub fn apply_transition<R: Rng + ?Sized>(
    order: &mut Order,
    target: OrderStatus,
    now: DateTime<Utc>,
    rng: &mut R,
) -> TransitionOutcome {
    let from = order.status;
    order.status = target;

    let mut issued_pickup_code = false;
    let mut notification = None;

    match target {
        OrderStatus::Ready => {
            if order.pickup_code.is_none() {
                order.pickup_code = Some(generate_pickup_code(rng));
                order.pickup_code_expires_at = Some(pickup_expiry(now));
                issued_pickup_code = true;
            }
            notification = Some(ready_notification(&order.id, now));
        }
        OrderStatus::PickedUp => {
            order.picked_up_at = Some(now);
        }
        OrderStatus::Created
        | OrderStatus::PendingPharmacy
        | OrderStatus::Accepted
        | OrderStatus::Preparing
        | OrderStatus::Assigned
        | OrderStatus::Delivered
        | OrderStatus::Cancelled => {}
    }

    TransitionOutcome {
        from,
        to: target,
        issued_pickup_code,
        notification,
    }
}

fn ready_notification(order_id: &str, now: DateTime<Utc>) -> NotificationItem {
    NotificationItem::new(
        NotificationType::Delivery,
        "Commande prête",
        format!("Commande {order_id} prête pour collecte livreur."),
        now,
    )
}
