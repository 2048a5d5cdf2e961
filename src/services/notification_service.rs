use chrono::Utc;

use crate::{
    error::AppResult,
    models::{NotificationItem, NotificationType},
    state::AppState,
};

pub async fn list_notifications(state: &AppState) -> AppResult<Vec<NotificationItem>> {
    state.store.get_notifications().await
}

pub fn build_notification(
    kind: NotificationType,
    title: impl Into<String>,
    description: impl Into<String>,
) -> NotificationItem {
    NotificationItem::new(kind, title, description, Utc::now())
}

pub async fn push_notification(
    state: &AppState,
    notification: NotificationItem,
) -> AppResult<Vec<NotificationItem>> {
    tracing::debug!(id = %notification.id, kind = ?notification.kind, "notification added");
    state.store.add_notification(notification).await
}

/// Record a side-effect notification; a failed write only logs.
pub async fn emit(state: &AppState, notification: NotificationItem) {
    let id = notification.id.clone();
    if let Err(err) = push_notification(state, notification).await {
        tracing::warn!(id = %id, error = %err, "notification write failed");
    }
}
