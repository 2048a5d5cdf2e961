use uuid::Uuid;

use crate::{
    dto::medications::{CreateMedicationRequest, UpdateMedicationRequest},
    error::{AppError, AppResult},
    models::{Medication, NotificationType},
    params::MedicationQuery,
    services::notification_service,
    state::AppState,
};

pub const DEFAULT_CATEGORY: &str = "autre";

pub async fn list_medications(
    state: &AppState,
    query: &MedicationQuery,
) -> AppResult<Vec<Medication>> {
    let medications = state.store.get_medications().await?;
    Ok(medications
        .into_iter()
        .filter(|m| query.matches(m))
        .collect())
}

pub async fn get_medication(state: &AppState, id: &str) -> AppResult<Medication> {
    state
        .store
        .get_medications()
        .await?
        .into_iter()
        .find(|m| m.id == id)
        .ok_or_else(|| AppError::NotFound(format!("medication {id}")))
}

pub async fn create_medication(
    state: &AppState,
    payload: CreateMedicationRequest,
) -> AppResult<Medication> {
    require_text("name", &payload.name)?;
    require_text("price", &payload.price)?;
    require_non_negative("stock", payload.stock)?;
    require_non_negative("minStock", payload.min_stock)?;

    let medication = Medication {
        id: Uuid::new_v4().to_string(),
        name: payload.name.trim().to_string(),
        generic_name: payload.generic_name,
        category: category_or_default(payload.category),
        stock: payload.stock,
        min_stock: payload.min_stock,
        price: payload.price.trim().to_string(),
        requires_prescription: payload.requires_prescription,
        barcode: payload.barcode,
        manufacturer: payload.manufacturer,
        expiry_date: payload.expiry_date,
    };

    let mut medications = state.store.get_medications().await?;
    medications.insert(0, medication.clone());
    state.store.save_medications(&medications).await?;

    tracing::info!(id = %medication.id, name = %medication.name, "medication created");
    Ok(medication)
}

pub async fn update_medication(
    state: &AppState,
    id: &str,
    payload: UpdateMedicationRequest,
) -> AppResult<Medication> {
    let mut medications = state.store.get_medications().await?;
    let existing = medications
        .iter_mut()
        .find(|m| m.id == id)
        .ok_or_else(|| AppError::NotFound(format!("medication {id}")))?;

    if let Some(name) = payload.name {
        require_text("name", &name)?;
        existing.name = name.trim().to_string();
    }
    if let Some(price) = payload.price {
        require_text("price", &price)?;
        existing.price = price.trim().to_string();
    }
    if let Some(stock) = payload.stock {
        require_non_negative("stock", stock)?;
        existing.stock = stock;
    }
    if let Some(min_stock) = payload.min_stock {
        require_non_negative("minStock", min_stock)?;
        existing.min_stock = min_stock;
    }
    if payload.category.is_some() {
        existing.category = category_or_default(payload.category);
    }
    if let Some(generic_name) = payload.generic_name {
        existing.generic_name = Some(generic_name);
    }
    if let Some(requires_prescription) = payload.requires_prescription {
        existing.requires_prescription = requires_prescription;
    }
    if let Some(barcode) = payload.barcode {
        existing.barcode = Some(barcode);
    }
    if let Some(manufacturer) = payload.manufacturer {
        existing.manufacturer = Some(manufacturer);
    }
    if let Some(expiry_date) = payload.expiry_date {
        existing.expiry_date = Some(expiry_date);
    }

    let updated = existing.clone();
    state.store.save_medications(&medications).await?;

    tracing::info!(id = %updated.id, "medication updated");
    Ok(updated)
}

pub async fn delete_medication(state: &AppState, id: &str) -> AppResult<Medication> {
    let mut medications = state.store.get_medications().await?;
    let position = medications
        .iter()
        .position(|m| m.id == id)
        .ok_or_else(|| AppError::NotFound(format!("medication {id}")))?;
    let removed = medications.remove(position);
    state.store.save_medications(&medications).await?;

    tracing::info!(id = %removed.id, remaining = medications.len(), "medication deleted");
    Ok(removed)
}

/// Add `delta` units to a medication's stock. Crossing under the minimum
/// threshold raises a stock notification.
pub async fn adjust_stock(state: &AppState, id: &str, delta: i32) -> AppResult<Medication> {
    if delta == 0 {
        return Err(AppError::BadRequest("delta must not be 0".into()));
    }

    let mut medications = state.store.get_medications().await?;
    let existing = medications
        .iter_mut()
        .find(|m| m.id == id)
        .ok_or_else(|| AppError::NotFound(format!("medication {id}")))?;

    let new_stock = existing
        .stock
        .checked_add(delta)
        .ok_or_else(|| AppError::BadRequest("stock out of range".into()))?;
    if new_stock < 0 {
        return Err(AppError::BadRequest("stock cannot be negative".into()));
    }

    let was_low = existing.is_low_stock();
    existing.stock = new_stock;
    let updated = existing.clone();
    state.store.save_medications(&medications).await?;

    tracing::info!(id = %updated.id, delta, stock = updated.stock, "stock adjusted");

    if !was_low && updated.is_low_stock() {
        let notification = notification_service::build_notification(
            NotificationType::Stock,
            "Stock faible",
            format!("{} en dessous du seuil minimal.", updated.name),
        );
        notification_service::emit(state, notification).await;
    }

    Ok(updated)
}

fn category_or_default(category: Option<String>) -> String {
    category
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
}

pub(crate) fn require_text(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{field} is required")));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: i32) -> AppResult<()> {
    if value < 0 {
        return Err(AppError::BadRequest(format!("{field} cannot be negative")));
    }
    Ok(())
}
