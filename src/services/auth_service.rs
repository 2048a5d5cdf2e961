use chrono::{Datelike, Local};

use crate::{
    dto::auth::{LoginRequest, RegisterRequest},
    error::{AppError, AppResult},
    models::PharmacyProfile,
    services::medication_service::require_text,
    state::AppState,
};

pub const DEFAULT_ADDRESS: &str = "Abidjan, Côte d'Ivoire";
pub const DEFAULT_PHONE: &str = "+225";
pub const DEFAULT_LICENSE: &str = "PH-CI-XXXX";

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

pub async fn login(state: &AppState, payload: LoginRequest) -> AppResult<()> {
    require_text("email", &payload.email)?;
    require_text("password", &payload.password)?;
    state.store.set_auth(true).await?;
    tracing::info!(email = %payload.email, "logged in");
    Ok(())
}

pub async fn register(state: &AppState, payload: RegisterRequest) -> AppResult<PharmacyProfile> {
    require_text("pharmacyName", &payload.pharmacy_name)?;
    require_text("email", &payload.email)?;
    require_text("password", &payload.password)?;
    if payload.password != payload.confirm {
        return Err(AppError::BadRequest("passwords do not match".into()));
    }

    let today = Local::now();
    let profile = PharmacyProfile {
        name: payload.pharmacy_name.trim().to_string(),
        address: DEFAULT_ADDRESS.into(),
        phone: non_blank(payload.phone).unwrap_or_else(|| DEFAULT_PHONE.into()),
        email: payload.email.trim().to_string(),
        license_number: non_blank(payload.license_number)
            .unwrap_or_else(|| DEFAULT_LICENSE.into()),
        member_since: member_since_label(today.month(), today.year()),
    };

    state.store.save_profile(&profile).await?;
    state.store.set_auth(true).await?;
    tracing::info!(name = %profile.name, "pharmacy registered");
    Ok(profile)
}

pub async fn logout(state: &AppState) -> AppResult<()> {
    state.store.set_auth(false).await?;
    tracing::info!("logged out");
    Ok(())
}

pub async fn is_logged_in(state: &AppState) -> bool {
    state.store.get_auth().await
}

pub async fn ensure_logged_in(state: &AppState) -> AppResult<()> {
    if is_logged_in(state).await {
        Ok(())
    } else {
        Err(AppError::Unauthenticated)
    }
}

/// `month` is 1-based, e.g. `(3, 2026)` gives `"mars 2026"`.
pub fn member_since_label(month: u32, year: i32) -> String {
    let index = month.clamp(1, 12) as usize - 1;
    format!("{} {year}", MONTHS_FR[index])
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
