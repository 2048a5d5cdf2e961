use crate::{
    dto::profile::UpdateProfileRequest,
    error::AppResult,
    models::PharmacyProfile,
    services::medication_service::require_text,
    state::AppState,
};

pub async fn get_profile(state: &AppState) -> AppResult<PharmacyProfile> {
    state.store.get_profile().await
}

pub async fn update_profile(
    state: &AppState,
    payload: UpdateProfileRequest,
) -> AppResult<PharmacyProfile> {
    let mut profile = state.store.get_profile().await?;

    let fields = [
        ("name", payload.name, &mut profile.name),
        ("address", payload.address, &mut profile.address),
        ("phone", payload.phone, &mut profile.phone),
        ("email", payload.email, &mut profile.email),
        ("licenseNumber", payload.license_number, &mut profile.license_number),
    ];
    for (field, value, slot) in fields {
        if let Some(value) = value {
            require_text(field, &value)?;
            *slot = value.trim().to_string();
        }
    }

    state.store.save_profile(&profile).await?;
    tracing::info!(name = %profile.name, "profile updated");
    Ok(profile)
}
