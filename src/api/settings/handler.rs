//! Restaurant Settings Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::RestaurantSettings;
use crate::db::repository::SettingsRepository;
use crate::utils::validation::{
    self, MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN,
};
use crate::utils::{AppError, AppJson, AppResult};

/// GET /api/settings - 获取设置单例
///
/// When no document has been saved yet, returns constructed defaults (not
/// persisted) with a `"_seed": true` marker so the caller knows they are
/// looking at unsaved values.
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<serde_json::Value>> {
    let repo = SettingsRepository::new(state.db.clone());
    let value = match repo.get().await? {
        Some(settings) => to_value(&settings)?,
        None => {
            let mut defaults = to_value(&RestaurantSettings::default())?;
            defaults["_seed"] = serde_json::Value::Bool(true);
            defaults
        }
    };
    Ok(Json(value))
}

/// PUT /api/settings - 更新设置 (admin)
///
/// Whole-document replace of the provided fields at the fixed singleton key.
pub async fn update(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<RestaurantSettings>,
) -> AppResult<Json<RestaurantSettings>> {
    validate(&payload)?;

    let repo = SettingsRepository::new(state.db.clone());
    let settings = repo.upsert(payload).await?;
    Ok(Json(settings))
}

fn validate(payload: &RestaurantSettings) -> AppResult<()> {
    validation::validate_required_text(&payload.restaurant_name, "restaurant_name", MAX_NAME_LEN)?;
    validation::validate_required_text(
        &payload.primary_color,
        "primary_color",
        MAX_SHORT_TEXT_LEN,
    )?;
    validation::validate_required_text(
        &payload.default_language,
        "default_language",
        MAX_SHORT_TEXT_LEN,
    )?;
    validation::validate_required_text(&payload.currency, "currency", MAX_SHORT_TEXT_LEN)?;
    validation::validate_optional_url(&payload.logo_url, "logo_url")?;
    validation::validate_optional_text(&payload.address, "address", MAX_ADDRESS_LEN)?;
    validation::validate_optional_email(&payload.contact_email, "contact_email")?;
    Ok(())
}

fn to_value(settings: &RestaurantSettings) -> AppResult<serde_json::Value> {
    serde_json::to_value(settings)
        .map_err(|e| AppError::internal(format!("Failed to serialize settings: {e}")))
}
