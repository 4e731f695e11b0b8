use crate::api::ApiError;
use crate::app_config::AppConfig;
use crate::domain::InstituteId;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{info, instrument};

/// Resolves an institute name to the identifier the attendance endpoint expects. The service answers
/// with the bare identifier rather than an object.
#[instrument(skip(client, config))]
pub async fn fetch_institute_id(client: &Client, config: &AppConfig, institute_name: &str) -> Result<InstituteId, ApiError> {
    info!("🏫 Resolving institute '{}'...", institute_name);

    let response = client
        .get(format!("{}/institute/id", config.api().url()))
        .query(&[("instituteName", institute_name)])
        .send()
        .await?;

    if response.status() == StatusCode::NOT_FOUND {
        info!("🏫 Resolving institute '{}'... not found", institute_name);
        return Err(ApiError::NotFound);
    }

    let body = response.error_for_status()?.text().await?;
    let institute_id = parse_institute_id(&body)?;
    info!(institute_id = %institute_id, "🏫 Resolving institute '{}'... OK", institute_name);

    Ok(institute_id)
}

fn parse_institute_id(body: &str) -> Result<InstituteId, ApiError> {
    let body = body.trim();
    if body.is_empty() {
        return Err(ApiError::NotFound);
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Null) => Err(ApiError::NotFound),
        Ok(Value::String(id)) if id.trim().is_empty() => Err(ApiError::NotFound),
        Ok(Value::Bool(false)) => Err(ApiError::NotFound),
        Ok(Value::Number(id)) if id.as_f64() == Some(0.0) => Err(ApiError::NotFound),
        Ok(id @ (Value::String(_) | Value::Number(_))) => Ok(InstituteId::new(id)),
        Ok(other) => Err(ApiError::UnexpectedResponse(format!("institute id must be a string or a number, got {}", other))),
        // Plain text identifier
        Err(_) => Ok(InstituteId::from(body)),
    }
}
