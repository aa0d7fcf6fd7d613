use axum::extract::State;
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::password::verify_password;
use crate::auth::token::issue_token;
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /auth/login - authenticate and receive a signed token
///
/// Returns the token plus a password-free user snapshot including the tenant
/// name. A missing user and a wrong password are indistinguishable to the
/// caller.
pub async fn login(
    State(store): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let (email, password) = match (payload.email, payload.password) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            (email, password)
        }
        _ => return Err(ApiError::bad_request("Email and password are required")),
    };

    let user = store
        .find_user_by_email(&email)
        .await?
        .filter(|user| verify_password(&password, &user.password))
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    let token = issue_token(&user)?;
    let tenant = store.find_tenant_by_id(&user.tenant_id).await?;
    let tenant_name = tenant.map(|t| t.name).unwrap_or_else(|| "Unknown".to_string());

    tracing::info!(user = %user.email, tenant = %user.tenant_id, "login succeeded");

    Ok(Json(json!({
        "token": token,
        "user": {
            "id": user.id,
            "email": user.email,
            "role": user.role,
            "subscription": user.subscription,
            "tenantId": user.tenant_id,
            "tenantName": tenant_name,
        }
    })))
}
