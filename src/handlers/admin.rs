use axum::extract::State;
use axum::response::Json;
use axum::Extension;
use serde_json::{json, Value};

use crate::auth::gate;
use crate::auth::Claims;
use crate::error::ApiError;
use crate::store::models::PublicUser;
use crate::AppState;

/// GET /admin/users - the caller's tenant's users, password field omitted
pub async fn users(
    State(store): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Value>, ApiError> {
    gate::require_admin(&claims)?;

    let users: Vec<PublicUser> = store
        .users_by_tenant(&claims.tenant_id)
        .await?
        .iter()
        .map(PublicUser::from)
        .collect();

    Ok(Json(json!({ "users": users })))
}

/// GET /admin/notes - every note in the caller's tenant
pub async fn notes(
    State(store): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Value>, ApiError> {
    gate::require_admin(&claims)?;

    let notes = store.notes_by_tenant(&claims.tenant_id).await?;
    Ok(Json(json!({ "notes": notes })))
}
