use axum::extract::State;
use axum::response::Json;
use axum::Extension;
use serde_json::{json, Value};

use crate::auth::Claims;
use crate::error::ApiError;
use crate::store::models::{Subscription, UserPatch};
use crate::AppState;

/// POST /subscription/upgrade - unconditional flip to pro.
///
/// Placeholder for an external billing integration; no payment verification
/// happens here.
pub async fn upgrade(
    State(store): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Value>, ApiError> {
    let updated = store
        .update_user(
            &claims.user_id,
            UserPatch {
                subscription: Some(Subscription::Pro),
            },
        )
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    tracing::info!(user = %updated.email, "subscription upgraded to pro");

    Ok(Json(json!({
        "message": "Successfully upgraded to Pro!",
        "subscription": updated.subscription,
    })))
}
