use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::Extension;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::gate;
use crate::auth::Claims;
use crate::error::ApiError;
use crate::store::models::{NewNote, Note, NotePatch};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// GET /notes - notes owned by the caller, tenant-scoped
pub async fn list(
    State(store): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Value>, ApiError> {
    let notes = store
        .notes_by_user(&claims.user_id, &claims.tenant_id)
        .await?;
    Ok(Json(json!({ "notes": notes })))
}

/// POST /notes - create a note for the caller, subject to the free-plan quota
pub async fn create(
    State(store): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateNoteRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let (title, content) = match (payload.title, payload.content) {
        (Some(title), Some(content)) if !title.is_empty() && !content.is_empty() => {
            (title, content)
        }
        _ => return Err(ApiError::bad_request("Title and content are required")),
    };

    gate::require_create_quota(store.as_ref(), &claims).await?;

    let note = store
        .create_note(NewNote {
            title,
            content,
            user_id: claims.user_id.clone(),
            tenant_id: claims.tenant_id.clone(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(json!({ "note": note }))))
}

/// GET /notes/:id
pub async fn get(
    State(store): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let note = fetch_authorized(&store, &claims, &id).await?;
    Ok(Json(json!({ "note": note })))
}

/// PUT /notes/:id - merge a patch; missing fields keep their prior value
pub async fn update(
    State(store): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateNoteRequest>,
) -> Result<Json<Value>, ApiError> {
    fetch_authorized(&store, &claims, &id).await?;

    let note = store
        .update_note(
            &id,
            &claims.tenant_id,
            NotePatch {
                title: payload.title,
                content: payload.content,
            },
        )
        .await?
        .ok_or_else(|| ApiError::not_found("Note not found"))?;

    Ok(Json(json!({ "note": note })))
}

/// DELETE /notes/:id
pub async fn remove(
    State(store): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    fetch_authorized(&store, &claims, &id).await?;

    let deleted = store.delete_note(&id, &claims.tenant_id).await?;
    if !deleted {
        return Err(ApiError::internal_server_error("Failed to delete note"));
    }

    Ok(Json(json!({ "message": "Note deleted successfully" })))
}

/// Tenant-scoped lookup plus the ownership gate. A note outside the caller's
/// tenant reads as not-found, never as forbidden.
async fn fetch_authorized(
    store: &AppState,
    claims: &Claims,
    id: &str,
) -> Result<Note, ApiError> {
    let note = store
        .find_note(id, &claims.tenant_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Note not found"))?;

    gate::require_note_access(claims, &note)?;
    Ok(note)
}
