pub mod admin;
pub mod auth;
pub mod notes;
pub mod subscription;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde_json::{json, Value};

use crate::AppState;

/// GET / - service index
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Notes API",
        "version": version,
        "description": "Multi-tenant notes SaaS backend built with Rust (Axum)",
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "login": "POST /auth/login (public - token acquisition)",
            "notes": "/notes[/:id] (protected)",
            "admin": "/admin/users, /admin/notes (protected, admin role)",
            "subscription": "POST /subscription/upgrade (protected)",
        }
    }))
}

/// GET /health - liveness plus store reachability
pub async fn health(State(store): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match store.health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "store": "ok"
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "error": e.to_string()
            })),
        ),
    }
}
