pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod store;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::store::Store;

/// Store handle injected into every handler
pub type AppState = Arc<dyn Store>;

pub fn app(store: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/auth/login", post(handlers::auth::login))
        // Protected API
        .merge(protected_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

fn protected_routes() -> Router<AppState> {
    use axum::middleware::from_fn;

    Router::new()
        .route(
            "/notes",
            get(handlers::notes::list).post(handlers::notes::create),
        )
        .route(
            "/notes/:id",
            get(handlers::notes::get)
                .put(handlers::notes::update)
                .delete(handlers::notes::remove),
        )
        .route("/admin/users", get(handlers::admin::users))
        .route("/admin/notes", get(handlers::admin::notes))
        .route("/subscription/upgrade", post(handlers::subscription::upgrade))
        .route_layer(from_fn(middleware::auth::require_auth))
}
