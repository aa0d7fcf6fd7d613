use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth::token::verify_token;
use crate::auth::Claims;
use crate::error::ApiError;

/// Bearer-token middleware for protected routes: validates the token and
/// injects the decoded claims into the request extensions. Unauthenticated
/// requests are rejected here, before any handler or gate rule runs.
pub async fn require_auth(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&headers).map_err(ApiError::unauthorized)?;

    let claims: Claims = verify_token(&token).map_err(|err| {
        tracing::debug!("Rejected token: {}", err);
        ApiError::unauthorized("Invalid or expired token")
    })?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header
fn extract_bearer_token(headers: &HeaderMap) -> Result<String, String> {
    let auth_header = headers
        .get("authorization")
        .ok_or_else(|| "Missing Authorization header".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    if let Some(token) = auth_str.strip_prefix("Bearer ") {
        if token.trim().is_empty() {
            return Err("Empty bearer token".to_string());
        }
        Ok(token.to_string())
    } else {
        Err("Authorization header must use Bearer token format".to_string())
    }
}
