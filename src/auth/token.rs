use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config;
use crate::store::models::{Role, Subscription, User};

/// Token claims: a snapshot of the user at issuance time. Role and
/// subscription are NOT re-validated against the store on each use; a change
/// there is invisible to outstanding tokens until re-login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_id: String,
    pub email: String,
    pub role: Role,
    pub tenant_id: String,
    pub subscription: Subscription,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn for_user(user: &User) -> Self {
        let now = Utc::now();
        let expiry_hours = config::config().security.jwt_expiry_hours;
        Self {
            user_id: user.id.clone(),
            email: user.email.clone(),
            role: user.role,
            tenant_id: user.tenant_id.clone(),
            subscription: user.subscription,
            iat: now.timestamp(),
            exp: (now + Duration::hours(expiry_hours as i64)).timestamp(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("JWT secret not configured")]
    MissingSecret,
    #[error("token generation failed: {0}")]
    Encode(jsonwebtoken::errors::Error),
    #[error("invalid token: {0}")]
    Invalid(jsonwebtoken::errors::Error),
}

/// Sign a claims snapshot for the given user (HS256)
pub fn issue_token(user: &User) -> Result<String, TokenError> {
    let secret = secret()?;
    let claims = Claims::for_user(user);
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(TokenError::Encode)
}

/// Decode and validate a token. Fails closed: any decode, signature, or
/// expiry failure reads as invalid.
pub fn verify_token(token: &str) -> Result<Claims, TokenError> {
    let secret = secret()?;
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(TokenError::Invalid)?;
    Ok(token_data.claims)
}

fn secret() -> Result<&'static str, TokenError> {
    let secret = &config::config().security.jwt_secret;
    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }
    Ok(secret)
}
