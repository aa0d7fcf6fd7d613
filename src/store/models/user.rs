use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Member,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subscription {
    Free,
    Pro,
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub email: String,
    /// bcrypt hash, never serialized to the wire
    pub password: String,
    pub role: Role,
    pub subscription: Subscription,
    pub tenant_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Wire representation of a user: the full record minus the password
/// credential. This is the only shape user records leave the API in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub subscription: Subscription,
    pub tenant_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            role: user.role,
            subscription: user.subscription,
            tenant_id: user.tenant_id.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Field-level patch merged into an existing user record
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub subscription: Option<Subscription>,
}
