use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Isolation boundary for users and notes. Every other entity belongs to
/// exactly one tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
