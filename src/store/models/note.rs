use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A note owned by one user and scoped to one tenant. The store only ever
/// constructs notes whose tenant matches the owner's tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub user_id: String,
    pub tenant_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a note; id and timestamps are minted by the store
#[derive(Debug, Clone)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub user_id: String,
    pub tenant_id: String,
}

/// Field-level patch merged into an existing note; absent fields keep their
/// prior value
#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
}
