pub mod memory;
pub mod models;
pub mod seed;

use async_trait::async_trait;

use self::models::{NewNote, Note, NotePatch, Tenant, User, UserPatch};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store lock poisoned")]
    LockPoisoned,
}

/// Storage abstraction over tenants, users, and notes.
///
/// Every note/user query is scoped by tenant id; a note looked up under the
/// wrong tenant is indistinguishable from a nonexistent one. Handlers depend
/// only on this trait so a persistent backend can be substituted without
/// touching them.
#[async_trait]
pub trait Store: Send + Sync {
    async fn health_check(&self) -> Result<(), StoreError>;

    // User operations
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
    async fn find_user_by_id(&self, id: &str) -> Result<Option<User>, StoreError>;
    /// Merge a field-level patch into an existing user, refreshing the
    /// updated-timestamp. Returns the post-mutation record, or None when the
    /// user does not exist.
    async fn update_user(&self, id: &str, patch: UserPatch) -> Result<Option<User>, StoreError>;
    async fn users_by_tenant(&self, tenant_id: &str) -> Result<Vec<User>, StoreError>;

    // Tenant operations
    async fn find_tenant_by_id(&self, id: &str) -> Result<Option<Tenant>, StoreError>;

    // Note operations
    async fn notes_by_tenant(&self, tenant_id: &str) -> Result<Vec<Note>, StoreError>;
    async fn notes_by_user(&self, user_id: &str, tenant_id: &str)
        -> Result<Vec<Note>, StoreError>;
    async fn find_note(&self, id: &str, tenant_id: &str) -> Result<Option<Note>, StoreError>;
    async fn create_note(&self, new_note: NewNote) -> Result<Note, StoreError>;
    /// Merge semantics as for users: absent patch fields keep prior values
    async fn update_note(
        &self,
        id: &str,
        tenant_id: &str,
        patch: NotePatch,
    ) -> Result<Option<Note>, StoreError>;
    async fn delete_note(&self, id: &str, tenant_id: &str) -> Result<bool, StoreError>;
}
