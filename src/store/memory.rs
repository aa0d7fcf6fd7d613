use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::models::{NewNote, Note, NotePatch, Tenant, User, UserPatch};
use super::{seed, Store, StoreError};

#[derive(Debug, Default)]
struct Collections {
    tenants: Vec<Tenant>,
    users: Vec<User>,
    notes: Vec<Note>,
}

/// In-memory store. A single RwLock serializes access: reads shared, writes
/// exclusive, last-write-wins between concurrent writers to the same record.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the fixed demo tenants and users
    pub fn with_demo_data() -> anyhow::Result<Self> {
        let store = Self::new();
        {
            let mut inner = store.write()?;
            let (tenants, users) = seed::demo_fixture()?;
            inner.tenants = tenants;
            inner.users = users;
        }
        Ok(store)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Collections>, StoreError> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Collections>, StoreError> {
        self.inner.write().map_err(|_| StoreError::LockPoisoned)
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn health_check(&self) -> Result<(), StoreError> {
        self.read().map(|_| ())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let inner = self.read()?;
        Ok(inner.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        let inner = self.read()?;
        Ok(inner.users.iter().find(|u| u.id == id).cloned())
    }

    async fn update_user(&self, id: &str, patch: UserPatch) -> Result<Option<User>, StoreError> {
        let mut inner = self.write()?;
        let Some(user) = inner.users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        if let Some(subscription) = patch.subscription {
            user.subscription = subscription;
        }
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn users_by_tenant(&self, tenant_id: &str) -> Result<Vec<User>, StoreError> {
        let inner = self.read()?;
        Ok(inner
            .users
            .iter()
            .filter(|u| u.tenant_id == tenant_id)
            .cloned()
            .collect())
    }

    async fn find_tenant_by_id(&self, id: &str) -> Result<Option<Tenant>, StoreError> {
        let inner = self.read()?;
        Ok(inner.tenants.iter().find(|t| t.id == id).cloned())
    }

    async fn notes_by_tenant(&self, tenant_id: &str) -> Result<Vec<Note>, StoreError> {
        let inner = self.read()?;
        Ok(inner
            .notes
            .iter()
            .filter(|n| n.tenant_id == tenant_id)
            .cloned()
            .collect())
    }

    async fn notes_by_user(
        &self,
        user_id: &str,
        tenant_id: &str,
    ) -> Result<Vec<Note>, StoreError> {
        let inner = self.read()?;
        Ok(inner
            .notes
            .iter()
            .filter(|n| n.user_id == user_id && n.tenant_id == tenant_id)
            .cloned()
            .collect())
    }

    async fn find_note(&self, id: &str, tenant_id: &str) -> Result<Option<Note>, StoreError> {
        let inner = self.read()?;
        Ok(inner
            .notes
            .iter()
            .find(|n| n.id == id && n.tenant_id == tenant_id)
            .cloned())
    }

    async fn create_note(&self, new_note: NewNote) -> Result<Note, StoreError> {
        let now = Utc::now();
        let note = Note {
            id: Uuid::new_v4().to_string(),
            title: new_note.title,
            content: new_note.content,
            user_id: new_note.user_id,
            tenant_id: new_note.tenant_id,
            created_at: now,
            updated_at: now,
        };
        let mut inner = self.write()?;
        inner.notes.push(note.clone());
        Ok(note)
    }

    async fn update_note(
        &self,
        id: &str,
        tenant_id: &str,
        patch: NotePatch,
    ) -> Result<Option<Note>, StoreError> {
        let mut inner = self.write()?;
        let Some(note) = inner
            .notes
            .iter_mut()
            .find(|n| n.id == id && n.tenant_id == tenant_id)
        else {
            return Ok(None);
        };
        if let Some(title) = patch.title {
            note.title = title;
        }
        if let Some(content) = patch.content {
            note.content = content;
        }
        note.updated_at = Utc::now();
        Ok(Some(note.clone()))
    }

    async fn delete_note(&self, id: &str, tenant_id: &str) -> Result<bool, StoreError> {
        let mut inner = self.write()?;
        let before = inner.notes.len();
        inner
            .notes
            .retain(|n| !(n.id == id && n.tenant_id == tenant_id));
        Ok(inner.notes.len() != before)
    }
}
