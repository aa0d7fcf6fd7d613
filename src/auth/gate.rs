//! Authorization rules: role checks, note ownership, and the free-plan
//! creation quota. Every rejection is terminal for the request.

use crate::config;
use crate::error::ApiError;
use crate::store::models::{Note, Role, Subscription};
use crate::store::Store;

use super::Claims;

/// Admin-only endpoints: any non-admin caller is rejected
pub fn require_admin(claims: &Claims) -> Result<(), ApiError> {
    if claims.role != Role::Admin {
        return Err(ApiError::forbidden("Admin access required"));
    }
    Ok(())
}

/// Resource-owning endpoints (note read/update/delete): the note was already
/// looked up within the caller's tenant, so only ownership remains to check.
/// Admins may access any note in their tenant.
pub fn require_note_access(claims: &Claims, note: &Note) -> Result<(), ApiError> {
    if note.user_id != claims.user_id && claims.role != Role::Admin {
        return Err(ApiError::forbidden("Forbidden"));
    }
    Ok(())
}

/// Note-creation quota for free-subscription users.
///
/// The subscription is re-read from the store rather than trusted from the
/// claims snapshot, so an upgrade takes effect without re-login. A user
/// missing from the store falls back to the claims snapshot.
pub async fn require_create_quota(store: &dyn Store, claims: &Claims) -> Result<(), ApiError> {
    let subscription = match store.find_user_by_id(&claims.user_id).await? {
        Some(user) => user.subscription,
        None => claims.subscription,
    };

    if subscription == Subscription::Free {
        let existing = store
            .notes_by_user(&claims.user_id, &claims.tenant_id)
            .await?;
        let limit = config::config().limits.free_plan_note_limit;
        if existing.len() >= limit {
            return Err(ApiError::quota_exceeded(format!(
                "Free plan limited to {} notes. Upgrade to Pro for unlimited notes.",
                limit
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use crate::store::models::{NewNote, UserPatch};
    use chrono::Utc;

    fn claims_for(user_id: &str, role: Role, subscription: Subscription) -> Claims {
        let now = Utc::now().timestamp();
        Claims {
            user_id: user_id.to_string(),
            email: format!("{}@acme.com", user_id),
            role,
            tenant_id: "tenant-1".to_string(),
            subscription,
            iat: now,
            exp: now + 3600,
        }
    }

    fn sample_note(owner_id: &str) -> Note {
        let now = Utc::now();
        Note {
            id: "note-1".to_string(),
            title: "t".to_string(),
            content: "c".to_string(),
            user_id: owner_id.to_string(),
            tenant_id: "tenant-1".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    async fn fill_quota(store: &MemoryStore, user_id: &str) {
        for i in 0..3 {
            store
                .create_note(NewNote {
                    title: format!("note {}", i),
                    content: "body".to_string(),
                    user_id: user_id.to_string(),
                    tenant_id: "tenant-1".to_string(),
                })
                .await
                .expect("note creates");
        }
    }

    #[test]
    fn test_admin_gate() {
        let admin = claims_for("user-1", Role::Admin, Subscription::Pro);
        let member = claims_for("user-2", Role::Member, Subscription::Free);

        assert!(require_admin(&admin).is_ok());
        assert!(matches!(
            require_admin(&member),
            Err(ApiError::Forbidden(_))
        ));
    }

    #[test]
    fn test_note_access_owner_admin_and_stranger() {
        let note = sample_note("user-2");
        let owner = claims_for("user-2", Role::Member, Subscription::Free);
        let admin = claims_for("user-1", Role::Admin, Subscription::Pro);
        let stranger = claims_for("user-9", Role::Member, Subscription::Free);

        assert!(require_note_access(&owner, &note).is_ok());
        assert!(require_note_access(&admin, &note).is_ok());
        assert!(matches!(
            require_note_access(&stranger, &note),
            Err(ApiError::Forbidden(_))
        ));
    }

    #[tokio::test]
    async fn test_quota_blocks_free_user_at_limit() {
        let store = MemoryStore::with_demo_data().expect("demo data seeds");
        let member = claims_for("user-2", Role::Member, Subscription::Free);

        assert!(require_create_quota(&store, &member).await.is_ok());
        fill_quota(&store, "user-2").await;
        assert!(matches!(
            require_create_quota(&store, &member).await,
            Err(ApiError::QuotaExceeded(_))
        ));
    }

    #[tokio::test]
    async fn test_quota_never_limits_pro_user() {
        let store = MemoryStore::with_demo_data().expect("demo data seeds");
        let admin = claims_for("user-1", Role::Admin, Subscription::Pro);

        fill_quota(&store, "user-1").await;
        assert!(require_create_quota(&store, &admin).await.is_ok());
    }

    #[tokio::test]
    async fn test_quota_reads_subscription_from_store_not_claims() {
        let store = MemoryStore::with_demo_data().expect("demo data seeds");
        // Claims still say free, but the store record was upgraded
        let stale = claims_for("user-2", Role::Member, Subscription::Free);

        fill_quota(&store, "user-2").await;
        store
            .update_user(
                "user-2",
                UserPatch {
                    subscription: Some(Subscription::Pro),
                },
            )
            .await
            .expect("store reachable")
            .expect("user exists");

        assert!(require_create_quota(&store, &stale).await.is_ok());
    }
}
