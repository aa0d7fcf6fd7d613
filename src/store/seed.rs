use chrono::Utc;

use crate::auth::password::hash_password;

use super::models::{Role, Subscription, Tenant, User};

/// Fixed demo tenants and users, created at process start.
///
/// Passwords: admin accounts use "admin123", member accounts "member123".
pub fn demo_fixture() -> anyhow::Result<(Vec<Tenant>, Vec<User>)> {
    let now = Utc::now();

    let tenants = vec![
        Tenant {
            id: "tenant-1".to_string(),
            name: "Acme Corp".to_string(),
            created_at: now,
            updated_at: now,
        },
        Tenant {
            id: "tenant-2".to_string(),
            name: "Beta Inc".to_string(),
            created_at: now,
            updated_at: now,
        },
    ];

    let users = vec![
        demo_user("user-1", "admin@acme.com", "admin123", Role::Admin, Subscription::Pro, "tenant-1")?,
        demo_user("user-2", "member@acme.com", "member123", Role::Member, Subscription::Free, "tenant-1")?,
        demo_user("user-3", "admin@beta.com", "admin123", Role::Admin, Subscription::Pro, "tenant-2")?,
        demo_user("user-4", "member@beta.com", "member123", Role::Member, Subscription::Free, "tenant-2")?,
    ];

    Ok((tenants, users))
}

fn demo_user(
    id: &str,
    email: &str,
    password: &str,
    role: Role,
    subscription: Subscription,
    tenant_id: &str,
) -> anyhow::Result<User> {
    let now = Utc::now();
    Ok(User {
        id: id.to_string(),
        email: email.to_string(),
        password: hash_password(password)?,
        role,
        subscription,
        tenant_id: tenant_id.to_string(),
        created_at: now,
        updated_at: now,
    })
}
