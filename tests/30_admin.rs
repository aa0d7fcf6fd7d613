mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn admin_users_lists_tenant_users_without_passwords() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let token = common::login_token(server, "admin@acme.com", "admin123").await?;

    let res = client
        .get(format!("{}/admin/users", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    let users = body["users"].as_array().expect("users array");

    assert_eq!(users.len(), 2);
    let emails: Vec<&str> = users.iter().filter_map(|u| u["email"].as_str()).collect();
    assert!(emails.contains(&"admin@acme.com"));
    assert!(emails.contains(&"member@acme.com"));

    for user in users {
        assert_eq!(user["tenantId"], "tenant-1");
        assert!(user.get("password").is_none(), "password leaked: {}", user);
        // Everything else stays: role, subscription, timestamps
        assert!(user["role"].is_string());
        assert!(user["subscription"].is_string());
        assert!(user["createdAt"].is_string());
        assert!(user["updatedAt"].is_string());
    }
    Ok(())
}

#[tokio::test]
async fn admin_notes_is_tenant_scoped() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // Seed one note in each tenant
    let beta_token = common::login_token(server, "admin@beta.com", "admin123").await?;
    let res = common::create_note(server, &beta_token, "Beta note", "body").await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let beta_note_id = res.json::<serde_json::Value>().await?["note"]["id"]
        .as_str()
        .expect("note id")
        .to_string();

    let acme_token = common::login_token(server, "admin@acme.com", "admin123").await?;
    let res = common::create_note(server, &acme_token, "Acme note", "body").await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .get(format!("{}/admin/notes", server.base_url))
        .bearer_auth(&acme_token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    let notes = body["notes"].as_array().expect("notes array");

    assert!(!notes.is_empty());
    for note in notes {
        assert_eq!(note["tenantId"], "tenant-1");
        assert_ne!(note["id"], beta_note_id.as_str());
    }
    Ok(())
}

#[tokio::test]
async fn admin_endpoints_reject_members() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let token = common::login_token(server, "member@acme.com", "member123").await?;

    for path in ["/admin/users", "/admin/notes"] {
        let res = client
            .get(format!("{}{}", server.base_url, path))
            .bearer_auth(&token)
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::FORBIDDEN, "path: {}", path);
        let body = res.json::<serde_json::Value>().await?;
        assert_eq!(body["error"], "Admin access required");
    }
    Ok(())
}

#[tokio::test]
async fn admin_endpoints_reject_unauthenticated() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    for path in ["/admin/users", "/admin/notes"] {
        let res = client
            .get(format!("{}{}", server.base_url, path))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "path: {}", path);
    }
    Ok(())
}
