use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;

static SERVER: OnceLock<TestServer> = OnceLock::new();

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    #[allow(dead_code)]
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Spawn the already-built binary to keep start fast during tests
        // Assumes debug profile; adjust if you run tests with --release
        let mut cmd = Command::new("target/debug/notes-api");
        cmd.env("NOTES_API_PORT", port.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline { break; }
            let url = format!("{}/health", self.base_url);
            match client.get(&url).send().await {
                Ok(resp) => {
                    if resp.status() == StatusCode::OK {
                        return Ok(());
                    }
                }
                Err(_) => {}
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    let server = SERVER.get_or_init(|| TestServer::spawn().expect("failed to spawn server binary"));
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// Log in and return the bearer token
#[allow(dead_code)]
pub async fn login_token(server: &TestServer, email: &str, password: &str) -> Result<String> {
    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/auth/login", server.base_url))
        .json(&serde_json::json!({ "email": email, "password": password }))
        .send()
        .await?;
    anyhow::ensure!(
        res.status() == StatusCode::OK,
        "login failed for {}: {}",
        email,
        res.status()
    );
    let body = res.json::<serde_json::Value>().await?;
    body["token"]
        .as_str()
        .map(|s| s.to_string())
        .context("login response missing token")
}

/// Create a note as the given caller, returning the raw response
#[allow(dead_code)]
pub async fn create_note(
    server: &TestServer,
    token: &str,
    title: &str,
    content: &str,
) -> Result<reqwest::Response> {
    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/notes", server.base_url))
        .bearer_auth(token)
        .json(&serde_json::json!({ "title": title, "content": content }))
        .send()
        .await?;
    Ok(res)
}
