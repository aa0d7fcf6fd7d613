use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub security: SecurityConfig,
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub jwt_expiry_hours: u64,
    pub bcrypt_cost: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum notes a free-subscription user may own at a time
    pub free_plan_note_limit: usize,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Ok(v) = env::var("NOTES_API_PORT").or_else(|_| env::var("PORT")) {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }

        // Security overrides
        if let Ok(v) = env::var("JWT_SECRET") {
            if !v.trim().is_empty() {
                self.security.jwt_secret = v;
            }
        }
        if let Ok(v) = env::var("SECURITY_JWT_EXPIRY_HOURS") {
            self.security.jwt_expiry_hours = v.parse().unwrap_or(self.security.jwt_expiry_hours);
        }
        if let Ok(v) = env::var("SECURITY_BCRYPT_COST") {
            self.security.bcrypt_cost = v.parse().unwrap_or(self.security.bcrypt_cost);
        }

        // Limits overrides
        if let Ok(v) = env::var("LIMITS_FREE_PLAN_NOTE_LIMIT") {
            self.limits.free_plan_note_limit = v.parse().unwrap_or(self.limits.free_plan_note_limit);
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig { port: 3000 },
            security: SecurityConfig {
                jwt_secret: "dev-secret-change-in-production".to_string(),
                jwt_expiry_hours: 24 * 7, // 1 week
                bcrypt_cost: 4, // minimum cost, keeps seeding and tests fast
            },
            limits: LimitsConfig {
                free_plan_note_limit: 3,
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig { port: 3000 },
            security: SecurityConfig {
                jwt_secret: "dev-secret-change-in-production".to_string(),
                jwt_expiry_hours: 24 * 7,
                bcrypt_cost: 10,
            },
            limits: LimitsConfig {
                free_plan_note_limit: 3,
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig { port: 3000 },
            security: SecurityConfig {
                // Must be overridden via JWT_SECRET in any real deployment
                jwt_secret: "dev-secret-change-in-production".to_string(),
                jwt_expiry_hours: 24 * 7,
                bcrypt_cost: 12,
            },
            limits: LimitsConfig {
                free_plan_note_limit: 3,
            },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
