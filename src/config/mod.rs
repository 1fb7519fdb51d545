use once_cell::sync::Lazy;
use std::env;

// Insecure local-development defaults. Production startup refuses to run
// while any of these is still in effect.
pub const DEFAULT_ADMIN_SECRET: &str = "dev-admin-secret";
pub const DEFAULT_SUPERADMIN_SECRET: &str = "dev-secret";
pub const DEFAULT_SUPERADMIN_PASSWORD: &str = "password";

const DEFAULT_SESSION_DAYS: u64 = 7;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub session: SessionConfig,
    pub superadmin: SuperAdminCredentials,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

/// Per-tier token secrets and session lengths.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub admin_secret: String,
    pub superadmin_secret: String,
    pub admin_session_days: u64,
    pub superadmin_session_days: u64,
}

/// Credentials the super-admin login form is checked against.
#[derive(Debug, Clone)]
pub struct SuperAdminCredentials {
    pub username: String,
    pub password: String,
}

/// Location of the external admins directory service.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub api_base: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("NODE_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            _ => Environment::Development,
        };

        Self {
            environment,
            session: SessionConfig {
                admin_secret: env::var("ADMIN_SECRET")
                    .unwrap_or_else(|_| DEFAULT_ADMIN_SECRET.to_string()),
                superadmin_secret: env::var("SUPERADMIN_SECRET")
                    .unwrap_or_else(|_| DEFAULT_SUPERADMIN_SECRET.to_string()),
                admin_session_days: env_days("ADMIN_SESSION_DAYS"),
                superadmin_session_days: env_days("SUPERADMIN_SESSION_DAYS"),
            },
            superadmin: SuperAdminCredentials {
                username: env::var("SUPERADMIN_USERNAME")
                    .unwrap_or_else(|_| "superadmin".to_string()),
                password: env::var("SUPERADMIN_PASSWORD")
                    .unwrap_or_else(|_| DEFAULT_SUPERADMIN_PASSWORD.to_string()),
            },
            upstream: UpstreamConfig {
                api_base: env::var("API_BASE").ok().filter(|v| !v.is_empty()),
            },
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self.environment, Environment::Production)
    }

    /// Refuse to start in production while any insecure default is live.
    /// Development keeps the defaults so `cargo run` works out of the box.
    pub fn validate(&self) -> Result<(), String> {
        if !self.is_production() {
            return Ok(());
        }
        if self.session.admin_secret == DEFAULT_ADMIN_SECRET {
            return Err("ADMIN_SECRET is still the development default".to_string());
        }
        if self.session.superadmin_secret == DEFAULT_SUPERADMIN_SECRET {
            return Err("SUPERADMIN_SECRET is still the development default".to_string());
        }
        if self.superadmin.password == DEFAULT_SUPERADMIN_PASSWORD {
            return Err("SUPERADMIN_PASSWORD is still the development default".to_string());
        }
        Ok(())
    }
}

fn env_days(var: &str) -> u64 {
    env::var(var)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_SESSION_DAYS)
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
