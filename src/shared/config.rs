use anyhow::{bail, Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Public base URL without trailing slash, used for sitemap and robots output.
    pub site_url: String,
    pub admin_api_token: String,
    pub run_migrations: bool,
    pub db_max_connections: u32,
}

impl AppConfig {
    pub const MIN_ADMIN_TOKEN_LEN: usize = 16;

    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and then reads the process environment.
    pub fn load() -> Result<Self> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", rust_env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = non_empty("DATABASE_URL").context("DATABASE_URL is not set")?;
        let host = non_empty("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match non_empty("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT value: {raw}"))?,
            None => 8080,
        };

        let site_url = non_empty("SITE_URL")
            .unwrap_or_else(|| format!("http://localhost:{port}"))
            .trim()
            .trim_end_matches('/')
            .to_string();

        let admin_api_token =
            non_empty("ADMIN_API_TOKEN").context("ADMIN_API_TOKEN is not set")?;
        if admin_api_token.len() < Self::MIN_ADMIN_TOKEN_LEN {
            bail!(
                "ADMIN_API_TOKEN must be at least {} characters long",
                Self::MIN_ADMIN_TOKEN_LEN
            );
        }

        let run_migrations = non_empty("RUN_MIGRATIONS")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let db_max_connections = match non_empty("DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("Invalid DB_MAX_CONNECTIONS value: {raw}"))?,
            None => 10,
        };

        Ok(Self {
            database_url,
            host,
            port,
            site_url,
            admin_api_token,
            run_migrations,
            db_max_connections,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
