use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ApplicationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    /// Takes precedence over the individual connection fields when set.
    pub url: Option<String>,
    pub max_connections: u32,
    pub min_connections: u32,
    pub max_lifetime: Duration,
    pub connect_retries: u32,
    pub retry_delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server_addr: String,
    pub request_timeout: Duration,
    pub log_format: LogFormat,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Reads the process environment, after loading `.env` if one exists.
    pub fn load() -> Result<Self, ApplicationError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApplicationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database = DatabaseConfig {
            host: text("DB_HOST", "localhost"),
            port: parsed(&lookup, "DB_PORT", 5432)?,
            user: text("DB_USER", "postgres"),
            password: text("DB_PASSWORD", "postgres"),
            name: text("DB_NAME", "userdb"),
            url: lookup("DATABASE_URL"),
            max_connections: parsed(&lookup, "DB_MAX_CONNECTIONS", 25)?,
            min_connections: parsed(&lookup, "DB_MIN_CONNECTIONS", 0)?,
            max_lifetime: Duration::from_secs(parsed(&lookup, "DB_MAX_LIFETIME_SECS", 300)?),
            connect_retries: parsed(&lookup, "DB_CONNECT_RETRIES", 5)?,
            retry_delay: Duration::from_secs(parsed(&lookup, "DB_RETRY_DELAY_SECS", 2)?),
        };

        let log_format = match text("LOG_FORMAT", "compact").to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Compact,
        };

        Ok(Self {
            server_addr: text("SERVER_ADDR", "0.0.0.0:3000"),
            request_timeout: Duration::from_secs(parsed(&lookup, "REQUEST_TIMEOUT_SECS", 30)?),
            log_format,
            database,
        })
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("max_lifetime", &self.max_lifetime)
            .field("connect_retries", &self.connect_retries)
            .field("retry_delay", &self.retry_delay)
            .finish()
    }
}

impl DatabaseConfig {
    pub fn db_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.user, self.password, self.host, self.port, self.name
            ),
        }
    }
}

fn parsed<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ApplicationError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e| {
            ApplicationError::ConfigurationError(format!("{key}={raw:?}: {e}"))
        }),
    }
}
