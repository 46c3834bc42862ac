//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `tickets.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::fmt;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
    /// Application secret, reserved for signing session data.
    pub secret_key: String,
    /// Directory served under `/static`.
    pub static_dir: String,
}

/// `PostgreSQL` connection configuration.
#[derive(Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    /// Database name.
    pub name: String,
    pub username: String,
    pub password: String,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `tickets.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("tickets.toml")?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("TICKETS_HOST") {
            self.server.host = val;
        }
        if let Some(port) = lookup("TICKETS_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        // An empty secret counts as unset and keeps the default.
        if let Some(val) = lookup("SECRET_KEY").filter(|val| !val.is_empty()) {
            self.server.secret_key = val;
        }
        if let Some(val) = lookup("TICKETS_STATIC_DIR") {
            self.server.static_dir = val;
        }
        if let Some(val) = lookup("DB_HOST") {
            self.database.host = val;
        }
        if let Some(port) = lookup("DB_PORT").and_then(|val| val.parse().ok()) {
            self.database.port = port;
        }
        if let Some(val) = lookup("DB_NAME") {
            self.database.name = val;
        }
        if let Some(val) = lookup("DB_USERNAME") {
            self.database.username = val;
        }
        if let Some(val) = lookup("DB_PASSWORD") {
            self.database.password = val;
        }
        if let Some(val) = lookup("TICKETS_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.database.port == 0 {
            return Err(ConfigError::Validation(
                "database port must be non-zero".to_string(),
            ));
        }
        if self.database.name.is_empty() {
            return Err(ConfigError::Validation(
                "database name must not be empty".to_string(),
            ));
        }
        if self.server.secret_key.is_empty() {
            return Err(ConfigError::Validation(
                "secret key must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the storage adapter configuration.
    #[must_use]
    pub fn storage(&self) -> tickets_adapter_storage_postgres_sqlx::Config {
        tickets_adapter_storage_postgres_sqlx::Config {
            host: self.database.host.clone(),
            port: self.database.port,
            username: self.database.username.clone(),
            password: self.database.password.clone(),
            database: self.database.name.clone(),
            max_connections: self.database.max_connections,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            secret_key: "dev".to_string(),
            static_dir: tickets_adapter_http_axum::DEFAULT_STATIC_DIR.to_string(),
        }
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("secret_key", &"<redacted>")
            .field("static_dir", &self.static_dir)
            .finish()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            name: "dashboard".to_string(),
            username: "dashboard".to_string(),
            password: "secure_password".to_string(),
            max_connections: 10,
        }
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "ticketsd=info,tickets=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
