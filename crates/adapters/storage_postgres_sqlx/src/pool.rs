//! `PostgreSQL` connection pool setup and migration runner.

use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use crate::error::StorageError;

/// Configuration for the `PostgreSQL` storage adapter.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Database name.
    pub database: String,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
}

impl Config {
    /// Connection options for this configuration.
    ///
    /// Credentials are passed as discrete options, never spliced into a URL,
    /// so passwords may contain any character.
    #[must_use]
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.database)
    }

    /// Build a [`Database`] from this configuration.
    ///
    /// Creates the connection pool and runs all pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection or migrations fail.
    pub async fn build(self) -> Result<Database, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(self.max_connections)
            .connect_with(self.connect_options())
            .await?;

        Database::initialize(pool).await
    }
}

/// Holds the `PostgreSQL` connection pool and provides access to it.
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Run migrations against an already connected pool.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the migrations fail.
    pub async fn initialize(pool: PgPool) -> Result<Self, StorageError> {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::debug!("database migrations applied");

        Ok(Self { pool })
    }

    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
