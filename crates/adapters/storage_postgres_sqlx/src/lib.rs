//! # tickets-adapter-storage-postgres-sqlx
//!
//! `PostgreSQL` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `tickets-app::ports::storage`
//! - Manage the `PostgreSQL` connection pool lifecycle
//! - Create the `tickets` table (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `tickets-app` (for port traits) and `tickets-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod pool;
pub mod ticket_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use ticket_repo::PostgresTicketRepository;
