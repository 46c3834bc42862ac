//! `PostgreSQL` implementation of [`TicketRepository`].

use std::future::Future;

use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Row};

use tickets_app::ports::TicketRepository;
use tickets_domain::error::TicketsError;
use tickets_domain::id::TicketId;
use tickets_domain::ticket::{Ticket, TicketStatus};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Ticket`].
struct Wrapper(Ticket);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Ticket> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, PgRow> for Wrapper {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let id: i32 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let status: i32 = row.try_get("status")?;
        let url: Option<String> = row.try_get("url")?;

        // An unknown code fails the whole query rather than defaulting.
        let status =
            TicketStatus::try_from(status).map_err(|err| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(err),
            })?;

        let ticket = Ticket {
            id: TicketId::new(id),
            name,
            status,
            url,
        };
        ticket
            .validate()
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(ticket))
    }
}

const SELECT_BY_ID: &str = "SELECT id, name, status, url FROM tickets WHERE id = $1";
const SELECT_ALL: &str = "SELECT id, name, status, url FROM tickets";

/// `PostgreSQL`-backed ticket repository.
pub struct PostgresTicketRepository {
    pool: PgPool,
}

impl PostgresTicketRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TicketRepository for PostgresTicketRepository {
    fn get_by_id(
        &self,
        id: TicketId,
    ) -> impl Future<Output = Result<Option<Ticket>, TicketsError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Ticket>, TicketsError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
