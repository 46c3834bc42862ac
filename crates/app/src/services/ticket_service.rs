//! Ticket service — read-only use-cases for tickets.

use tickets_domain::error::{NotFoundError, TicketsError};
use tickets_domain::id::TicketId;
use tickets_domain::ticket::Ticket;

use crate::ports::TicketRepository;

/// Application service for ticket lookups.
pub struct TicketService<R> {
    repo: R,
}

impl<R: TicketRepository> TicketService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Look up a ticket by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`TicketsError::NotFound`] when no ticket with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_ticket(&self, id: TicketId) -> Result<Ticket, TicketsError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            tracing::debug!(%id, "ticket not found");
            NotFoundError {
                entity: "Ticket",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all tickets.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_tickets(&self) -> Result<Vec<Ticket>, TicketsError> {
        self.repo.get_all().await
    }
}
