//! Storage port — repository trait for ticket persistence.
//!
//! Tickets are written by other systems, so the port is read-only.

use std::future::Future;

use tickets_domain::error::TicketsError;
use tickets_domain::id::TicketId;
use tickets_domain::ticket::Ticket;

/// Repository for querying [`Ticket`]s.
pub trait TicketRepository {
    /// Get a ticket by its store-assigned key.
    fn get_by_id(
        &self,
        id: TicketId,
    ) -> impl Future<Output = Result<Option<Ticket>, TicketsError>> + Send;

    /// Get every ticket, in natural store order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Ticket>, TicketsError>> + Send;
}
