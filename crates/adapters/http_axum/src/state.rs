//! Shared application state for axum handlers.

use std::sync::Arc;

use tickets_app::ports::TicketRepository;
use tickets_app::services::ticket_service::TicketService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Ticket lookup service.
    pub ticket_service: Arc<TicketService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            ticket_service: Arc::clone(&self.ticket_service),
        }
    }
}

impl<R> AppState<R>
where
    R: TicketRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(ticket_service: TicketService<R>) -> Self {
        Self {
            ticket_service: Arc::new(ticket_service),
        }
    }
}
