//! Ticket — one support/issue record.
//!
//! Tickets are created and mutated outside this system. The application only
//! ever holds request-scoped copies read from the store.

mod status;

pub use status::TicketStatus;

use serde::{Deserialize, Serialize};

use crate::error::{TicketsError, ValidationError};
use crate::id::TicketId;

/// A support/issue record.
///
/// Serializes as `{"id", "name", "status", "url"}` with `status` rendered as
/// its label (see [`TicketStatus`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub name: String,
    pub status: TicketStatus,
    pub url: Option<String>,
}

impl Ticket {
    /// Create a builder for constructing a [`Ticket`].
    #[must_use]
    pub fn builder() -> TicketBuilder {
        TicketBuilder::default()
    }

    /// Label of this ticket's status.
    #[must_use]
    pub fn status_string(&self) -> &'static str {
        self.status.label()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`TicketsError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), TicketsError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Ticket`].
#[derive(Debug, Default)]
pub struct TicketBuilder {
    id: Option<TicketId>,
    name: Option<String>,
    status: Option<TicketStatus>,
    url: Option<String>,
}

impl TicketBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<TicketId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: TicketStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Consume the builder, validate, and return a [`Ticket`].
    ///
    /// A missing id defaults to `0` and a missing status to
    /// [`TicketStatus::Reported`].
    ///
    /// # Errors
    ///
    /// Returns [`TicketsError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<Ticket, TicketsError> {
        let ticket = Ticket {
            id: self.id.unwrap_or(TicketId::new(0)),
            name: self.name.unwrap_or_default(),
            status: self.status.unwrap_or(TicketStatus::Reported),
            url: self.url,
        };
        ticket.validate()?;
        Ok(ticket)
    }
}
