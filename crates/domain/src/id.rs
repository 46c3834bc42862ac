//! Typed identifier for tickets.
//!
//! Ticket ids are assigned by the relational store (an SQL `SERIAL` column),
//! so the newtype wraps a plain `i32` rather than generating values itself.
//! Textual ids accept ASCII digits only: no sign, no whitespace.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when text is not a valid [`TicketId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseTicketIdError {
    #[error("ticket id must be a non-empty run of ascii digits")]
    NotDigits,

    #[error("ticket id out of range")]
    OutOfRange(#[from] ParseIntError),
}

/// Unique identifier for a [`Ticket`](crate::ticket::Ticket).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(i32);

impl TicketId {
    /// Wrap a store-assigned key.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Access the inner key.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for TicketId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TicketId {
    type Err = ParseTicketIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseTicketIdError::NotDigits);
        }
        Ok(Self(s.parse()?))
    }
}
