//! Ticket status — the lifecycle stage of a ticket.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Lifecycle stage of a ticket.
///
/// Stored as an integer code, presented as a label. Serde uses the label so
/// API consumers never see raw codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    Reported,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "In Review")]
    InReview,
    Resolved,
}

impl TicketStatus {
    /// Every status, ordered by code.
    pub const ALL: [Self; 4] = [
        Self::Reported,
        Self::InProgress,
        Self::InReview,
        Self::Resolved,
    ];

    /// Integer code persisted in the `status` column.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Reported => 0,
            Self::InProgress => 1,
            Self::InReview => 2,
            Self::Resolved => 3,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Reported => "Reported",
            Self::InProgress => "In Progress",
            Self::InReview => "In Review",
            Self::Resolved => "Resolved",
        }
    }
}

impl TryFrom<i32> for TicketStatus {
    type Error = ValidationError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Reported),
            1 => Ok(Self::InProgress),
            2 => Ok(Self::InReview),
            3 => Ok(Self::Resolved),
            other => Err(ValidationError::UnknownStatus(other)),
        }
    }
}

impl From<TicketStatus> for i32 {
    fn from(status: TicketStatus) -> Self {
        status.code()
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
