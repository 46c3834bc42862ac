//! # tickets-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters must implement
//!   (driven/outbound port): `TicketRepository` — read-only ticket queries
//! - Define the **driving/inbound port** as a use-case struct:
//!   `TicketService` — list and get tickets, turning a missing row into an
//!   explicit `NotFound`
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `tickets-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
