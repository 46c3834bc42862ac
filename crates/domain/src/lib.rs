//! # tickets-domain
//!
//! Pure domain model for the ticket tracker.
//!
//! ## Responsibilities
//! - Foundational types: the typed ticket identifier and error conventions
//! - Define the **Ticket** (one support/issue record) and its **Status**
//! - Resolve a status to its human-readable label
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod ticket;
