//! # tickets-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for programmatic access (`/api/tickets`, `/api/tickets/{id}`)
//! - Serve **server-side-rendered HTML pages** (`/tickets`, `/tickets/{id}`)
//!   compiled with askama
//! - Serve the stylesheet and other static assets under `/static`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses (JSON or HTML)
//!
//! ## Not-found presentation
//! A missing ticket is a 404 on both route families, but the body differs:
//! HTML routes render the `404.html` page while API routes answer with
//! `{"error": "Ticket not found"}`. Unmatched paths render the HTML page.
//!
//! ## Dependency rule
//! Depends on `tickets-app` (for port traits and services) and `tickets-domain`
//! (for domain types used in response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;

/// Static asset directory shipped with this crate.
pub const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");
