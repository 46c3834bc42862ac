//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod tickets;

use axum::Router;
use axum::routing::get;

use tickets_app::ports::TicketRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: TicketRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/tickets", get(tickets::list::<R>))
        .route("/tickets/{id}", get(tickets::get::<R>))
}
