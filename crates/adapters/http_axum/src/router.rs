//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tickets_app::ports::TicketRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges API routes under `/api`, HTML pages at `/`, and static assets
/// from `static_dir` under `/static`. Unmatched paths render the HTML 404
/// page. Includes a [`TraceLayer`] that logs each HTTP request/response at
/// the `DEBUG` level using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>, static_dir: impl AsRef<Path>) -> Router
where
    R: TicketRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .merge(crate::dashboard::routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(crate::dashboard::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
