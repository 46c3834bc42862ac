//! Server-side rendered HTML pages.

#[allow(clippy::missing_errors_doc)]
pub mod tickets;

use askama::Template;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;

use tickets_app::ports::TicketRepository;
use tickets_domain::error::TicketsError;

use crate::state::AppState;

/// Build the sub-router for SSR HTML pages.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: TicketRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/tickets", get(tickets::list::<R>))
        .route("/tickets/{id}", get(tickets::detail::<R>))
}

/// `GET /` — always lands on the ticket list.
pub async fn index() -> Redirect {
    Redirect::to("/tickets")
}

/// Fallback for any unmatched path.
pub async fn not_found() -> DashboardError {
    DashboardError::NotFound
}

/// The 404 page.
#[derive(Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

/// Generic error page for responses other than 404.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    status: u16,
    message: String,
}

/// Maps [`TicketsError`] to an HTML error page.
///
/// Pages only read, so a validation failure means a stored row is malformed
/// and is reported as a server error.
#[derive(Debug)]
pub enum DashboardError {
    NotFound,
    Internal,
}

impl From<TicketsError> for DashboardError {
    fn from(err: TicketsError) -> Self {
        match err {
            TicketsError::NotFound(_) => Self::NotFound,
            TicketsError::Validation(err) => {
                tracing::error!(error = %err, "invalid stored ticket");
                Self::Internal
            }
            TicketsError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                Self::Internal
            }
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => {
                (StatusCode::NOT_FOUND, Html(NotFoundTemplate.to_string())).into_response()
            }
            Self::Internal => error_page(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            ),
        }
    }
}

fn error_page(status: StatusCode, message: String) -> Response {
    let page = ErrorTemplate {
        status: status.as_u16(),
        message,
    };
    (status, Html(page.to_string())).into_response()
}
