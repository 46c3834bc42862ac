//! JSON REST handlers for tickets.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use tickets_app::ports::TicketRepository;
use tickets_domain::id::TicketId;
use tickets_domain::ticket::Ticket;

use crate::dashboard::DashboardError;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Ticket>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Ticket>),
    /// The id segment is not an integer, so no route matched: answer like
    /// any other unmatched path.
    Unmatched,
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::Unmatched => DashboardError::NotFound.into_response(),
        }
    }
}

/// `GET /api/tickets`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: TicketRepository + Send + Sync + 'static,
{
    let tickets = state.ticket_service.list_tickets().await?;
    Ok(ListResponse::Ok(Json(tickets)))
}

/// `GET /api/tickets/{id}`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: TicketRepository + Send + Sync + 'static,
{
    let Ok(ticket_id) = TicketId::from_str(&id) else {
        return Ok(GetResponse::Unmatched);
    };
    let ticket = state.ticket_service.get_ticket(ticket_id).await?;
    Ok(GetResponse::Ok(Json(ticket)))
}
