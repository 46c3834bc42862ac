//! Dashboard pages for tickets.

use std::str::FromStr;

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};

use tickets_app::ports::TicketRepository;
use tickets_domain::id::TicketId;
use tickets_domain::ticket::Ticket;

use super::DashboardError;
use crate::state::AppState;

/// Ticket list page template.
#[derive(Template)]
#[template(path = "tickets_index.html")]
pub struct TicketListTemplate {
    tickets: Vec<Ticket>,
}

impl IntoResponse for TicketListTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Ticket detail page template.
#[derive(Template)]
#[template(path = "tickets_show.html")]
pub struct TicketDetailTemplate {
    ticket: Ticket,
}

impl IntoResponse for TicketDetailTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /tickets` — list all tickets.
pub async fn list<R>(
    State(state): State<AppState<R>>,
) -> Result<TicketListTemplate, DashboardError>
where
    R: TicketRepository + Send + Sync + 'static,
{
    let tickets = state.ticket_service.list_tickets().await?;

    Ok(TicketListTemplate { tickets })
}

/// `GET /tickets/{id}` — ticket detail page.
pub async fn detail<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<TicketDetailTemplate, DashboardError>
where
    R: TicketRepository + Send + Sync + 'static,
{
    let ticket_id = TicketId::from_str(&id).map_err(|_| DashboardError::NotFound)?;
    let ticket = state.ticket_service.get_ticket(ticket_id).await?;

    Ok(TicketDetailTemplate { ticket })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickets_domain::ticket::TicketStatus;

    fn ticket(id: i32, url: Option<&str>) -> Ticket {
        let mut builder = Ticket::builder()
            .id(id)
            .name(format!("Ticket <{id}>"))
            .status(TicketStatus::InReview);
        if let Some(url) = url {
            builder = builder.url(url);
        }
        builder.build().unwrap()
    }

    #[test]
    fn should_render_one_row_per_ticket_with_detail_link() {
        let page = TicketListTemplate {
            tickets: vec![ticket(1, Some("https://example.com/1")), ticket(2, None)],
        }
        .to_string();

        assert!(page.contains(r#"href="/tickets/1""#));
        assert!(page.contains(r#"href="/tickets/2""#));
        assert!(page.contains("example.com"));
        assert_eq!(page.matches("In Review").count(), 2);
    }

    #[test]
    fn should_escape_ticket_names() {
        let page = TicketDetailTemplate {
            ticket: ticket(3, None),
        }
        .to_string();

        assert!(page.contains("Ticket &lt;3&gt;"));
        assert!(!page.contains("Ticket <3>"));
    }

    #[test]
    fn should_render_empty_table_when_no_tickets() {
        let page = TicketListTemplate { tickets: vec![] }.to_string();
        assert!(page.contains("<table"));
        assert!(!page.contains("/tickets/"));
    }
}
