//! End-to-end smoke tests for the full ticketsd HTTP stack.
//!
//! Each test wires the real service and the real axum router over an
//! in-memory repository and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound and no database
//! is needed. The `PostgreSQL` adapter has its own container-backed tests.

use std::collections::BTreeMap;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use tickets_adapter_http_axum::state::AppState;
use tickets_adapter_http_axum::{DEFAULT_STATIC_DIR, router};
use tickets_app::ports::TicketRepository;
use tickets_app::services::ticket_service::TicketService;
use tickets_domain::error::TicketsError;
use tickets_domain::id::TicketId;
use tickets_domain::ticket::{Ticket, TicketStatus};
use tower::ServiceExt;

/// Fixed set of tickets keyed by id.
struct FixtureRepo(BTreeMap<TicketId, Ticket>);

impl TicketRepository for FixtureRepo {
    async fn get_by_id(&self, id: TicketId) -> Result<Option<Ticket>, TicketsError> {
        Ok(self.0.get(&id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Ticket>, TicketsError> {
        Ok(self.0.values().cloned().collect())
    }
}

fn ticket(id: i32, name: &str, status: TicketStatus, url: Option<&str>) -> Ticket {
    let mut builder = Ticket::builder().id(id).name(name).status(status);
    if let Some(url) = url {
        builder = builder.url(url);
    }
    builder.build().unwrap()
}

fn fixtures() -> Vec<Ticket> {
    vec![
        ticket(
            3,
            "Checkout button misaligned",
            TicketStatus::Reported,
            None,
        ),
        ticket(
            7,
            "Password reset email never arrives",
            TicketStatus::InProgress,
            Some("https://tracker.example.com/7"),
        ),
        ticket(
            9,
            "Dark mode contrast",
            TicketStatus::Resolved,
            Some("https://tracker.example.com/9"),
        ),
    ]
}

fn app_with(tickets: Vec<Ticket>) -> axum::Router {
    let repo = FixtureRepo(tickets.into_iter().map(|t| (t.id, t)).collect());
    let state = AppState::new(TicketService::new(repo));
    router::build(state, DEFAULT_STATIC_DIR)
}

fn app() -> axum::Router {
    app_with(fixtures())
}

async fn get(app: axum::Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_string(resp: Response) -> String {
    String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap()
}

async fn body_json(resp: Response) -> serde_json::Value {
    serde_json::from_str(&body_string(resp).await).unwrap()
}

// ---------------------------------------------------------------------------
// Redirect
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_redirect_root_to_tickets_with_data() {
    let resp = get(app(), "/").await;
    assert!(resp.status().is_redirection());
    assert_eq!(resp.headers()[header::LOCATION], "/tickets");
}

#[tokio::test]
async fn should_redirect_root_to_tickets_without_data() {
    let resp = get(app_with(vec![]), "/").await;
    assert!(resp.status().is_redirection());
    assert_eq!(resp.headers()[header::LOCATION], "/tickets");
}

// ---------------------------------------------------------------------------
// HTML pages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_render_every_ticket_on_list_page() {
    let resp = get(app(), "/tickets").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;

    assert!(body.contains("Checkout button misaligned"));
    assert!(body.contains("Password reset email never arrives"));
    assert!(body.contains("Dark mode contrast"));
    assert!(body.contains("Reported"));
    assert!(body.contains("In Progress"));
    assert!(body.contains("Resolved"));
    assert!(body.contains(r#"href="/tickets/7""#));
}

#[tokio::test]
async fn should_render_list_page_with_zero_rows_when_empty() {
    let resp = get(app_with(vec![]), "/tickets").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("<table"));
    assert!(!body.contains("Details"));
}

#[tokio::test]
async fn should_render_detail_page_with_name_label_and_url() {
    let resp = get(app(), "/tickets/7").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;

    assert!(body.contains("Ticket - Password reset email never arrives"));
    assert!(body.contains("In Progress"));
    assert!(body.contains("tracker.example.com"));
}

#[tokio::test]
async fn should_render_html_not_found_page_for_missing_ticket() {
    let resp = get(app(), "/tickets/999").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_string(resp).await;
    assert!(body.contains("Page Not Found"));
    assert!(!body.contains("\"error\""));
}

// ---------------------------------------------------------------------------
// JSON API
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ticket_json_with_status_label() {
    let resp = get(app(), "/api/tickets/7").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({
            "id": 7,
            "name": "Password reset email never arrives",
            "status": "In Progress",
            "url": "https://tracker.example.com/7",
        })
    );
}

#[tokio::test]
async fn should_return_null_url_in_json_when_absent() {
    let resp = get(app(), "/api/tickets/3").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["status"], "Reported");
    assert!(json["url"].is_null());
}

#[tokio::test]
async fn should_return_json_error_for_missing_ticket() {
    let resp = get(app(), "/api/tickets/999").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({"error": "Ticket not found"})
    );
}

#[tokio::test]
async fn should_list_every_ticket_as_json() {
    let resp = get(app(), "/api/tickets").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    let items = json.as_array().unwrap();

    assert_eq!(items.len(), 3);
    let labels: Vec<&str> = items
        .iter()
        .map(|item| item["status"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["Reported", "In Progress", "Resolved"]);
}

#[tokio::test]
async fn should_return_empty_json_array_when_no_tickets() {
    let resp = get(app_with(vec![]), "/api/tickets").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, serde_json::json!([]));
}
