//! Dashboard home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the dashboard home page.
///
/// Renders `templates/dashboard.html` with the overview cards and the
/// recent-links table. The numbers are placeholder content; live figures
/// come from the backend's analytics, which this front-end does not
/// aggregate.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {}

/// Renders the dashboard home page.
///
/// # Endpoint
///
/// `GET /dashboard`
pub async fn dashboard_handler() -> impl IntoResponse {
    DashboardTemplate {}
}
