//! Analytics page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the analytics page.
///
/// Renders `templates/analytics.html`: click totals, top links, and a
/// traffic breakdown, all placeholder content. Aggregation happens in the
/// backend, outside this repository.
#[derive(Template, WebTemplate)]
#[template(path = "analytics.html")]
struct AnalyticsTemplate {}

/// Renders the analytics page.
///
/// # Endpoint
///
/// `GET /dashboard/analytics`
pub async fn analytics_handler() -> impl IntoResponse {
    AnalyticsTemplate {}
}
