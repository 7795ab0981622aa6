//! Public landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the marketing landing page.
///
/// Renders `templates/landing.html` with the product pitch and links into
/// the auth forms. All statistics shown are placeholder content.
#[derive(Template, WebTemplate)]
#[template(path = "landing.html")]
struct LandingTemplate {}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn landing_handler() -> impl IntoResponse {
    LandingTemplate {}
}
