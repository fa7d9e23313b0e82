//! Page handlers for serving HTML templates

use axum::response::Html;

/// Dashboard page: the static shell whose client-side wiring drives the
/// render endpoint
pub async fn dashboard() -> Html<&'static str> {
    Html(include_str!("../../templates/dashboard.html"))
}
