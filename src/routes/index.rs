use axum::response::Html;

/// Landing page with forms for the API
pub async fn landing_page() -> Html<&'static str> {
    Html(include_str!("../../views/index.html"))
}
