use axum::response::Html;

/// Static operator console. Drives the scan endpoint client-side; aborting
/// in the browser does not cancel an already-issued backend call.
pub async fn console_page() -> Html<&'static str> {
    Html(include_str!("../../../static/console.html"))
}
