//! Echo handlers: ping, query-string echo, route-parameter echo.

use axum::extract::{Path, Query};
use serde::Deserialize;

/// Query parameters for the query echo endpoint.
#[derive(Debug, Deserialize)]
pub struct EchoParams {
    /// Text to echo back.
    pub text: String,
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/api/MyBestApp/Ping",
    responses(
        (status = 200, description = "Service is up", body = String)
    ),
    tag = "mybestapp"
)]
pub async fn ping() -> &'static str {
    "Pong"
}

/// Echo the `text` query parameter.
#[utoipa::path(
    get,
    path = "/api/MyBestApp/QueryExample",
    params(
        ("text" = String, Query, description = "Text to echo")
    ),
    responses(
        (status = 200, description = "Formatted echo of the query text", body = String),
        (status = 400, description = "Missing text parameter")
    ),
    tag = "mybestapp"
)]
pub async fn query_example(Query(params): Query<EchoParams>) -> String {
    format!("Your text form Query -> {}", params.text)
}

/// Echo the `text` route segment.
///
/// The response template matches the query endpoint's verbatim, "form Query"
/// wording included; clients depend on the exact string.
#[utoipa::path(
    get,
    path = "/api/MyBestApp/RouteExample/{text}",
    params(
        ("text" = String, Path, description = "Text to echo")
    ),
    responses(
        (status = 200, description = "Formatted echo of the route text", body = String)
    ),
    tag = "mybestapp"
)]
pub async fn route_example(Path(text): Path<String>) -> String {
    format!("Your text form Query -> {}", text)
}
