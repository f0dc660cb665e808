//! Route definitions and application assembly.

use crate::api::ApiDoc;
use crate::utils::config::CorsConfig;
use crate::AppState;
#[cfg(not(feature = "swagger-ui"))]
use axum::Json;
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// API routes, relative to the `/api/MyBestApp` prefix.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/Ping", get(crate::api::handlers::echo::ping))
        .route(
            "/QueryExample",
            get(crate::api::handlers::echo::query_example),
        )
        .route(
            "/BodyExample",
            post(crate::api::handlers::repeat::body_example),
        )
        .route(
            "/RouteExample/{text}",
            get(crate::api::handlers::echo::route_example),
        )
        .route(
            "/FileUploadExample",
            post(crate::api::handlers::upload::file_upload_example),
        )
        .route(
            "/ActionResultExample",
            post(crate::api::handlers::repeat::action_result_example),
        )
        .route(
            "/IActionResultExample2",
            post(crate::api::handlers::repeat::action_result_example2),
        )
}

/// Assemble the full application: API routes nested under `/api/MyBestApp`,
/// the OpenAPI document, optional Swagger UI, CORS, and request tracing.
pub fn build_app(state: AppState) -> Router {
    let app = Router::new().nest("/api/MyBestApp", create_router());

    // The Swagger UI serves the OpenAPI document itself; without it the raw
    // document route is registered directly.
    #[cfg(feature = "swagger-ui")]
    let app = app.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
    #[cfg(not(feature = "swagger-ui"))]
    let app = app.route(
        "/api-docs/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }),
    );

    let app = match cors_layer(&state.config.cors) {
        Some(cors) => app.layer(cors),
        None => app,
    };

    app.layer(TraceLayer::new_for_http()).with_state(state)
}

/// CORS layer from the configured allow-list.
///
/// Returns `None` when no valid origins are configured, leaving the API
/// same-origin only.
pub fn cors_layer(config: &CorsConfig) -> Option<CorsLayer> {
    if config.allowed_origins.is_empty() {
        return None;
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Skipping invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return None;
    }

    // Wildcard methods/headers cannot be combined with credentials, so the
    // methods are listed explicitly and headers mirror the request.
    let mut layer = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(AllowHeaders::mirror_request());

    if config.allow_credentials {
        layer = layer.allow_credentials(true);
    }

    Some(layer)
}
