//! HTTP API Handlers and Routes
//!
//! This module provides the REST API layer for MyBestApp, built on the Axum
//! web framework.
//!
//! # Module Structure
//!
//! - [`api::handlers`](crate::api::handlers) - Request handlers for each endpoint
//! - [`api::routes`](crate::api::routes) - Route definitions and router configuration
//!
//! # API Endpoints
//!
//! All endpoints live under `/api/MyBestApp`:
//!
//! - `GET /api/MyBestApp/Ping` - Liveness probe, returns `Pong`
//! - `GET /api/MyBestApp/QueryExample?text=...` - Echo a query parameter
//! - `POST /api/MyBestApp/BodyExample` - Repeat the body text `amount` times
//! - `GET /api/MyBestApp/RouteExample/{text}` - Echo a route segment
//! - `POST /api/MyBestApp/FileUploadExample` - Echo uploaded file metadata
//! - `POST /api/MyBestApp/ActionResultExample` - Validated body repeat
//! - `POST /api/MyBestApp/IActionResultExample2` - Validated body repeat
//!
//! # OpenAPI Documentation
//!
//! The OpenAPI document is served at `/api-docs/openapi.json`. When the
//! `swagger-ui` feature is enabled, interactive API documentation is
//! available at `/swagger-ui`.

/// Request and response handlers for all API endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;

use utoipa::OpenApi;

/// OpenAPI document covering every endpoint.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "MyBestApp API",
        version = "v1",
        description = "Application created with love"
    ),
    paths(
        handlers::echo::ping,
        handlers::echo::query_example,
        handlers::repeat::body_example,
        handlers::echo::route_example,
        handlers::upload::file_upload_example,
        handlers::repeat::action_result_example,
        handlers::repeat::action_result_example2,
    ),
    components(schemas(crate::types::EchoRequest, crate::types::UploadForm)),
    tags(
        (name = "mybestapp", description = "Echo and repetition endpoints")
    )
)]
pub struct ApiDoc;
