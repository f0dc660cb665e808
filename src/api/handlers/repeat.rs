//! Body repetition handlers.
//!
//! Three routes share the same repetition logic. `BodyExample` accepts any
//! amount and clamps negative values to zero; the two ActionResult routes
//! reject negative amounts with a 400.

use crate::types::{AppError, EchoRequest, Result};
use axum::Json;

/// Repeat `text` `amount` times. Negative counts repeat zero times.
fn repeat_text(text: &str, amount: i32) -> String {
    text.repeat(usize::try_from(amount).unwrap_or(0))
}

fn checked_repeat(payload: &EchoRequest) -> Result<String> {
    if payload.amount < 0 {
        // User-visible message, typo and all; clients match on it.
        return Err(AppError::InvalidInput(
            "Amount must be bigger that 0".to_string(),
        ));
    }

    tracing::info!(
        amount = payload.amount,
        text_len = payload.text.len(),
        "Checked body repeat"
    );

    Ok(repeat_text(&payload.text, payload.amount))
}

/// Repeat the request text. Negative amounts are clamped to zero.
#[utoipa::path(
    post,
    path = "/api/MyBestApp/BodyExample",
    request_body = EchoRequest,
    responses(
        (status = 200, description = "Text repeated amount times", body = String)
    ),
    tag = "mybestapp"
)]
pub async fn body_example(Json(payload): Json<EchoRequest>) -> String {
    tracing::info!(
        amount = payload.amount,
        text_len = payload.text.len(),
        "Body repeat"
    );

    repeat_text(&payload.text, payload.amount)
}

/// Repeat the request text, rejecting negative amounts.
#[utoipa::path(
    post,
    path = "/api/MyBestApp/ActionResultExample",
    request_body = EchoRequest,
    responses(
        (status = 200, description = "Text repeated amount times", body = String),
        (status = 400, description = "Amount is negative")
    ),
    tag = "mybestapp"
)]
pub async fn action_result_example(Json(payload): Json<EchoRequest>) -> Result<String> {
    checked_repeat(&payload)
}

/// Second route for the validated repeat, kept for wire compatibility.
///
/// Identical contract to [`action_result_example`].
#[utoipa::path(
    post,
    path = "/api/MyBestApp/IActionResultExample2",
    request_body = EchoRequest,
    responses(
        (status = 200, description = "Text repeated amount times", body = String),
        (status = 400, description = "Amount is negative")
    ),
    tag = "mybestapp"
)]
pub async fn action_result_example2(Json(payload): Json<EchoRequest>) -> Result<String> {
    checked_repeat(&payload)
}
