//! # HTTP Handlers
//!
//! Each public function here is an axum handler mapped to a route in
//! [`super::create_router()`].
//!
//! | Handler | Method | Returns | Purpose |
//! |---------|--------|---------|---------|
//! | `assistant` | POST | JSON | The product-search endpoint |
//! | `index` | GET | HTML | Demo page (maud) |
//! | `health` | GET | JSON | Readiness probe |
//!
//! ## Error Boundary
//!
//! `assistant` is the only fallible route. Every failure — missing
//! catalog, malformed catalog, anything — is logged server-side with
//! its real cause and collapsed into one fixed-shape 500 body: the
//! apology reply with an empty product list. Nothing internal ever
//! reaches the caller.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;

use super::state::AppState;
use super::templates;
use crate::assistant::AssistantResponse;

/// Request body of `POST /api/tcs-assistant`. The message is optional;
/// an absent message behaves exactly like an empty one.
#[derive(serde::Deserialize)]
pub struct AssistantRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `GET /health`.
#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// POST `/api/tcs-assistant` — the conversational search endpoint.
///
/// Runs the full cycle (catalog load → intent → score → reply) and
/// answers `{ "reply": ..., "products": [...] }` with at most three
/// products. On any internal failure: 500 with the fixed apology.
pub async fn assistant(
    State(state): State<AppState>,
    Json(req): Json<AssistantRequest>,
) -> (StatusCode, Json<AssistantResponse>) {
    let message = req.message.unwrap_or_default();

    match state.assistant.respond(&message) {
        Ok(resp) => (StatusCode::OK, Json(resp)),
        Err(e) => {
            tracing::error!(error = %e, "assistant request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AssistantResponse::apology()),
            )
        }
    }
}

/// GET `/` — demo page for poking the API from a browser.
pub async fn index() -> Html<String> {
    Html(templates::demo_page().into_string())
}

/// GET `/health` — readiness probe, linked from the demo page.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
