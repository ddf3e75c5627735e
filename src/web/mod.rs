//! # Web Layer
//!
//! The axum surface of the assistant. Thin by design: routing, body
//! parsing, CORS, and the error boundary live here; every decision is
//! made in [`crate::assistant`].
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │ Axum Router (this module)                        │
//! │  ├── POST /api/tcs-assistant → JSON {reply,…}    │
//! │  ├── GET  /                  → demo page (maud)  │
//! │  └── GET  /health            → JSON readiness    │
//! ├──────────────────────────────────────────────────┤
//! │ CorsLayer (permissive — storefront embeds call   │
//! │ the endpoint cross-origin)                       │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`state`] | Shared state (`AppState`) |
//! | [`handlers`] | Axum handlers for each route |
//! | [`templates`] | Maud demo page |

pub mod handlers;
pub mod state;
pub mod templates;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use state::AppState;

/// Creates the axum router with all application routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // ── API ───────────────────────────────────────────────
        .route("/api/tcs-assistant", post(handlers::assistant))
        // ── Presentational ────────────────────────────────────
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
