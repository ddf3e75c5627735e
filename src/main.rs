//! # TCS Marketplace Assistant
//!
//! A minimal conversational product-search service for the TCS
//! marketplace. One endpoint takes a free-text message, infers a
//! coarse intent (product search vs. catering lead) with regex
//! heuristics, scores the product catalog against it, and answers
//! with up to three picks plus a templated reply.
//!
//! ## Request Flow
//!
//! ```text
//! POST /api/tcs-assistant { "message": "US-made sauces under $25" }
//!   ├── Read catalog.json (fresh, every request)
//!   ├── nlu: extract intent (regex heuristics)
//!   ├── Catering lead? → canned booking prompt
//!   ├── scoring: weighted sum per product, stable rank, top 3
//!   └── assistant: reply string + free-shipping note
//! → { "reply": "...", "products": [ …up to 3 ] }
//! ```
//!
//! ## Running
//!
//! ```bash
//! # defaults: port 3000, info logs, ./catalog.json
//! cargo run
//!
//! # detailed logs, custom port
//! RUST_LOG=debug PORT=8080 cargo run
//! ```
//!
//! Requests are independent and read-only; there is no shared mutable
//! state and no cache, so editing `catalog.json` takes effect on the
//! next request.

/// `assistant` module — orchestration and reply templating.
mod assistant;

/// `catalog` module — product/shipping data model and per-request load.
mod catalog;

/// `nlu` module — regex-based intent extraction.
mod nlu;

/// `scoring` module — weighted-sum scoring, ranking, selection.
mod scoring;

/// `web` module — axum router, handlers, demo page.
mod web;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::assistant::Assistant;
use crate::web::state::AppState;

/// Catalog file path, relative to the process working directory.
const CATALOG_PATH: &str = "catalog.json";

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG controls verbosity; default info.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🔥 TCS Marketplace Assistant — Starting...");

    let assistant = Assistant::new(PathBuf::from(CATALOG_PATH));
    let state = AppState {
        assistant: Arc::new(assistant),
    };

    let app = web::create_router(state);

    // PORT from the environment, default 3000.
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("🚀 TCS Assistant running at http://localhost:{port}");

    axum::serve(listener, app).await?;

    Ok(())
}
