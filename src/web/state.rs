//! # Shared Web State
//!
//! [`AppState`] is cloned into every handler by axum. It carries only
//! immutable pieces — the compiled intent patterns and the catalog
//! path inside the [`Assistant`](crate::assistant::Assistant) — so
//! requests never contend: no locks, no caches, no cross-request
//! mutation. The catalog itself is re-read from disk per request.

use std::sync::Arc;

use crate::assistant::Assistant;

/// Shared application state, passed to all handlers via axum `State`.
#[derive(Clone)]
pub struct AppState {
    /// The request processor. Immutable after startup.
    pub assistant: Arc<Assistant>,
}
