//! # NLU — Message Understanding
//!
//! Everything that interprets raw shopper text lives here. The pipeline
//! is deliberately shallow: a handful of regex heuristics, no model, no
//! learned weights.
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`intent`] | Regex heuristics → [`Intent`] |

pub mod intent;

pub use intent::{Intent, IntentExtractor, IntentKind};
