//! # Assistant Orchestration
//!
//! The [`Assistant`] runs the full per-request cycle:
//!
//! ```text
//! message
//!   ├── Load catalog from disk (fresh every request, no cache)
//!   ├── Extract intent (nlu)
//!   ├── Catering lead? → canned booking prompt, no scoring
//!   ├── Score / rank / select top 3 (scoring)
//!   └── Template the reply (pick count + free-shipping note)
//! ```
//!
//! Each request is independent and read-only; two requests never share
//! mutable state. The only failure surface is the catalog load — all
//! other stages are infallible.

use std::path::PathBuf;

use crate::catalog::{self, Catalog, CatalogError, ShippingPolicy};
use crate::nlu::{Intent, IntentExtractor, IntentKind};
use crate::scoring::{self, ProductPick};

/// Fixed prompt for catering/event inquiries.
const CATERING_PROMPT: &str = "I can help with TCS Promotions bookings. \
     Could you share the date, city, headcount, cuisine vibe, and budget?";

/// Fixed prompt when nothing in the catalog scored.
const NO_MATCH_PROMPT: &str = "I couldn’t find a perfect match yet. \
     Want to see best sellers or tell me your budget and category?";

/// Generic user-facing reply for any internal failure. The real error
/// is logged at the boundary, never shown to the shopper.
pub const APOLOGY: &str = "I’m having trouble right now. Try again in a moment.";

/// The JSON body returned to the shopper.
#[derive(Debug, serde::Serialize)]
pub struct AssistantResponse {
    pub reply: String,
    pub products: Vec<ProductPick>,
}

impl AssistantResponse {
    /// The fixed-shape error response body.
    pub fn apology() -> Self {
        Self {
            reply: APOLOGY.to_string(),
            products: Vec::new(),
        }
    }
}

/// Stateless request processor: compiled intent patterns plus the
/// catalog path. Shared read-only across all requests.
pub struct Assistant {
    intents: IntentExtractor,
    catalog_path: PathBuf,
}

impl Assistant {
    pub fn new(catalog_path: PathBuf) -> Self {
        Self {
            intents: IntentExtractor::new(),
            catalog_path,
        }
    }

    /// Processes one shopper message end to end.
    ///
    /// # Errors
    ///
    /// Only [`CatalogError`] — a missing or malformed catalog file.
    /// No partial results: scoring never runs on bad data.
    pub fn respond(&self, message: &str) -> Result<AssistantResponse, CatalogError> {
        let catalog: Catalog = catalog::load_catalog(&self.catalog_path)?;
        let intent = self.intents.extract(message);

        // Catering leads short-circuit before any scoring.
        if intent.kind == IntentKind::CateringLead {
            return Ok(AssistantResponse {
                reply: pick_reply(&intent, &[], &catalog.shipping),
                products: Vec::new(),
            });
        }

        let picks = scoring::select_top(&catalog.products, message, &intent);
        let reply = pick_reply(&intent, &picks, &catalog.shipping);

        tracing::debug!(
            picks = picks.len(),
            kind = ?intent.kind,
            category = ?intent.category,
            "message scored"
        );

        Ok(AssistantResponse {
            reply,
            products: picks,
        })
    }
}

/// Builds the reply string for one request.
///
/// Catering leads get the fixed booking prompt. Searches with picks
/// get the pick count plus a free-shipping note: how many dollars
/// remain to the threshold (two decimals), or that the threshold is
/// met. Empty picks get the fixed "no match" prompt.
fn pick_reply(intent: &Intent, picks: &[ProductPick], shipping: &ShippingPolicy) -> String {
    if intent.kind == IntentKind::CateringLead {
        return CATERING_PROMPT.to_string();
    }
    if picks.is_empty() {
        return NO_MATCH_PROMPT.to_string();
    }

    let subtotal: f64 = picks.iter().map(|p| p.price).sum();
    let free_left = (shipping.free_threshold - subtotal).max(0.0);
    let free_note = if free_left > 0.0 {
        format!("Add ~${free_left:.2} to unlock free shipping.")
    } else {
        "You're at the free-shipping threshold.".to_string()
    };

    format!("Here are {} good picks. {}", picks.len(), free_note)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    /// Writes `catalog.json` into a temp dir and returns an Assistant
    /// pointed at it.
    fn assistant_with(catalog_json: &str) -> (TempDir, Assistant) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{catalog_json}").unwrap();
        let assistant = Assistant::new(path);
        (dir, assistant)
    }

    const SAUCES_CATALOG: &str = r#"{
        "products": [
            {
                "title": "Texas Heat Sauce",
                "brand": "Sauced HTX",
                "category": "Sauces",
                "tags": ["US Supplier", "small batch"],
                "price": 18.0,
                "in_stock": true,
                "image": "https://cdn.example.com/texas-heat.png",
                "url": "https://shop.example.com/texas-heat"
            },
            {
                "title": "Collagen Glow Serum",
                "brand": "TCS Beauty",
                "category": "Beauty & Wellness",
                "tags": [],
                "price": 32.0,
                "in_stock": true,
                "image": "https://cdn.example.com/glow.png",
                "url": "https://shop.example.com/glow"
            }
        ],
        "shipping": { "free_threshold": 49 }
    }"#;

    // ─── catering short-circuit ────────────────────────────────

    #[test]
    fn catering_message_gets_prompt_and_no_products() {
        let (_dir, assistant) = assistant_with(SAUCES_CATALOG);
        for msg in ["can you cater our wedding?", "party of 30", "booking for an event"] {
            let resp = assistant.respond(msg).unwrap();
            assert_eq!(resp.reply, CATERING_PROMPT, "msg: {msg}");
            assert!(resp.products.is_empty(), "msg: {msg}");
        }
    }

    // ─── product search ────────────────────────────────────────

    #[test]
    fn us_made_sauces_under_25_finds_the_sauce() {
        let (_dir, assistant) = assistant_with(SAUCES_CATALOG);
        let resp = assistant.respond("show me US-made sauces under $25").unwrap();
        assert_eq!(resp.products[0].title, "Texas Heat Sauce");
        assert!(resp.reply.starts_with("Here are"));
    }

    #[test]
    fn empty_catalog_yields_no_match_prompt() {
        let (_dir, assistant) = assistant_with(r#"{ "products": [] }"#);
        let resp = assistant.respond("hot sauce").unwrap();
        assert_eq!(resp.reply, NO_MATCH_PROMPT);
        assert!(resp.products.is_empty());
    }

    // ─── free-shipping note ────────────────────────────────────

    #[test]
    fn below_threshold_reply_names_remaining_dollars() {
        // Single $30 pick against the default $49 threshold.
        let (_dir, assistant) = assistant_with(
            r#"{
                "products": [
                    { "title": "Pit Sauce", "category": "Sauces", "price": 30.0, "in_stock": true }
                ],
                "shipping": { "free_threshold": 49 }
            }"#,
        );
        let resp = assistant.respond("pit sauce").unwrap();
        assert!(
            resp.reply.contains("Add ~$19.00 to unlock free shipping."),
            "reply: {}",
            resp.reply
        );
    }

    #[test]
    fn at_threshold_reply_says_threshold_met() {
        // Picks summing to $60 ≥ threshold 49.
        let (_dir, assistant) = assistant_with(
            r#"{
                "products": [
                    { "title": "Pit Sauce", "category": "Sauces", "price": 25.0, "in_stock": true },
                    { "title": "Pit Rub", "category": "Sauces", "price": 35.0, "in_stock": true }
                ],
                "shipping": { "free_threshold": 49 }
            }"#,
        );
        let resp = assistant.respond("pit sauce rub").unwrap();
        assert!(
            resp.reply.contains("You're at the free-shipping threshold."),
            "reply: {}",
            resp.reply
        );
        assert!(!resp.reply.contains("Add ~$"));
    }

    // ─── catalog failures ──────────────────────────────────────

    #[test]
    fn missing_catalog_is_an_error_even_for_catering() {
        let dir = tempfile::tempdir().unwrap();
        let assistant = Assistant::new(dir.path().join("catalog.json"));
        let err = assistant.respond("cater my party").unwrap_err();
        assert!(matches!(err, CatalogError::Unavailable(_)));
    }

    #[test]
    fn malformed_catalog_is_an_error() {
        let (_dir, assistant) = assistant_with("{ broken");
        let err = assistant.respond("sauce").unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }
}
