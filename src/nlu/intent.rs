//! # Intent Extraction
//!
//! The [`IntentExtractor`] turns a free-text shopper message into a
//! structured [`Intent`] by running a fixed sequence of regex passes
//! over the lower-cased text:
//!
//! | Pass | Pattern (on lower-cased text) | Effect |
//! |------|-------------------------------|--------|
//! | US sourcing | `us\|u\.s\.\|usa\|us-made\|us supplier` | `us_only = true` |
//! | Price cap | `under\s*\$?(\d+)` | `max_price = Some(n)` |
//! | Category | sauce/bbq/rub/season, then beauty/skincare/… | `category` |
//! | Bundle | `bundle\|pack` | pushes `"bundle"` tag |
//! | Catering | cater/event/booking/wedding/party/private flight | `kind = CateringLead` |
//!
//! ## Known Heuristic Limitations
//!
//! The patterns match **substrings**, not whole words — "bus" contains
//! "us", so it flips `us_only`. This breadth is deliberate and relied
//! upon by callers; do not "fix" it with word boundaries.
//!
//! Order matters twice:
//! - Sauces keywords are checked before Beauty & Wellness keywords;
//!   the first category match wins.
//! - The catering check runs last and overrides the kind
//!   unconditionally, even when category keywords also matched
//!   ("catering sauces" is a catering lead, not a product search).
//!
//! An empty or absent message yields the all-default intent: a product
//! search with no filters.

use regex::Regex;

/// What the shopper is fundamentally asking for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntentKind {
    /// A product search against the catalog (the default).
    FindProduct,
    /// A catering/event inquiry — answered with a lead-capture prompt,
    /// never with products.
    CateringLead,
}

/// Structured interpretation of one message. Derived fresh per request;
/// never stored.
#[derive(Clone, Debug, PartialEq)]
pub struct Intent {
    pub kind: IntentKind,
    /// Integer-dollar price cap captured from "under $N".
    pub max_price: Option<f64>,
    /// Catalog category name, if a category keyword matched.
    pub category: Option<String>,
    /// Shopper asked for US-sourced products.
    pub us_only: bool,
    /// Extra tags to reward during scoring (currently only "bundle").
    pub tags: Vec<String>,
}

impl Default for Intent {
    fn default() -> Self {
        Self {
            kind: IntentKind::FindProduct,
            max_price: None,
            category: None,
            us_only: false,
            tags: Vec::new(),
        }
    }
}

/// Regex-based intent extractor. Patterns are compiled once at startup
/// and shared read-only across requests.
pub struct IntentExtractor {
    us_only: Regex,
    max_price: Regex,
    sauces: Regex,
    beauty: Regex,
    bundle: Regex,
    catering: Regex,
}

impl IntentExtractor {
    /// Compiles all intent patterns.
    ///
    /// The patterns are literals known to be valid, so compilation
    /// cannot fail at runtime; this is still only called once, at
    /// startup.
    pub fn new() -> Self {
        Self {
            us_only: Regex::new(r"us|u\.s\.|usa|us-made|us supplier").unwrap(),
            max_price: Regex::new(r"under\s*\$?(\d+)").unwrap(),
            sauces: Regex::new(r"sauce|bbq|rub|season").unwrap(),
            beauty: Regex::new(r"beauty|skincare|serum|hyaluronic|collagen|toothbrush|massage")
                .unwrap(),
            bundle: Regex::new(r"bundle|pack").unwrap(),
            catering: Regex::new(r"cater|event|booking|wedding|party|private flight").unwrap(),
        }
    }

    /// Extracts an [`Intent`] from a raw message.
    ///
    /// Infallible: empty input yields the default intent, and no pass
    /// can error. All matching happens against the lower-cased message.
    pub fn extract(&self, message: &str) -> Intent {
        let m = message.to_lowercase();
        let mut intent = Intent::default();

        intent.us_only = self.us_only.is_match(&m);

        if let Some(caps) = self.max_price.captures(&m) {
            // \d+ always parses
            intent.max_price = caps[1].parse::<f64>().ok();
        }

        // First category match wins: Sauces before Beauty & Wellness.
        if self.sauces.is_match(&m) {
            intent.category = Some("Sauces".to_string());
        } else if self.beauty.is_match(&m) {
            intent.category = Some("Beauty & Wellness".to_string());
        }

        if self.bundle.is_match(&m) {
            intent.tags.push("bundle".to_string());
        }

        // Catering overrides the kind regardless of everything above.
        if self.catering.is_match(&m) {
            intent.kind = IntentKind::CateringLead;
        }

        intent
    }
}

impl Default for IntentExtractor {
    fn default() -> Self {
        Self::new()
    }
}
