//! # Catalog — Product and Shipping Data
//!
//! The catalog is an **external, read-only collaborator**: a JSON file
//! (by default `catalog.json` in the working directory) with the shape
//!
//! ```json
//! {
//!   "products": [ { "title": "...", "brand": "...", ... } ],
//!   "shipping": { "free_threshold": 49 }
//! }
//! ```
//!
//! ## Per-Request Loading
//!
//! The file is re-read and re-parsed on **every** request. There is no
//! cache and no cache-invalidation problem: editing the file takes
//! effect on the next request. Nothing here is ever mutated.
//!
//! ## Missing Fields
//!
//! Every field is `#[serde(default)]` — a product with no `brand` scores
//! as if its brand were the empty string, and a catalog with no
//! `shipping` section falls back to the default free-shipping threshold.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Default free-shipping threshold in dollars, used when the catalog
/// omits `shipping.free_threshold`.
pub const DEFAULT_FREE_THRESHOLD: f64 = 49.0;

/// Why a catalog load failed.
///
/// Both variants are handled identically at the HTTP boundary (logged,
/// converted to the generic apology); the split exists so logs say
/// *which* kind of failure occurred.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The file is missing or unreadable.
    #[error("catalog unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    /// The file exists but is not valid catalog JSON.
    #[error("catalog malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A single marketplace product, read-only for the request's lifetime.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub in_stock: bool,
    /// Image URL, passed through verbatim to the response.
    #[serde(default)]
    pub image: String,
    /// Product page URL, passed through verbatim to the response.
    #[serde(default)]
    pub url: String,
}

/// Shipping policy section of the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct ShippingPolicy {
    /// Minimum order subtotal above which shipping is free.
    #[serde(default = "default_free_threshold")]
    pub free_threshold: f64,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            free_threshold: DEFAULT_FREE_THRESHOLD,
        }
    }
}

fn default_free_threshold() -> f64 {
    DEFAULT_FREE_THRESHOLD
}

/// The full parsed catalog file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub shipping: ShippingPolicy,
}

/// Reads and parses the catalog file, fully and synchronously.
///
/// Called once per request; no caching.
///
/// # Errors
///
/// [`CatalogError::Unavailable`] if the file cannot be read,
/// [`CatalogError::Malformed`] if it cannot be parsed.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let raw = std::fs::read_to_string(path)?;
    let catalog: Catalog = serde_json::from_str(&raw)?;
    Ok(catalog)
}
