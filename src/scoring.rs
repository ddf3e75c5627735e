//! # Scoring & Ranking
//!
//! A linear weighted-sum scorer over the catalog. Each product gets an
//! integer score against the raw query text and the extracted
//! [`Intent`]; the catalog is then stable-sorted by score and the top
//! three positive-scoring products are kept.
//!
//! ## Weights
//!
//! | Signal | Points |
//! |--------|--------|
//! | Query token found in haystack | +2 each |
//! | Intent category == product category | +3 |
//! | Price ≤ intent max price | +2 |
//! | US sourcing hint in haystack (`us_only`) | +1 |
//! | Intent tag found in haystack | +1 each |
//! | Product in stock | +1 |
//!
//! The haystack is the lower-cased concatenation of title, brand,
//! category, and tags. All containment checks are substring checks, so
//! the same broad-match caveats as intent extraction apply (the
//! `us_only` bonus fires on any haystack containing "us").
//!
//! Scoring is additive and order-independent; adding a matching signal
//! never lowers a score.

use crate::catalog::Product;
use crate::nlu::Intent;

/// A product paired with its score. Transient: lives only between
/// scoring and selection.
#[derive(Debug)]
struct ScoredProduct<'a> {
    product: &'a Product,
    score: i32,
}

/// The response-facing projection of a selected product.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ProductPick {
    pub title: String,
    pub price: f64,
    pub image: String,
    pub url: String,
}

/// Lower-cased searchable text for one product.
fn haystack(p: &Product) -> String {
    let tags = p
        .tags
        .iter()
        .map(|t| t.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "{} {} {} {}",
        p.title.to_lowercase(),
        p.brand.to_lowercase(),
        p.category.to_lowercase(),
        tags
    )
}

/// Scores one product against the raw query and the extracted intent.
pub fn score_product(p: &Product, query: &str, intent: &Intent) -> i32 {
    let hay = haystack(p);
    let q = query.to_lowercase();
    let mut score = 0;

    // +2 per query token found as a substring of the haystack
    for token in q.split_whitespace() {
        if hay.contains(token) {
            score += 2;
        }
    }

    // +3 for an exact (case-insensitive) category match
    if let Some(category) = &intent.category {
        if p.category.eq_ignore_ascii_case(category) {
            score += 3;
        }
    }

    // +2 when the product fits the price cap
    if let Some(max_price) = intent.max_price {
        if p.price <= max_price {
            score += 2;
        }
    }

    // +1 for any US sourcing hint; "us" alone dominates by design
    if intent.us_only
        && (hay.contains("us") || hay.contains("us-made") || hay.contains("us supplier"))
    {
        score += 1;
    }

    // +1 per intent tag present in the haystack
    for tag in &intent.tags {
        if hay.contains(&tag.to_lowercase()) {
            score += 1;
        }
    }

    // +1 for stock on hand
    if p.in_stock {
        score += 1;
    }

    score
}

/// Scores every product, ranks, and keeps the winners.
///
/// The sort is descending by score and **stable**: products with equal
/// scores keep their catalog order, so identical inputs always produce
/// identical output. Only positive scores survive, and at most three
/// picks are returned.
pub fn select_top(products: &[Product], query: &str, intent: &Intent) -> Vec<ProductPick> {
    let mut scored: Vec<ScoredProduct> = products
        .iter()
        .map(|product| ScoredProduct {
            product,
            score: score_product(product, query, intent),
        })
        .collect();

    // Vec::sort_by is stable; ties preserve catalog order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    scored
        .into_iter()
        .filter(|s| s.score > 0)
        .take(3)
        .map(|s| ProductPick {
            title: s.product.title.clone(),
            price: s.product.price,
            image: s.product.image.clone(),
            url: s.product.url.clone(),
        })
        .collect()
}
