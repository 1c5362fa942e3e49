//! Shared test utilities and fixtures.

#![allow(dead_code)]

use sift::{Item, ScoredItem};

// Re-export canonical test utilities from sift::testing
pub use sift::testing::{amazon_catalog, make_full_item, make_item, AMAZON_CATALOG_JSON};

/// Ids of a result sequence, in order.
pub fn ids<'a>(results: &[ScoredItem<'a>]) -> Vec<&'a str> {
    results.iter().map(|r| r.item.id.as_str()).collect()
}

/// (id, relevance) pairs of a result sequence, in order.
pub fn scores<'a>(results: &[ScoredItem<'a>]) -> Vec<(&'a str, u64)> {
    results
        .iter()
        .map(|r| (r.item.id.as_str(), r.relevance))
        .collect()
}

/// Catalog of title-only items with ids "0", "1", ...
pub fn titles_catalog(titles: &[&str]) -> Vec<Item> {
    titles
        .iter()
        .enumerate()
        .map(|(i, title)| make_item(&i.to_string(), title))
        .collect()
}

/// Assert the ordering contract on a ranked result sequence.
///
/// Relevance never increases, every relevance is positive, and equal
/// relevances appear in catalog order.
pub fn assert_ranked(results: &[ScoredItem<'_>], catalog: &[Item]) {
    let position = |item: &Item| {
        catalog
            .iter()
            .position(|c| std::ptr::eq(c, item))
            .expect("result does not borrow from the catalog")
    };

    for r in results {
        assert!(r.relevance > 0, "zero-score item {} leaked", r.item.id);
    }

    for pair in results.windows(2) {
        assert!(
            pair[0].relevance >= pair[1].relevance,
            "relevance increases: {} ({}) then {} ({})",
            pair[0].item.id,
            pair[0].relevance,
            pair[1].item.id,
            pair[1].relevance
        );
        if pair[0].relevance == pair[1].relevance {
            assert!(
                position(pair[0].item) < position(pair[1].item),
                "tie between {} and {} not in catalog order",
                pair[0].item.id,
                pair[1].item.id
            );
        }
    }
}
