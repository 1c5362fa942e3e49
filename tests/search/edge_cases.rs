//! Degenerate inputs: empty catalogs, empty fields, queries that normalize to nothing.

use super::common::{amazon_catalog, ids, make_full_item};
use sift::{rank, search, Item};

#[test]
fn empty_catalog_returns_nothing() {
    let catalog: Vec<Item> = vec![];
    assert!(search(&catalog, "floresta").is_empty());
}

#[test]
fn empty_query_returns_nothing() {
    let catalog = amazon_catalog();
    assert!(search(&catalog, "").is_empty());
    assert!(search(&catalog, " \t\n").is_empty());
}

#[test]
fn punctuation_only_query_returns_nothing() {
    let catalog = amazon_catalog();
    assert!(search(&catalog, "?!...").is_empty());
    assert!(search(&catalog, "-- // ** ☺").is_empty());
}

#[test]
fn items_with_empty_fields_are_not_errors() {
    let catalog = vec![
        Item::default(),
        make_full_item("blank", "   ", "!!!", &["", "  "]),
        make_full_item("hit", "floresta", "", &[]),
    ];
    let results = rank(&catalog, "floresta");
    assert_eq!(ids(&results), vec!["hit"]);
}

#[test]
fn unmatched_items_are_filtered_out() {
    let catalog = amazon_catalog();
    let results = search(&catalog, "oceano");
    assert!(results.is_empty());
}

#[test]
fn punctuation_inside_query_words_is_dropped_not_split() {
    let catalog = vec![make_full_item("1", "guarda-chuva", "", &[])];
    // "guarda-chuva" normalizes to the single token "guardachuva"
    let results = search(&catalog, "guarda-chuva");
    assert_eq!(results[0].relevance, 30);
    let results = search(&catalog, "chuva");
    assert_eq!(results[0].relevance, 25);
}

#[test]
fn numbers_are_tokens() {
    let catalog = vec![make_full_item("1", "Rota 66", "km 2024", &[])];
    assert_eq!(search(&catalog, "66")[0].relevance, 30);
    assert_eq!(search(&catalog, "20")[0].relevance, 2);
}

#[test]
fn duplicate_ids_are_scored_independently() {
    let catalog = vec![
        make_full_item("same", "rio", "", &[]),
        make_full_item("same", "", "rio", &[]),
    ];
    let results = rank(&catalog, "rio");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].relevance, 30);
    assert_eq!(results[1].relevance, 5);
}

#[test]
fn results_borrow_the_catalog_items() {
    let catalog = amazon_catalog();
    let results = search(&catalog, "floresta");
    assert!(std::ptr::eq(results[0].item, &catalog[0]));
}

#[test]
fn relevance_past_u32_range_does_not_overflow() {
    // 12,000 x 12,000 exact title pairs at 30 each
    let text = "a ".repeat(12_000);
    let catalog = vec![make_full_item("big", &text, "", &[])];
    let results = search(&catalog, &text);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].relevance, 4_320_000_000);
    assert!(results[0].relevance > u64::from(u32::MAX));
}
