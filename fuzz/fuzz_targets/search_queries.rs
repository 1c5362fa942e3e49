// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search over arbitrary catalogs and queries.
//!
//! The ranker is total: any catalog and any query must produce a ranked,
//! positive, tie-stable result, identical on a second run.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sift::{is_ranked, rank, search, Item};

#[derive(Arbitrary, Debug)]
struct Input {
    query: String,
    items: Vec<(String, String, Vec<String>)>,
}

fuzz_target!(|input: Input| {
    let catalog: Vec<Item> = input
        .items
        .into_iter()
        .take(64)
        .enumerate()
        .map(|(i, (title, description, tags))| Item {
            id: i.to_string(),
            title,
            description,
            tags,
        })
        .collect();

    let unsorted = search(&catalog, &input.query);
    let ranked = rank(&catalog, &input.query);

    assert_eq!(unsorted.len(), ranked.len(), "rank dropped or added items");
    assert!(is_ranked(&ranked), "results out of order");
    assert!(ranked.iter().all(|r| r.relevance > 0), "zero-score item leaked");

    // Ties must keep catalog order; ids are catalog positions
    for pair in ranked.windows(2) {
        if pair[0].relevance == pair[1].relevance {
            let a: usize = pair[0].item.id.parse().unwrap();
            let b: usize = pair[1].item.id.parse().unwrap();
            assert!(a < b, "tie broken out of catalog order");
        }
    }

    assert_eq!(rank(&catalog, &input.query), ranked, "search not deterministic");
});
