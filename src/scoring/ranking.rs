// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored items get sorted.
//!
//! Relevance descending, and nothing else. Ties keep catalog order because the
//! sort is stable and `search` emits items in catalog order. Comparing ids or
//! titles as a tiebreaker would break that contract.

use crate::types::ScoredItem;
use std::cmp::Ordering;

/// Compare two results for ranking. Higher relevance sorts first.
///
/// Equal relevance compares `Equal`; the caller's stable sort keeps the
/// catalog order.
pub fn compare_results(a: &ScoredItem<'_>, b: &ScoredItem<'_>) -> Ordering {
    b.relevance.cmp(&a.relevance)
}

/// Stable sort by relevance, descending.
pub fn sort_by_relevance(results: &mut [ScoredItem<'_>]) {
    // slice::sort_by is stable; sort_unstable_by would scramble ties
    results.sort_by(compare_results);
}

/// Whether `results` satisfies the ordering contract: non-increasing relevance.
pub fn is_ranked(results: &[ScoredItem<'_>]) -> bool {
    results
        .windows(2)
        .all(|pair| pair[0].relevance >= pair[1].relevance)
}
