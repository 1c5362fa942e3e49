// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Linear-scan search over an in-memory catalog.
//!
//! The query is tokenized once. Every item's fields are tokenized on the fly,
//! scored against every query token, and kept if the total is positive. There
//! is no index and nothing is cached between calls.
//!
//! `search` returns hits in catalog order. `rank` adds the stable relevance
//! sort on top.

use log::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::scoring::ranking::sort_by_relevance;
use crate::scoring::{field_score, field_weights, match_kind};
use crate::types::{Contribution, FieldKind, Item, ScoredItem};
use crate::utils::normalize_and_tokenize;

/// Tokenized searchable fields of one item.
///
/// Each tag keeps its own token list so tags never run together.
struct ItemTokens {
    title: Vec<String>,
    description: Vec<String>,
    tags: Vec<Vec<String>>,
}

impl ItemTokens {
    fn of(item: &Item) -> Self {
        Self {
            title: normalize_and_tokenize(&item.title),
            description: normalize_and_tokenize(&item.description),
            tags: item
                .tags
                .iter()
                .map(|tag| normalize_and_tokenize(tag))
                .collect(),
        }
    }

    /// Every field with its kind, title first.
    fn fields(&self) -> impl Iterator<Item = (FieldKind, &[String])> + '_ {
        std::iter::once((FieldKind::Title, self.title.as_slice()))
            .chain(std::iter::once((
                FieldKind::Description,
                self.description.as_slice(),
            )))
            .chain(self.tags.iter().map(|t| (FieldKind::Tag, t.as_slice())))
    }
}

/// Relevance of one item against already-tokenized query tokens.
///
/// Sum over every field and every (query token, field token) pair. Empty
/// fields contribute nothing.
pub fn score_item(item: &Item, query_tokens: &[String]) -> u64 {
    if query_tokens.is_empty() {
        return 0;
    }

    ItemTokens::of(item)
        .fields()
        .map(|(kind, tokens)| field_score(kind, query_tokens, tokens))
        .fold(0, u64::saturating_add)
}

#[inline]
fn scored<'a>(item: &'a Item, query_tokens: &[String]) -> Option<ScoredItem<'a>> {
    let relevance = score_item(item, query_tokens);
    (relevance > 0).then_some(ScoredItem { item, relevance })
}

/// Find every item that shares at least one token relation with `query`.
///
/// Results come back in catalog order, one entry per matching item, unsorted.
/// An empty or punctuation-only query matches nothing.
pub fn search<'a>(catalog: &'a [Item], query: &str) -> Vec<ScoredItem<'a>> {
    let query_tokens = normalize_and_tokenize(query);
    debug!("query {:?} -> tokens {:?}", query, query_tokens);

    if query_tokens.is_empty() {
        return Vec::new();
    }

    let results: Vec<ScoredItem<'a>> = catalog
        .iter()
        .filter_map(|item| scored(item, &query_tokens))
        .collect();

    debug!("{} of {} items matched", results.len(), catalog.len());
    results
}

/// Same output as [`search`], with items scored on the rayon pool.
///
/// `collect` on an indexed parallel iterator keeps source order, so the hits
/// line up with the sequential version exactly.
#[cfg(feature = "parallel")]
pub fn search_parallel<'a>(catalog: &'a [Item], query: &str) -> Vec<ScoredItem<'a>> {
    let query_tokens = normalize_and_tokenize(query);
    debug!("query {:?} -> tokens {:?} (parallel)", query, query_tokens);

    if query_tokens.is_empty() {
        return Vec::new();
    }

    let results: Vec<ScoredItem<'a>> = catalog
        .par_iter()
        .filter_map(|item| scored(item, &query_tokens))
        .collect();

    debug!("{} of {} items matched", results.len(), catalog.len());
    results
}

/// [`search`] followed by the stable relevance sort.
pub fn rank<'a>(catalog: &'a [Item], query: &str) -> Vec<ScoredItem<'a>> {
    let mut results = search(catalog, query);
    sort_by_relevance(&mut results);
    results
}

/// [`search_parallel`] followed by the stable relevance sort.
#[cfg(feature = "parallel")]
pub fn rank_parallel<'a>(catalog: &'a [Item], query: &str) -> Vec<ScoredItem<'a>> {
    let mut results = search_parallel(catalog, query);
    sort_by_relevance(&mut results);
    results
}

/// Every non-zero pair contribution behind an item's relevance.
///
/// Ordered by query token, then field (title, description, tags in order),
/// then field token. The weights sum to `score_item` for the same query.
pub fn explain(item: &Item, query: &str) -> Vec<Contribution> {
    let query_tokens = normalize_and_tokenize(query);
    let item_tokens = ItemTokens::of(item);
    let mut contributions = Vec::new();

    for query_token in &query_tokens {
        for (field, tokens) in item_tokens.fields() {
            for field_token in tokens {
                if let Some(kind) = match_kind(query_token, field_token) {
                    let weight = field_weights(field).weight(kind);
                    trace!(
                        "{}: {:?} vs {:?} -> {:?} (+{})",
                        field.as_str(),
                        query_token,
                        field_token,
                        kind,
                        weight
                    );
                    contributions.push(Contribution {
                        query_token: query_token.clone(),
                        field,
                        field_token: field_token.clone(),
                        kind,
                        weight,
                    });
                }
            }
        }
    }

    contributions
}
