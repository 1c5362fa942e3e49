// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory catalog search with token-overlap ranking.
//!
//! Give it a catalog of items (title, description, tags) and a free-text
//! query; get back the items that share at least one token relation with the
//! query, each with an integer relevance, best first.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────────┐
//! │  utils.rs   │────▶│  scoring/    │────▶│   search.rs     │
//! │ (normalize_ │     │ (pair_score, │     │ (search, rank,  │
//! │  and_       │     │  weights,    │     │  explain)       │
//! │  tokenize)  │     │  ranking)    │     │                 │
//! └─────────────┘     └──────────────┘     └─────────────────┘
//!                                                   ▲
//!                     ┌──────────────┐              │
//!                     │  catalog.rs  │──────────────┘
//!                     │ (load/write) │
//!                     └──────────────┘
//! ```
//!
//! There is no index. Every query is a full linear scan, and tokens are
//! recomputed on every call.
//!
//! # Usage
//!
//! ```
//! use sift::{rank, Item};
//!
//! let catalog = vec![Item {
//!     id: "1".to_string(),
//!     title: "Floresta Amazônica".to_string(),
//!     description: "grande floresta tropical".to_string(),
//!     tags: vec!["natureza".to_string(), "floresta".to_string()],
//! }];
//!
//! let results = rank(&catalog, "floresta");
//! assert_eq!(results[0].relevance, 60);
//! ```

// Module declarations
pub mod catalog;
mod scoring;
mod search;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use catalog::{load_catalog, parse_catalog, to_json, write_results, CatalogError};
pub use scoring::ranking::{compare_results, is_ranked, sort_by_relevance};
pub use scoring::{
    field_score, field_weights, match_kind, pair_score, FieldWeights, DESCRIPTION_WEIGHTS,
    TAG_WEIGHTS, TITLE_WEIGHTS,
};
#[cfg(feature = "parallel")]
pub use search::{rank_parallel, search_parallel};
pub use search::{explain, rank, score_item, search};
pub use types::{Contribution, FieldKind, Item, MatchKind, ScoredItem};
pub use utils::{normalize, normalize_and_tokenize};
