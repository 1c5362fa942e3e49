// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search pass.
//!
//! An `Item` comes from the catalog loader and is never touched again. A
//! `ScoredItem` borrows its `Item`, so results cannot outlive the catalog they
//! were computed from.
//!
//! # Invariants
//!
//! - **ScoredItem**: `relevance > 0` for anything returned by `search`.
//!   Zero-score items are filtered before they reach the caller.
//!
//! - **Relevance**: always a sum of non-negative pair weights. Nothing in the
//!   scoring path subtracts, so an unsigned integer is the honest type.

use serde::{Deserialize, Serialize};

/// A catalog entry.
///
/// Missing fields in the source JSON default to empty, so the scoring code
/// never sees an absent title or a null tag list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Order is irrelevant to scoring; each tag is tokenized on its own.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// An item that matched at least one query token.
///
/// Serializes flat: every `Item` field plus `relevance`, which is the record
/// shape the output side expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredItem<'a> {
    #[serde(flatten)]
    pub item: &'a Item,
    pub relevance: u64,
}

/// Which searchable field a token came from.
///
/// Every tag is its own field; tags are never concatenated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Title,
    Tag,
    Description,
}

impl FieldKind {
    /// Matches the serde `rename_all = "lowercase"` convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Title => "title",
            FieldKind::Tag => "tag",
            FieldKind::Description => "description",
        }
    }
}

/// How a query token relates to a field token.
///
/// Checked in declaration order; the first relation that holds is the one
/// that scores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Query token equals field token.
    Exact,
    /// Field token contains the query token ("floresta" contains "flor").
    Contains,
    /// Query token contains the field token ("florestas" contains "floresta").
    Contained,
}

/// One non-zero term of an item's relevance sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub query_token: String,
    pub field: FieldKind,
    pub field_token: String,
    pub kind: MatchKind,
    pub weight: u32,
}
