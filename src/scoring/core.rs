// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind relevance.
//!
//! A pair of tokens relates in one of three ways (exact, field contains query,
//! query contains field) and each field kind has its own weight per relation:
//!
//! | Relation          | Title | Tag | Description |
//! |-------------------|-------|-----|-------------|
//! | Exact             | 30    | 25  | 5           |
//! | Field ⊃ query     | 25    | 20  | 2           |
//! | Query ⊃ field     | 20    | 15  | 1           |
//!
//! Relations are checked in that order and only the first one scores. Both
//! tokens are already normalized, so plain `str::contains` is the whole
//! comparison.

use crate::types::{FieldKind, MatchKind};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Weights for one field kind, indexed by match relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldWeights {
    pub exact: u32,
    pub contains: u32,
    pub contained: u32,
}

impl FieldWeights {
    /// Weight awarded for a given relation.
    #[inline]
    pub const fn weight(&self, kind: MatchKind) -> u32 {
        match kind {
            MatchKind::Exact => self.exact,
            MatchKind::Contains => self.contains,
            MatchKind::Contained => self.contained,
        }
    }
}

pub const TITLE_WEIGHTS: FieldWeights = FieldWeights {
    exact: 30,
    contains: 25,
    contained: 20,
};

pub const TAG_WEIGHTS: FieldWeights = FieldWeights {
    exact: 25,
    contains: 20,
    contained: 15,
};

pub const DESCRIPTION_WEIGHTS: FieldWeights = FieldWeights {
    exact: 5,
    contains: 2,
    contained: 1,
};

/// Weight table for a field kind.
pub const fn field_weights(field: FieldKind) -> FieldWeights {
    match field {
        FieldKind::Title => TITLE_WEIGHTS,
        FieldKind::Tag => TAG_WEIGHTS,
        FieldKind::Description => DESCRIPTION_WEIGHTS,
    }
}

/// Classify how a query token relates to a field token.
///
/// `None` when neither contains the other. An empty token would be contained
/// in everything, but the normalizer never produces one.
pub fn match_kind(query_token: &str, field_token: &str) -> Option<MatchKind> {
    if field_token == query_token {
        Some(MatchKind::Exact)
    } else if field_token.contains(query_token) {
        Some(MatchKind::Contains)
    } else if query_token.contains(field_token) {
        Some(MatchKind::Contained)
    } else {
        None
    }
}

/// Score of a single (query token, field token) pair. Zero when unrelated.
#[inline]
pub fn pair_score(field: FieldKind, query_token: &str, field_token: &str) -> u32 {
    match_kind(query_token, field_token)
        .map(|kind| field_weights(field).weight(kind))
        .unwrap_or(0)
}

/// Sum of pair scores between every query token and every token of one field.
///
/// Saturates at `u64::MAX` instead of wrapping.
pub fn field_score(field: FieldKind, query_tokens: &[String], field_tokens: &[String]) -> u64 {
    query_tokens
        .iter()
        .flat_map(|q| field_tokens.iter().map(move |f| pair_score(field, q, f)))
        .fold(0, |acc, score| acc.saturating_add(u64::from(score)))
}
