// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Every (query token, field token) pair scores independently from a fixed
//! weight table, and an item's relevance is the plain sum. Ordering is a stable
//! sort on that sum, so the catalog decides ties.

mod core;
pub mod ranking;

pub use self::core::*;
