// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization: the token identity every score depends on.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// Split text into normalized search tokens.
///
/// - "Floresta Amazônica" → ["floresta", "amazonica"]
/// - "Árvore!" → ["arvore"]
/// - "..." → []
///
/// # Algorithm
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks
/// 3. Keep only letters (category L), numbers (category N) and whitespace
/// 4. Lowercase each character on its own
/// 5. Split on whitespace runs
///
/// Step 3 goes by general category, not the Alphabetic property: circled
/// letters like "Ⓐ" are symbols and are dropped. Step 4 has no context rules,
/// so a final "Σ" lowers to "σ" just like any other.
pub fn normalize_and_tokenize(text: &str) -> Vec<String> {
    let folded: String = text
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| is_token_char(*c))
        .flat_map(char::to_lowercase)
        .collect();

    folded
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Canonical form of `text`: its tokens joined by single spaces.
///
/// Feeding the output back in yields the same tokens.
pub fn normalize(text: &str) -> String {
    normalize_and_tokenize(text).join(" ")
}

#[inline]
fn is_token_char(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c.general_category_group(),
            GeneralCategoryGroup::Letter | GeneralCategoryGroup::Number
        )
}
