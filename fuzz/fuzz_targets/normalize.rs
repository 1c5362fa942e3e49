// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the normalizer.
//!
//! Any UTF-8 input must tokenize without panicking, produce only non-empty
//! tokens of Letter and Number characters, and tokenize to the same sequence
//! when its canonical form is fed back in.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sift::normalize_and_tokenize;
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

fuzz_target!(|text: &str| {
    let tokens = normalize_and_tokenize(text);

    for token in &tokens {
        assert!(!token.is_empty(), "empty token from {:?}", text);
        assert!(
            token.chars().all(|c| matches!(
                c.general_category_group(),
                GeneralCategoryGroup::Letter | GeneralCategoryGroup::Number
            )),
            "token {:?} from {:?} has characters outside categories L and N",
            token,
            text
        );
    }

    let again = normalize_and_tokenize(&tokens.join(" "));
    assert_eq!(again, tokens, "normalizer not idempotent on {:?}", text);
});
