//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::Item;

/// Create an item with just an id and a title.
pub fn make_item(id: &str, title: &str) -> Item {
    Item {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        tags: vec![],
    }
}

/// Create an item with every searchable field set.
pub fn make_full_item(id: &str, title: &str, description: &str, tags: &[&str]) -> Item {
    Item {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// The two-item forest/desert catalog used throughout the docs and tests.
///
/// Query "floresta" scores item "1" at 60 and leaves item "2" out.
pub fn amazon_catalog() -> Vec<Item> {
    vec![
        make_full_item(
            "1",
            "Floresta Amazônica",
            "grande floresta tropical",
            &["natureza", "floresta"],
        ),
        make_full_item("2", "Deserto", "area seca", &["natureza"]),
    ]
}

/// The same catalog as JSON, the way the loader reads it.
pub const AMAZON_CATALOG_JSON: &str = r#"[
  {"id": "1", "title": "Floresta Amazônica", "description": "grande floresta tropical", "tags": ["natureza", "floresta"]},
  {"id": "2", "title": "Deserto", "description": "area seca", "tags": ["natureza"]}
]"#;
