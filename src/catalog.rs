// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalog loading and result writing.
//!
//! The scoring core never sees a malformed record. Everything that can fail
//! (unreadable files, bad JSON, non-UTF-8 bytes, a full disk) happens here
//! and comes back as a [`CatalogError`].

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;

use crate::types::{Item, ScoredItem};

/// Catalog I/O error.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read (missing, unreadable, not UTF-8).
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog content is not a JSON array of items.
    #[error("invalid catalog JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Results could not be serialized.
    #[error("failed to serialize results: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Results could not be written.
    #[error("failed to write results to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Label used for catalogs that did not come from a file.
const INLINE_SOURCE: &str = "<inline>";

/// Read a JSON array of items from disk.
///
/// `fs::read_to_string` rejects non-UTF-8 input, so a catalog that loads is
/// valid text all the way down.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Item>, CatalogError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog_from(&content, path)
}

/// Parse a JSON array of items held in memory.
///
/// Missing `id`, `title`, `description` or `tags` default to empty.
pub fn parse_catalog(json: &str) -> Result<Vec<Item>, CatalogError> {
    parse_catalog_from(json, Path::new(INLINE_SOURCE))
}

fn parse_catalog_from(json: &str, path: &Path) -> Result<Vec<Item>, CatalogError> {
    let items: Vec<Item> = serde_json::from_str(json).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    if items.is_empty() {
        warn!("catalog {} is empty", path.display());
    }
    warn_duplicate_ids(&items);
    debug!("loaded {} items from {}", items.len(), path.display());

    Ok(items)
}

/// Ids are assumed unique upstream. Duplicates are kept, just reported.
fn warn_duplicate_ids(items: &[Item]) {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id.as_str()) {
            warn!("duplicate item id {:?} in catalog", item.id);
        }
    }
}

/// Render results as a JSON array of flat records (`id, title, description,
/// tags, relevance`), in the order given.
pub fn to_json(results: &[ScoredItem<'_>], pretty: bool) -> Result<String, CatalogError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(results)
    } else {
        serde_json::to_string(results)
    };
    rendered.map_err(CatalogError::Serialize)
}

/// Write results to `path` as compact JSON.
pub fn write_results(
    path: impl AsRef<Path>,
    results: &[ScoredItem<'_>],
) -> Result<(), CatalogError> {
    let path = path.as_ref();
    let json = to_json(results, false)?;
    fs::write(path, json).map_err(|source| CatalogError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("wrote {} results to {}", results.len(), path.display());
    Ok(())
}
