//! Per-session document cache.
//!
//! Each distinct source is read and normalized at most once per CLI
//! invocation. The cache is an ordinary value owned by the command that
//! creates it.

use anyhow::{Context, Result};
use firemap_core::processing::NormalizedDocument;
use firemap_core::{FiremapError, Normalizer};
use serde_json::Value;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub struct DocumentCache {
    normalizer: Normalizer,
    entries: HashMap<String, NormalizedDocument>,
}

impl DocumentCache {
    pub fn new(normalizer: Normalizer) -> Self {
        Self { normalizer, entries: HashMap::new() }
    }

    /// Normalized document for `path`, reading and normalizing on first use
    pub fn load(&mut self, path: &Path) -> Result<&NormalizedDocument> {
        let source_id = source_id(path);
        match self.entries.entry(source_id) {
            Entry::Occupied(entry) => {
                tracing::debug!(source = %entry.key(), "Using cached normalization");
                Ok(&*entry.into_mut())
            }
            Entry::Vacant(entry) => {
                let document = read_document(path)?;
                let normalized = self
                    .normalizer
                    .normalize(&document)
                    .with_context(|| format!("Cannot normalize {}", path.display()))?;
                tracing::info!(
                    source = %entry.key(),
                    features = normalized.len(),
                    "Normalized document"
                );
                Ok(&*entry.insert(normalized))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Stable identifier for a source path
pub fn source_id(path: &Path) -> String {
    fs::canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

/// Read and parse a JSON file
pub fn read_document(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .map_err(FiremapError::Io)
        .with_context(|| format!("Cannot read {}", path.display()))?;

    let document = serde_json::from_str(&content).map_err(|e| FiremapError::Parse {
        source_id: path.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(document)
}
