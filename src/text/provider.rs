//! Text providers
//!
//! A provider resolves work-level URNs to text metadata and enumerates the
//! references of a work at a given citation depth, in document order. The
//! surrounding application decides what backs it: a local inventory, a
//! remote CTS endpoint, a database.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::citation::CitationScheme;
use crate::urn::CtsUrn;

/// Metadata for a single text: its work URN and citation scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub urn: CtsUrn,
    pub citation: CitationScheme,
}

impl Text {
    pub fn new(urn: CtsUrn, citation: CitationScheme) -> Self {
        Self { urn, citation }
    }
}

/// Errors from text providers
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Unknown text: {0}")]
    UnknownText(String),

    #[error("Citation level {level} out of range for {urn} (depth {depth})")]
    LevelOutOfRange {
        urn: String,
        level: usize,
        depth: usize,
    },
}

/// Resolves work URNs to metadata and enumerates references
pub trait TextProvider {
    /// Metadata for the work addressed by `urn` (any passage part is ignored)
    fn get_text(&self, urn: &CtsUrn) -> Result<Text, ProviderError>;

    /// All references of the work at citation depth `level` (1-based,
    /// outermost first), in document order
    fn valid_reffs(&self, urn: &CtsUrn, level: usize) -> Result<Vec<String>, ProviderError>;
}

/// In-memory inventory of texts, keyed by work URN
///
/// Each text is seeded with its deepest-level reference list in document
/// order; shallower levels are derived by truncating references.
#[derive(Debug, Default)]
pub struct InMemoryTextProvider {
    texts: HashMap<String, Entry>,
}

#[derive(Debug)]
struct Entry {
    text: Text,
    leaves: Vec<String>,
}

impl InMemoryTextProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a text with its deepest-level references in document order
    pub fn insert(&mut self, text: Text, leaves: Vec<String>) {
        let key = text.urn.up_to_version().to_string();
        debug!(urn = %key, leaves = leaves.len(), "Registered text");
        self.texts.insert(key, Entry { text, leaves });
    }

    fn entry(&self, urn: &CtsUrn) -> Result<&Entry, ProviderError> {
        let key = urn.up_to_version().to_string();
        self.texts
            .get(&key)
            .ok_or(ProviderError::UnknownText(key))
    }
}

impl TextProvider for InMemoryTextProvider {
    fn get_text(&self, urn: &CtsUrn) -> Result<Text, ProviderError> {
        Ok(self.entry(urn)?.text.clone())
    }

    fn valid_reffs(&self, urn: &CtsUrn, level: usize) -> Result<Vec<String>, ProviderError> {
        let entry = self.entry(urn)?;
        let depth = entry.text.citation.depth();

        if level == 0 || level > depth {
            return Err(ProviderError::LevelOutOfRange {
                urn: entry.text.urn.to_string(),
                level,
                depth,
            });
        }

        if level == depth {
            return Ok(entry.leaves.clone());
        }

        // Document order keeps siblings adjacent, so consecutive
        // deduplication is enough after truncating to `level` components.
        let mut out: Vec<String> = Vec::new();
        for leaf in &entry.leaves {
            let truncated = leaf
                .split('.')
                .take(level)
                .collect::<Vec<_>>()
                .join(".");
            if out.last() != Some(&truncated) {
                out.push(truncated);
            }
        }
        Ok(out)
    }
}
