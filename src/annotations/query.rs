//! Annotation query engine
//!
//! Answers "which annotations touch these URNs?" by combining exact URN
//! matching with expanded-reference set intersection, then deduplicating
//! and sorting for deterministic output.

use std::collections::BTreeSet;

use thiserror::Error;
use tracing::debug;

use super::store::{AnnotationStore, ResolvedAnnotation};
use crate::text::{expand, ExpansionError, TextProvider};
use crate::urn::{CtsUrn, UrnParseError};

/// Query errors
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Malformed target URN: {0}")]
    Urn(#[from] UrnParseError),

    #[error("Range expansion failed: {0}")]
    Expansion(#[from] ExpansionError),
}

/// Optional query filters and pagination
#[derive(Debug, Clone)]
pub struct QueryOptions {
    /// Keep only these annotation type URIs
    pub include: Option<Vec<String>>,
    /// Drop these annotation type URIs
    pub exclude: Option<Vec<String>>,
    /// Page size; `None` returns the full match set
    pub limit: Option<usize>,
    /// 1-based offset into the sorted match set
    pub start: usize,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            include: None,
            exclude: None,
            limit: None,
            start: 1,
        }
    }
}

impl QueryOptions {
    fn admits(&self, type_uri: &str) -> bool {
        if let Some(ref include) = self.include {
            if !include.iter().any(|t| t == type_uri) {
                return false;
            }
        }
        if let Some(ref exclude) = self.exclude {
            if exclude.iter().any(|t| t == type_uri) {
                return false;
            }
        }
        true
    }
}

impl AnnotationStore {
    /// Query with string URNs; `None` matches every record.
    ///
    /// Returns the post-dedup match count and the matches sorted ascending
    /// by URI. `start` and `limit` paginate the sorted sequence after
    /// counting, so the count always reflects the full match set.
    pub fn query(
        &self,
        provider: &dyn TextProvider,
        urns: Option<&[&str]>,
        options: &QueryOptions,
    ) -> Result<(usize, Vec<&ResolvedAnnotation>), QueryError> {
        let parsed = match urns {
            None => None,
            Some(raw) => Some(
                raw.iter()
                    .map(|u| u.parse())
                    .collect::<Result<Vec<CtsUrn>, _>>()?,
            ),
        };
        self.query_urns(provider, parsed.as_deref(), options)
    }

    /// Query with parsed URNs; `None` matches every record.
    ///
    /// A record matches an input URN when its target URN string equals the
    /// input exactly, or when its expanded set intersects the input's
    /// match set (the input's own expansion for ranges, its canonical
    /// string otherwise). Matches union across inputs; a record matched
    /// through several inputs appears once.
    pub fn query_urns(
        &self,
        provider: &dyn TextProvider,
        urns: Option<&[CtsUrn]>,
        options: &QueryOptions,
    ) -> Result<(usize, Vec<&ResolvedAnnotation>), QueryError> {
        let mut matched: BTreeSet<usize> = BTreeSet::new();

        match urns {
            None => {
                matched.extend(
                    self.entries()
                        .iter()
                        .enumerate()
                        .filter(|(_, entry)| options.admits(entry.type_uri()))
                        .map(|(index, _)| index),
                );
            }
            Some(urns) => {
                for urn in urns {
                    let exact = urn.to_string();
                    let in_range: BTreeSet<String> =
                        if urn.reference.as_ref().is_some_and(|r| r.is_range()) {
                            expand(provider, urn)?
                        } else {
                            BTreeSet::from([exact.clone()])
                        };

                    for (index, entry) in self.entries().iter().enumerate() {
                        if !options.admits(entry.type_uri()) {
                            continue;
                        }
                        let hit = entry.target_urn().to_string() == exact
                            || !entry.expanded().is_disjoint(&in_range);
                        if hit {
                            matched.insert(index);
                        }
                    }
                }
            }
        }

        let total = matched.len();

        let mut results: Vec<&ResolvedAnnotation> =
            matched.iter().map(|&index| &self.entries()[index]).collect();
        // Stable sort: ties keep insertion order across repeated calls
        results.sort_by(|a, b| a.uri().cmp(b.uri()));

        let skip = options.start.saturating_sub(1);
        let results: Vec<&ResolvedAnnotation> = match options.limit {
            Some(limit) => results.into_iter().skip(skip).take(limit).collect(),
            None => results.into_iter().skip(skip).collect(),
        };

        debug!(total, returned = results.len(), "Annotation query complete");
        Ok((total, results))
    }
}
