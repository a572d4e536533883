//! Two-phase annotation store
//!
//! Records are collected into a builder, then resolved in a single batch
//! pass that computes each target's expanded reference set. The resulting
//! store is immutable, keeps insertion order, and is safe to share across
//! request-handling threads.

use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use super::types::AnnotationResource;
use crate::text::{expand, TextProvider};
use crate::urn::{CtsUrn, UrnParseError};

/// Store lookup errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("No annotation with hash {0}")]
    NotFound(String),
}

/// An annotation together with its resolved target state
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedAnnotation {
    #[serde(flatten)]
    resource: AnnotationResource,
    /// Deepest-level URNs covered by the target; empty when unavailable
    #[serde(skip)]
    expanded: BTreeSet<String>,
    /// False exactly when the target text could not be resolved
    available: bool,
}

impl ResolvedAnnotation {
    pub fn resource(&self) -> &AnnotationResource {
        &self.resource
    }

    pub fn uri(&self) -> &str {
        &self.resource.uri
    }

    pub fn sha(&self) -> &str {
        &self.resource.sha
    }

    pub fn type_uri(&self) -> &str {
        &self.resource.type_uri
    }

    pub fn target_urn(&self) -> &CtsUrn {
        &self.resource.target.urn
    }

    pub fn expanded(&self) -> &BTreeSet<String> {
        &self.expanded
    }

    pub fn available(&self) -> bool {
        self.available
    }
}

/// Collects annotation records before the one-time processing pass
#[derive(Debug, Default)]
pub struct AnnotationStoreBuilder {
    records: Vec<AnnotationResource>,
}

impl AnnotationStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `target_urn` and append a record built from the triple
    pub fn add(
        &mut self,
        target_urn: &str,
        uri: &str,
        type_uri: &str,
    ) -> Result<(), UrnParseError> {
        let urn: CtsUrn = target_urn.parse()?;
        self.records.push(AnnotationResource::new(uri, urn, type_uri));
        Ok(())
    }

    /// Append a pre-built record
    pub fn push(&mut self, record: AnnotationResource) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolve every record's target against `provider`.
    ///
    /// Failures are isolated per record: a target whose text cannot be
    /// resolved is stored as unavailable with an empty expansion, and the
    /// rest of the batch proceeds.
    pub fn process(self, provider: &dyn TextProvider) -> AnnotationStore {
        let mut entries = Vec::with_capacity(self.records.len());
        for resource in self.records {
            let (expanded, available) = match expand(provider, &resource.target.urn) {
                Ok(set) => (set, true),
                Err(err) => {
                    warn!(
                        sha = %resource.sha,
                        target = %resource.target.urn,
                        error = %err,
                        "Annotation target could not be resolved"
                    );
                    (BTreeSet::new(), false)
                }
            };
            entries.push(ResolvedAnnotation {
                resource,
                expanded,
                available,
            });
        }
        debug!(count = entries.len(), "Annotation store processed");
        AnnotationStore { entries }
    }
}

/// Read-only store of resolved annotations, in insertion order
#[derive(Debug)]
pub struct AnnotationStore {
    entries: Vec<ResolvedAnnotation>,
}

impl AnnotationStore {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a record by its content hash
    pub fn get_by_hash(&self, sha: &str) -> Result<&ResolvedAnnotation, StoreError> {
        self.entries
            .iter()
            .find(|entry| entry.resource.sha == sha)
            .ok_or_else(|| StoreError::NotFound(sha.to_string()))
    }

    /// All records in insertion order
    pub fn all(&self) -> impl Iterator<Item = &ResolvedAnnotation> {
        self.entries.iter()
    }

    pub(crate) fn entries(&self) -> &[ResolvedAnnotation] {
        &self.entries
    }
}
