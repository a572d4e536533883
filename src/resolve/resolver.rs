//! URI resolver
//!
//! Maps a resource URI to the first registered retrieval strategy that
//! matches it. Registration order is the priority order.

use thiserror::Error;
use tracing::debug;

use super::retriever::{RetrievalError, Retriever};

/// Errors from resolution and resolved reads
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("No retriever matches URI: {0}")]
    Unresolvable(String),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),
}

/// Ordered collection of retrieval strategies
#[derive(Debug, Default)]
pub struct Resolver {
    retrievers: Vec<Retriever>,
}

impl Resolver {
    pub fn new(retrievers: Vec<Retriever>) -> Self {
        Self { retrievers }
    }

    /// Append a strategy; earlier registrations win on overlap
    pub fn register(&mut self, retriever: Retriever) {
        self.retrievers.push(retriever);
    }

    /// The first registered strategy matching `uri`
    pub fn resolve(&self, uri: &str) -> Result<&Retriever, ResolveError> {
        let retriever = self
            .retrievers
            .iter()
            .find(|r| r.matches(uri))
            .ok_or_else(|| ResolveError::Unresolvable(uri.to_string()))?;
        debug!(uri = %uri, "Resolved URI to a retriever");
        Ok(retriever)
    }

    /// Resolve and fetch in one call
    pub fn read(&self, uri: &str) -> Result<String, ResolveError> {
        Ok(self.resolve(uri)?.read(uri)?)
    }
}
