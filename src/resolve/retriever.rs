//! Retrieval strategies
//!
//! Closed set of strategies able to fetch an annotation body by URI: local
//! files under a root directory, remote HTTP(S) resources, and CTS
//! passages via a GetPassage endpoint. Every read is a one-shot blocking
//! fetch: no caching, no retry, failures propagate to the caller.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

/// Errors from a single retrieval attempt
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Path escapes retriever root: {0}")]
    OutsideRoot(String),
}

/// A retrieval strategy
#[derive(Debug)]
pub enum Retriever {
    Local(LocalRetriever),
    Http(HttpRetriever),
    Cts(CtsRetriever),
}

impl Retriever {
    /// Whether this strategy can fetch `uri`
    pub fn matches(&self, uri: &str) -> bool {
        match self {
            Retriever::Local(r) => r.matches(uri),
            Retriever::Http(r) => r.matches(uri),
            Retriever::Cts(r) => r.matches(uri),
        }
    }

    /// Fetch the contents of `uri`
    pub fn read(&self, uri: &str) -> Result<String, RetrievalError> {
        match self {
            Retriever::Local(r) => r.read(uri),
            Retriever::Http(r) => r.read(uri),
            Retriever::Cts(r) => r.read(uri),
        }
    }
}

/// Serves files under a fixed root directory
#[derive(Debug)]
pub struct LocalRetriever {
    root: PathBuf,
}

impl LocalRetriever {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve `uri` under the root; `..` segments must not escape it
    fn absolute(&self, uri: &str) -> Option<PathBuf> {
        let root = self.root.canonicalize().ok()?;
        let joined = root.join(uri).canonicalize().ok()?;
        joined.starts_with(&root).then_some(joined)
    }

    pub fn matches(&self, uri: &str) -> bool {
        self.absolute(uri).map(|p| p.is_file()).unwrap_or(false)
    }

    pub fn read(&self, uri: &str) -> Result<String, RetrievalError> {
        let path = self
            .absolute(uri)
            .ok_or_else(|| RetrievalError::OutsideRoot(uri.to_string()))?;
        Ok(fs::read_to_string(path)?)
    }
}

/// Fetches http(s) and protocol-relative URIs
#[derive(Debug)]
pub struct HttpRetriever {
    client: reqwest::blocking::Client,
}

impl HttpRetriever {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn matches(&self, uri: &str) -> bool {
        uri.starts_with("http://") || uri.starts_with("https://") || uri.starts_with("//")
    }

    pub fn read(&self, uri: &str) -> Result<String, RetrievalError> {
        // Protocol-relative URIs default to https
        let url = match uri.strip_prefix("//") {
            Some(rest) => format!("https://{}", rest),
            None => uri.to_string(),
        };
        debug!(url = %url, "Fetching remote resource");
        let response = self.client.get(&url).send()?.error_for_status()?;
        Ok(response.text()?)
    }
}

impl Default for HttpRetriever {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetches CTS passages through a GetPassage endpoint
#[derive(Debug)]
pub struct CtsRetriever {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl CtsRetriever {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn matches(&self, uri: &str) -> bool {
        uri.starts_with("urn:cts:")
    }

    pub fn read(&self, uri: &str) -> Result<String, RetrievalError> {
        let url = format!(
            "{}?request=GetPassage&urn={}",
            self.endpoint,
            urlencoding::encode(uri)
        );
        debug!(url = %url, "Fetching CTS passage");
        let response = self.client.get(&url).send()?.error_for_status()?;
        Ok(response.text()?)
    }
}
