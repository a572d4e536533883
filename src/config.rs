//! Configuration for the retriever stack
//!
//! Loaded once at startup and never mutated at runtime. The surrounding
//! application either fills the struct directly, deserializes it from its
//! own configuration file, or pulls it from the environment.

use std::env;
use std::path::PathBuf;

use serde::Deserialize;

use crate::resolve::{CtsRetriever, HttpRetriever, LocalRetriever, Resolver, Retriever};

/// Resolver configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ResolverConfig {
    /// Root directory for locally stored annotation bodies
    pub local_root: Option<PathBuf>,
    /// CTS GetPassage endpoint for urn:cts: resources
    pub cts_endpoint: Option<String>,
    /// Whether remote http(s) resources may be fetched
    pub allow_http: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            local_root: None,
            cts_endpoint: None,
            allow_http: true,
        }
    }
}

impl ResolverConfig {
    pub fn from_env() -> Self {
        Self {
            local_root: env::var("NEMO_LOCAL_ROOT").ok().map(PathBuf::from),
            cts_endpoint: env::var("NEMO_CTS_ENDPOINT").ok(),
            allow_http: env::var("NEMO_ALLOW_HTTP")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true),
        }
    }

    /// Assemble the retriever stack: local files first, then CTS, then HTTP
    pub fn build(&self) -> Resolver {
        let mut resolver = Resolver::default();
        if let Some(ref root) = self.local_root {
            resolver.register(Retriever::Local(LocalRetriever::new(root.clone())));
        }
        if let Some(ref endpoint) = self.cts_endpoint {
            resolver.register(Retriever::Cts(CtsRetriever::new(endpoint)));
        }
        if self.allow_http {
            resolver.register(Retriever::Http(HttpRetriever::new()));
        }
        resolver
    }
}
