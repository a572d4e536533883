//! URI resolution
//!
//! Annotation bodies live behind heterogeneous URIs: files on disk, remote
//! HTTP resources, CTS passages. This module maps a URI to the retrieval
//! strategy able to fetch it, first match winning in registration order.

mod resolver;
mod retriever;

pub use resolver::{ResolveError, Resolver};
pub use retriever::{CtsRetriever, HttpRetriever, LocalRetriever, RetrievalError, Retriever};
