//! Nemo annotation query layer
//!
//! Associates external resources (images, treebanks, research objects) with
//! passages of texts addressed by CTS URNs, and answers "which annotations
//! touch this passage or range?".
//!
//! # Modules
//!
//! - `urn`: CTS URN parsing and formatting
//! - `text`: citation schemes, text providers, reference expansion
//! - `annotations`: annotation records, the two-phase store, the query engine
//! - `resolve`: URI resolution to retrieval strategies
//! - `config`: startup configuration for the retriever stack
//!
//! # Usage
//!
//! ```ignore
//! use nemo_query::annotations::{AnnotationStoreBuilder, QueryOptions};
//!
//! let mut builder = AnnotationStoreBuilder::new();
//! builder.add(
//!     "urn:cts:latinLit:phi1294.phi002.perseus-lat2:6.1",
//!     "treebanks/treebank1.xml",
//!     "dc:treebank",
//! )?;
//! let store = builder.process(&provider);
//!
//! let (hits, annotations) = store.query(
//!     &provider,
//!     Some(&["urn:cts:latinLit:phi1294.phi002.perseus-lat2:6.1-6.2"]),
//!     &QueryOptions::default(),
//! )?;
//! ```

pub mod annotations;
pub mod config;
pub mod resolve;
pub mod text;
pub mod urn;
