//! CTS URN module
//!
//! Parsing, formatting and manipulation of Canonical Text Services URNs.
//!
//! # Format
//!
//! ```text
//! urn:cts:latinLit:phi1294.phi002.perseus-lat2:6.1-6.2
//!         │        │       │      │            └── passage reference (range)
//!         │        │       │      └─────────────── version
//!         │        │       └───────────────────── work
//!         │        └───────────────────────────── textgroup
//!         └─────────────────────────────────────── CTS namespace
//! ```
//!
//! The passage reference is optional (a work-level URN names the whole
//! text), and may be a single dotted reference or a `start-end` range.

mod parser;
mod types;

pub use parser::{parse, UrnParseError};
pub use types::{CtsUrn, Reference};
