//! Text metadata and reference expansion
//!
//! A text is addressed by a work-level CTS URN and carries a citation
//! scheme (e.g. book → poem → line). Providers resolve work URNs to
//! metadata and enumerate a work's references in document order; the
//! expander turns a passage URN (possibly a range) into the full set of
//! deepest-level references it covers.

mod citation;
mod expander;
mod provider;

pub use citation::{CitationLevel, CitationScheme};
pub use expander::{expand, ExpansionError};
pub use provider::{InMemoryTextProvider, ProviderError, Text, TextProvider};
