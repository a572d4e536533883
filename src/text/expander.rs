//! Reference expansion
//!
//! Expands a passage URN (possibly a range) into the full set of
//! deepest-level references it covers. Expanding at the deepest level is
//! what makes containment transitive: an annotation on a whole poem keeps
//! surfacing when a single line within it is requested.

use std::collections::BTreeSet;

use thiserror::Error;

use super::provider::{ProviderError, TextProvider};
use crate::urn::CtsUrn;

/// Errors from reference expansion
#[derive(Debug, Error)]
pub enum ExpansionError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Citation scheme for {0} is empty")]
    EmptyCitation(String),
}

/// Expand `urn` into every deepest-level reference it covers.
///
/// A single reference covers itself and everything nested under it; a
/// range covers every leaf from the first contained in its start through
/// the last contained in its end, inclusive, in document order. A URN with
/// no passage part covers the whole work. Endpoints unknown to the text,
/// or an inverted range, yield an empty set rather than an error.
///
/// Returned strings are full URN strings, so sets from different works
/// never intersect.
pub fn expand(
    provider: &dyn TextProvider,
    urn: &CtsUrn,
) -> Result<BTreeSet<String>, ExpansionError> {
    let text = provider.get_text(urn)?;
    let depth = text.citation.depth();
    if depth == 0 {
        return Err(ExpansionError::EmptyCitation(text.urn.to_string()));
    }

    let leaves = provider.valid_reffs(urn, depth)?;
    let base = text.urn.up_to_version();

    let selected: Vec<&String> = match &urn.reference {
        None => leaves.iter().collect(),
        Some(reference) => match &reference.end {
            None => leaves
                .iter()
                .filter(|leaf| contains(&reference.start, leaf))
                .collect(),
            Some(end) => {
                let from = leaves.iter().position(|leaf| contains(&reference.start, leaf));
                let to = leaves.iter().rposition(|leaf| contains(end, leaf));
                match (from, to) {
                    (Some(from), Some(to)) if from <= to => leaves[from..=to].iter().collect(),
                    _ => Vec::new(),
                }
            }
        },
    };

    Ok(selected
        .into_iter()
        .map(|reference| base.with_reference(reference).to_string())
        .collect())
}

/// True when `leaf` equals `node` or is nested under it ("6.1" contains
/// "6.1.2" but not "6.10.2")
fn contains(node: &str, leaf: &str) -> bool {
    leaf == node
        || (leaf.len() > node.len()
            && leaf.starts_with(node)
            && leaf.as_bytes()[node.len()] == b'.')
}
