//! Citation schemes
//!
//! The ordered hierarchy of reference levels for a text, outermost first.
//! Martial's epigrams cite as book → poem → line; a reference such as
//! `1.pr.1` addresses one node at the deepest level of that hierarchy.

use serde::{Deserialize, Serialize};

/// One level of a citation hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationLevel {
    /// Level name, e.g. "book" or "line"
    pub name: String,
}

impl CitationLevel {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

/// Ordered hierarchy of citation levels, outermost first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationScheme {
    levels: Vec<CitationLevel>,
}

impl CitationScheme {
    pub fn new(levels: Vec<CitationLevel>) -> Self {
        Self { levels }
    }

    /// Build a scheme from level names, outermost first
    pub fn from_names(names: &[&str]) -> Self {
        Self {
            levels: names.iter().map(|n| CitationLevel::new(n)).collect(),
        }
    }

    /// Number of levels in the hierarchy
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Name of the 1-based `level`, outermost being level 1
    pub fn level_name(&self, level: usize) -> Option<&str> {
        if level == 0 {
            return None;
        }
        self.levels.get(level - 1).map(|l| l.name.as_str())
    }

    pub fn levels(&self) -> &[CitationLevel] {
        &self.levels
    }
}
