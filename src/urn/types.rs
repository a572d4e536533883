//! CTS URN types
//!
//! A CTS URN addresses a text, or a passage within a text, down to an
//! arbitrary depth of its citation hierarchy. `6.1` names poem 1 of book 6;
//! `1.pr.1-1.pr.3` names a range of lines.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::parser::{self, UrnParseError};

/// A parsed CTS URN
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CtsUrn {
    /// CTS namespace, e.g. "latinLit"
    pub namespace: String,
    /// Textgroup identifier, e.g. "phi1294"
    pub textgroup: String,
    /// Work identifier within the textgroup
    pub work: Option<String>,
    /// Version (edition or translation) of the work
    pub version: Option<String>,
    /// Passage reference, absent for work-level URNs
    pub reference: Option<Reference>,
}

/// A passage reference, possibly a `start-end` range
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    /// Start reference, e.g. "6.1"
    pub start: String,
    /// End reference when this is a range
    pub end: Option<String>,
}

impl Reference {
    /// Create a single (non-range) reference
    pub fn single(start: &str) -> Self {
        Self {
            start: start.to_string(),
            end: None,
        }
    }

    /// Create a range reference
    pub fn range(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: Some(end.to_string()),
        }
    }

    /// Whether this reference denotes a range
    pub fn is_range(&self) -> bool {
        self.end.is_some()
    }

    /// Number of dot-separated citation components of the start reference
    pub fn depth(&self) -> usize {
        self.start.split('.').count()
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)?;
        if let Some(ref end) = self.end {
            write!(f, "-{}", end)?;
        }
        Ok(())
    }
}

impl CtsUrn {
    /// The URN stripped of its passage reference (work identity only)
    pub fn up_to_version(&self) -> CtsUrn {
        CtsUrn {
            namespace: self.namespace.clone(),
            textgroup: self.textgroup.clone(),
            work: self.work.clone(),
            version: self.version.clone(),
            reference: None,
        }
    }

    /// Rebuild a URN pointing at a single reference within this work
    pub fn with_reference(&self, reference: &str) -> CtsUrn {
        CtsUrn {
            reference: Some(Reference::single(reference)),
            ..self.up_to_version()
        }
    }

    /// The dotted work component: `textgroup[.work[.version]]`
    pub fn work_component(&self) -> String {
        let mut out = self.textgroup.clone();
        if let Some(ref work) = self.work {
            out.push('.');
            out.push_str(work);
        }
        if let Some(ref version) = self.version {
            out.push('.');
            out.push_str(version);
        }
        out
    }
}

impl fmt::Display for CtsUrn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "urn:cts:{}:{}", self.namespace, self.work_component())?;
        if let Some(ref reference) = self.reference {
            write!(f, ":{}", reference)?;
        }
        Ok(())
    }
}

impl FromStr for CtsUrn {
    type Err = UrnParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

// URNs serialize as their canonical string form.

impl Serialize for CtsUrn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CtsUrn {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn martial() -> CtsUrn {
        CtsUrn {
            namespace: "latinLit".to_string(),
            textgroup: "phi1294".to_string(),
            work: Some("phi002".to_string()),
            version: Some("perseus-lat2".to_string()),
            reference: Some(Reference::single("6.1")),
        }
    }

    #[test]
    fn test_display_full_urn() {
        assert_eq!(
            martial().to_string(),
            "urn:cts:latinLit:phi1294.phi002.perseus-lat2:6.1"
        );
    }

    #[test]
    fn test_display_range() {
        let urn = CtsUrn {
            reference: Some(Reference::range("1.pr.1", "1.pr.3")),
            ..martial()
        };
        assert_eq!(
            urn.to_string(),
            "urn:cts:latinLit:phi1294.phi002.perseus-lat2:1.pr.1-1.pr.3"
        );
    }

    #[test]
    fn test_up_to_version_drops_reference() {
        let work = martial().up_to_version();
        assert!(work.reference.is_none());
        assert_eq!(
            work.to_string(),
            "urn:cts:latinLit:phi1294.phi002.perseus-lat2"
        );
    }

    #[test]
    fn test_with_reference() {
        let leaf = martial().with_reference("6.1.3");
        assert_eq!(
            leaf.to_string(),
            "urn:cts:latinLit:phi1294.phi002.perseus-lat2:6.1.3"
        );
    }

    #[test]
    fn test_reference_depth() {
        assert_eq!(Reference::single("6").depth(), 1);
        assert_eq!(Reference::single("6.1").depth(), 2);
        assert_eq!(Reference::range("1.pr.1", "1.pr.3").depth(), 3);
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&martial()).unwrap();
        assert_eq!(
            json,
            "\"urn:cts:latinLit:phi1294.phi002.perseus-lat2:6.1\""
        );

        let parsed: CtsUrn = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, martial());
    }
}
