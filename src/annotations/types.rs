//! Annotation records
//!
//! An annotation attaches an external resource to a passage of a
//! CTS-addressed text. Records are immutable once constructed; their
//! externally addressable identity is a SHA-256 over the (uri, target,
//! type) tuple.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::resolve::{ResolveError, Resolver};
use crate::urn::CtsUrn;

/// The passage an annotation points at
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Target {
    pub urn: CtsUrn,
}

impl Target {
    pub fn new(urn: CtsUrn) -> Self {
        Self { urn }
    }
}

/// An annotation: an external resource attached to a target passage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotationResource {
    /// URI of the annotation body
    pub uri: String,
    /// Passage the annotation is attached to
    pub target: Target,
    /// URI classifying the annotation kind, e.g. "dc:treebank"
    #[serde(rename = "type")]
    pub type_uri: String,
    /// Hex SHA-256 over uri + target + type
    pub sha: String,
}

impl AnnotationResource {
    pub fn new(uri: &str, target: CtsUrn, type_uri: &str) -> Self {
        let target = Target::new(target);
        let sha = content_sha(uri, &target.urn.to_string(), type_uri);
        Self {
            uri: uri.to_string(),
            target,
            type_uri: type_uri.to_string(),
            sha,
        }
    }

    /// Fetch the annotation body through `resolver`.
    ///
    /// One-shot: no caching, no retry; resolution and fetch failures
    /// propagate as-is.
    pub fn read(&self, resolver: &Resolver) -> Result<String, ResolveError> {
        resolver.read(&self.uri)
    }
}

fn content_sha(uri: &str, target: &str, type_uri: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(uri.as_bytes());
    hasher.update(target.as_bytes());
    hasher.update(type_uri.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> CtsUrn {
        "urn:cts:latinLit:phi1294.phi002.perseus-lat2:6.1"
            .parse()
            .unwrap()
    }

    #[test]
    fn test_sha_is_stable() {
        let a = AnnotationResource::new("treebanks/treebank1.xml", target(), "dc:treebank");
        let b = AnnotationResource::new("treebanks/treebank1.xml", target(), "dc:treebank");
        assert_eq!(a.sha, b.sha);
        assert_eq!(a.sha.len(), 64);
    }

    #[test]
    fn test_sha_covers_whole_tuple() {
        let base = AnnotationResource::new("treebanks/treebank1.xml", target(), "dc:treebank");
        let other_uri = AnnotationResource::new("treebanks/treebank2.xml", target(), "dc:treebank");
        let other_type = AnnotationResource::new("treebanks/treebank1.xml", target(), "dc:image");
        let other_target = AnnotationResource::new(
            "treebanks/treebank1.xml",
            "urn:cts:latinLit:phi1294.phi002.perseus-lat2:1.5"
                .parse()
                .unwrap(),
            "dc:treebank",
        );

        assert_ne!(base.sha, other_uri.sha);
        assert_ne!(base.sha, other_type.sha);
        assert_ne!(base.sha, other_target.sha);
    }

    #[test]
    fn test_serialization_shape() {
        let record = AnnotationResource::new("treebanks/treebank1.xml", target(), "dc:treebank");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["uri"], "treebanks/treebank1.xml");
        assert_eq!(
            json["target"],
            "urn:cts:latinLit:phi1294.phi002.perseus-lat2:6.1"
        );
        assert_eq!(json["type"], "dc:treebank");
        assert_eq!(json["sha"], record.sha);
    }

    #[test]
    fn test_read_through_resolver() {
        use crate::resolve::{LocalRetriever, Retriever};

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("treebank1.xml"), "<treebank/>").unwrap();
        let resolver = Resolver::new(vec![Retriever::Local(LocalRetriever::new(dir.path()))]);

        let record = AnnotationResource::new("treebank1.xml", target(), "dc:treebank");
        assert_eq!(record.read(&resolver).unwrap(), "<treebank/>");

        let missing = AnnotationResource::new("missing.xml", target(), "dc:treebank");
        assert!(matches!(
            missing.read(&resolver),
            Err(ResolveError::Unresolvable(_))
        ));
    }
}
