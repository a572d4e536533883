//! CTS URN parser
//!
//! Parses CTS URN strings into structured [`CtsUrn`] values.
//!
//! Grammar (simplified):
//! ```text
//! urn       = "urn:cts:" namespace ":" work-part [":" passage]
//! work-part = textgroup ["." work ["." version]]
//! passage   = reference ["-" reference]
//! reference = component ("." component)*
//! ```

use thiserror::Error;

use super::types::{CtsUrn, Reference};

/// URN parsing errors
#[derive(Debug, Error)]
pub enum UrnParseError {
    #[error("Empty URN string")]
    Empty,

    #[error("URN must start with 'urn:cts:'")]
    MissingPrefix,

    #[error("Missing CTS namespace")]
    MissingNamespace,

    #[error("Missing textgroup component")]
    MissingTextgroup,

    #[error("Empty component in work part '{0}'")]
    EmptyWorkComponent(String),

    #[error("Too many components in work part '{0}'")]
    WorkTooDeep(String),

    #[error("Empty passage reference")]
    EmptyReference,

    #[error("Empty range boundary in passage '{0}'")]
    EmptyRangeBoundary(String),

    #[error("Unexpected ':' in passage '{0}'")]
    TrailingContent(String),
}

/// Parse a CTS URN string
pub fn parse(input: &str) -> Result<CtsUrn, UrnParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(UrnParseError::Empty);
    }

    let rest = input
        .strip_prefix("urn:cts:")
        .ok_or(UrnParseError::MissingPrefix)?;

    let mut parts = rest.splitn(3, ':');

    let namespace = match parts.next() {
        Some(ns) if !ns.is_empty() => ns,
        _ => return Err(UrnParseError::MissingNamespace),
    };

    let work_part = match parts.next() {
        Some(wp) if !wp.is_empty() => wp,
        _ => return Err(UrnParseError::MissingTextgroup),
    };

    let components: Vec<&str> = work_part.split('.').collect();
    if components.len() > 3 {
        return Err(UrnParseError::WorkTooDeep(work_part.to_string()));
    }
    if components.iter().any(|c| c.is_empty()) {
        return Err(UrnParseError::EmptyWorkComponent(work_part.to_string()));
    }

    let reference = match parts.next() {
        None => None,
        Some("") => return Err(UrnParseError::EmptyReference),
        Some(passage) if passage.contains(':') => {
            return Err(UrnParseError::TrailingContent(passage.to_string()))
        }
        Some(passage) => Some(parse_reference(passage)?),
    };

    Ok(CtsUrn {
        namespace: namespace.to_string(),
        textgroup: components[0].to_string(),
        work: components.get(1).map(|c| c.to_string()),
        version: components.get(2).map(|c| c.to_string()),
        reference,
    })
}

/// Parse a passage reference, splitting a `start-end` range on its first '-'
fn parse_reference(passage: &str) -> Result<Reference, UrnParseError> {
    match passage.split_once('-') {
        None => Ok(Reference::single(passage)),
        Some((start, end)) => {
            if start.is_empty() || end.is_empty() {
                return Err(UrnParseError::EmptyRangeBoundary(passage.to_string()));
            }
            Ok(Reference::range(start, end))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_urn() {
        let urn = parse("urn:cts:latinLit:phi1294.phi002.perseus-lat2:6.1").unwrap();
        assert_eq!(urn.namespace, "latinLit");
        assert_eq!(urn.textgroup, "phi1294");
        assert_eq!(urn.work.as_deref(), Some("phi002"));
        assert_eq!(urn.version.as_deref(), Some("perseus-lat2"));
        let reference = urn.reference.unwrap();
        assert_eq!(reference.start, "6.1");
        assert!(!reference.is_range());
    }

    #[test]
    fn test_parse_work_level_urn() {
        let urn = parse("urn:cts:latinLit:phi1294.phi002").unwrap();
        assert_eq!(urn.work.as_deref(), Some("phi002"));
        assert!(urn.version.is_none());
        assert!(urn.reference.is_none());
    }

    #[test]
    fn test_parse_textgroup_only() {
        let urn = parse("urn:cts:greekLit:tlg0012").unwrap();
        assert_eq!(urn.textgroup, "tlg0012");
        assert!(urn.work.is_none());
    }

    #[test]
    fn test_parse_range() {
        let urn = parse("urn:cts:latinLit:phi1294.phi002.perseus-lat2:1.pr.1-1.pr.3").unwrap();
        let reference = urn.reference.unwrap();
        assert!(reference.is_range());
        assert_eq!(reference.start, "1.pr.1");
        assert_eq!(reference.end.as_deref(), Some("1.pr.3"));
    }

    #[test]
    fn test_roundtrip() {
        for original in [
            "urn:cts:latinLit:phi1294.phi002.perseus-lat2:6.1",
            "urn:cts:latinLit:phi1294.phi002.perseus-lat2:6.1-6.2",
            "urn:cts:latinLit:phi1294.phi002",
            "urn:cts:greekLit:tlg0012",
        ] {
            let urn = parse(original).unwrap();
            assert_eq!(urn.to_string(), original);
        }
    }

    #[test]
    fn test_error_empty() {
        assert!(matches!(parse(""), Err(UrnParseError::Empty)));
        assert!(matches!(parse("   "), Err(UrnParseError::Empty)));
    }

    #[test]
    fn test_error_missing_prefix() {
        assert!(matches!(
            parse("cts:latinLit:phi1294"),
            Err(UrnParseError::MissingPrefix)
        ));
    }

    #[test]
    fn test_error_missing_textgroup() {
        assert!(matches!(
            parse("urn:cts:latinLit"),
            Err(UrnParseError::MissingTextgroup)
        ));
    }

    #[test]
    fn test_error_empty_work_component() {
        assert!(matches!(
            parse("urn:cts:latinLit:phi1294..perseus-lat2"),
            Err(UrnParseError::EmptyWorkComponent(_))
        ));
    }

    #[test]
    fn test_error_work_too_deep() {
        assert!(matches!(
            parse("urn:cts:latinLit:a.b.c.d:1.1"),
            Err(UrnParseError::WorkTooDeep(_))
        ));
    }

    #[test]
    fn test_error_empty_reference() {
        assert!(matches!(
            parse("urn:cts:latinLit:phi1294.phi002:"),
            Err(UrnParseError::EmptyReference)
        ));
    }

    #[test]
    fn test_error_empty_range_boundary() {
        assert!(matches!(
            parse("urn:cts:latinLit:phi1294.phi002:6.1-"),
            Err(UrnParseError::EmptyRangeBoundary(_))
        ));
    }
}
