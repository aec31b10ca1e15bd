//! Error types for building and serializing DCAT graphs.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while assigning properties or rendering a graph.
///
/// Validation errors surface at the point of assignment; only format selection
/// and writing fail at `to_rdf` time.
#[derive(Debug, Error)]
pub enum DcatError {
    /// A supplied identifier or URI-valued property is not an absolute IRI.
    #[error("Invalid identifier `{value}`: {reason}")]
    InvalidIdentifier { value: String, reason: String },

    /// A language map key is not a well-formed language tag.
    #[error("Invalid language tag `{tag}`: {reason}")]
    InvalidLanguageTag { tag: String, reason: String },

    /// Mutually exclusive temporal fields were both supplied.
    #[error("Conflicting temporal representation: {0}")]
    ConflictingTemporalRepresentation(String),

    /// The requested serialization format is not known.
    #[error("Unsupported format `{0}`")]
    UnsupportedFormat(String),

    /// A date string is not of the form `YYYY-MM-DD`.
    #[error("Invalid date `{value}`: {reason}")]
    InvalidDate { value: String, reason: String },

    /// The start of a period lies after its end.
    #[error("Invalid date interval: start {start} is after end {end}")]
    InvalidDateInterval { start: NaiveDate, end: NaiveDate },

    /// The serializer rejected the graph.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The output writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, DcatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_identifier_display() {
        let err = DcatError::InvalidIdentifier {
            value: "not a uri".to_string(),
            reason: "No scheme found".to_string(),
        };
        assert!(err.to_string().contains("not a uri"));
        assert!(err.to_string().contains("No scheme found"));
    }

    #[test]
    fn test_unsupported_format_display() {
        let err = DcatError::UnsupportedFormat("csv".to_string());
        assert_eq!(err.to_string(), "Unsupported format `csv`");
    }

    #[test]
    fn test_date_interval_display() {
        let err = DcatError::InvalidDateInterval {
            start: NaiveDate::from_ymd_opt(2020, 12, 31).unwrap(),
            end: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("2020-12-31"));
        assert!(msg.contains("2020-01-01"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err: DcatError = io.into();
        assert!(matches!(err, DcatError::Io(_)));
    }
}
