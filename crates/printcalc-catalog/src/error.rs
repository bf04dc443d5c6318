//! # Catalog Error Types
//!
//! Error types for reference-data ingestion.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Malformed JSON (serde_json::Error)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError (this module) ← Adds context and categorization          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Caller falls back to Dataset::fallback() and keeps quoting            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only outright undecodable payloads error. Rows with missing price
//! columns, unknown labels or broken ordering are normalized or degraded
//! with a log line instead - reference-data freshness is not this crate's
//! call to veto.

use thiserror::Error;

/// Reference-data ingestion errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The feed payload is not valid JSON for the expected shape.
    #[error("failed to decode price feed: {0}")]
    Decode(#[from] serde_json::Error),

    /// The feed itself reported failure.
    ///
    /// ## When This Occurs
    /// - The pricing spreadsheet backend returns `success: false`
    /// - Its own error message is carried when present
    #[error("price feed rejected the request: {message}")]
    FeedRejected { message: String },
}

/// Convenience type alias for Results with CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CatalogError::FeedRejected {
            message: "quota exceeded".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "price feed rejected the request: quota exceeded"
        );
    }

    #[test]
    fn test_decode_error_wraps_serde() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{nope").unwrap_err();
        let err: CatalogError = parse_err.into();
        assert!(matches!(err, CatalogError::Decode(_)));
    }
}
