// Error types for sample sheet validation.
//
// Every failure mode gets its own variant so callers (and tests) can match
// on the kind instead of scraping message text. The binaries render Display
// and exit non-zero; nothing here terminates the process.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for validation operations.
pub type Result<T> = std::result::Result<T, ValidateError>;

/// Number of missing sample IDs listed before the report is truncated.
pub const MISSING_SAMPLES_SHOWN: usize = 50;

/// Errors produced by the manifest and metadata validators.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// An input file required by a validator does not exist.
    #[error("input file not found: {path}")]
    MissingFile { path: PathBuf },

    /// The manifest has no header line.
    #[error("empty manifest: no header line")]
    EmptyManifest,

    /// A manifest data row has fewer than three columns.
    #[error(
        "manifest line {line}: row must have 3 columns: \
         sample-id, forward-absolute-filepath, reverse-absolute-filepath"
    )]
    MalformedRow { line: usize },

    /// A FASTQ path referenced by the manifest does not exist.
    #[error("FASTQ not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The metadata header's first column is not a sample ID column.
    #[error("metadata first column must be '#SampleID' (preferred) or 'SampleID', got '{found}'")]
    InvalidHeader { found: String },

    /// The metadata table contains no sample rows.
    #[error("metadata has no samples")]
    EmptyMetadata,

    /// Manifest sample IDs absent from the metadata table, in manifest order.
    #[error("{}", format_missing(.missing))]
    MissingSamples { missing: Vec<String> },

    /// I/O failure with path context.
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn format_missing(missing: &[String]) -> String {
    let mut msg = String::from("these samples are in the manifest but missing in metadata:");
    for id in missing.iter().take(MISSING_SAMPLES_SHOWN) {
        msg.push_str("\n  - ");
        msg.push_str(id);
    }
    if missing.len() > MISSING_SAMPLES_SHOWN {
        msg.push_str(&format!(
            "\n  ... plus {} more",
            missing.len() - MISSING_SAMPLES_SHOWN
        ));
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_samples_short_list() {
        let err = ValidateError::MissingSamples {
            missing: vec!["S1".to_string(), "S2".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("  - S1"));
        assert!(msg.contains("  - S2"));
        assert!(!msg.contains("more"));
    }

    #[test]
    fn test_missing_samples_truncated_at_fifty() {
        let missing: Vec<String> = (1..=60).map(|i| format!("S{i:02}")).collect();
        let err = ValidateError::MissingSamples { missing };
        let msg = err.to_string();
        assert_eq!(msg.matches("  - ").count(), 50);
        assert!(msg.contains("  - S01"));
        assert!(msg.contains("  - S50"));
        assert!(!msg.contains("  - S51"));
        assert!(msg.ends_with("  ... plus 10 more"));
    }

    #[test]
    fn test_io_error_carries_path() {
        let err = ValidateError::Io {
            path: PathBuf::from("data/manifest.tsv"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().starts_with("data/manifest.tsv: "));
    }
}
