// Metadata cross-check.
//
// Confirms that every sample ID in a fixed manifest has a row in the
// per-sample metadata table. The metadata table is a TSV keyed by sample
// ID in its first column, QIIME-style: the header may spell the column
// `#SampleID` (preferred) or `SampleID`.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Result, ValidateError};

/// Accepted first-column names for the metadata header, preferred first.
pub const HEADER_NAMES: [&str; 2] = ["#SampleID", "SampleID"];

/// Verify that every manifest sample ID exists in the metadata table.
///
/// Returns the number of distinct manifest IDs checked. Fails if either
/// file is missing, the metadata header is wrong, the metadata has no
/// sample rows, or any manifest ID is unknown to the metadata.
pub fn validate_metadata(manifest_fixed: &Path, metadata_tsv: &Path) -> Result<usize> {
    for path in [manifest_fixed, metadata_tsv] {
        if !path.exists() {
            return Err(ValidateError::MissingFile {
                path: path.to_path_buf(),
            });
        }
    }

    let sample_ids = manifest_ids(&read(manifest_fixed)?);
    let (first_col, meta_ids) = metadata_ids(&read(metadata_tsv)?);

    match first_col.as_deref() {
        Some(name) if HEADER_NAMES.contains(&name) => {}
        other => {
            return Err(ValidateError::InvalidHeader {
                found: other.unwrap_or_default().to_string(),
            })
        }
    }
    if meta_ids.is_empty() {
        return Err(ValidateError::EmptyMetadata);
    }

    let known: HashSet<&str> = meta_ids.iter().map(String::as_str).collect();
    let missing: Vec<String> = sample_ids
        .iter()
        .filter(|id| !known.contains(id.as_str()))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(ValidateError::MissingSamples { missing });
    }
    Ok(sample_ids.len())
}

/// Sample IDs from a fixed manifest: first field of every data row,
/// trimmed, deduplicated, in first-occurrence order. The first physical
/// line is the header; blank and `#`-comment rows are skipped. A manifest
/// with no lines at all yields an empty list.
fn manifest_ids(contents: &str) -> Vec<String> {
    let mut lines = contents.lines();
    if lines.next().is_none() {
        return Vec::new();
    }
    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let first = first_field(line);
        if first.starts_with('#') {
            continue;
        }
        let id = first.trim();
        if seen.insert(id.to_string()) {
            ids.push(id.to_string());
        }
    }
    ids
}

/// Metadata header first-column name (trimmed) and the sample ID of every
/// data row, duplicates preserved.
///
/// A row whose first field trims to exactly `#SampleID` is kept as data
/// even though it starts with `#`; every other `#`-prefixed row is a
/// comment. This mirrors the header-detection rule for files that repeat
/// the header line mid-table.
fn metadata_ids(contents: &str) -> (Option<String>, Vec<String>) {
    let mut lines = contents.lines();
    let Some(header) = lines.next() else {
        return (None, Vec::new());
    };
    let first_col = first_field(header).trim().to_string();

    let mut ids = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let first = first_field(line);
        if first.starts_with('#') && first.trim() != HEADER_NAMES[0] {
            continue;
        }
        ids.push(first.trim().to_string());
    }
    (Some(first_col), ids)
}

fn first_field(line: &str) -> &str {
    line.split_once('\t').map_or(line, |(first, _)| first)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ValidateError::Io {
        path: path.to_path_buf(),
        source,
    })
}
