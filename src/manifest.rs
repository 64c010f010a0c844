// Manifest validation and repair.
//
// The manifest is a TSV of (sample-id, forward-absolute-filepath,
// reverse-absolute-filepath). Rows frequently arrive with quoted or
// relative paths; this module checks structure, verifies that both FASTQ
// files exist, and rewrites every row with absolute paths. Nothing is
// written until the whole manifest validates.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ValidateError};

/// Required column count: sample-id, forward path, reverse path.
pub const MANIFEST_COLUMNS: usize = 3;

/// Validate `manifest_in` and write the fixed manifest to `manifest_out`.
///
/// Returns the number of data rows written. The header is copied verbatim;
/// blank lines and `#`-comment rows are dropped. Fails on the first
/// malformed row or missing FASTQ without creating the output file.
pub fn validate_and_fix(manifest_in: &Path, manifest_out: &Path) -> Result<usize> {
    if !manifest_in.exists() {
        return Err(ValidateError::MissingFile {
            path: manifest_in.to_path_buf(),
        });
    }
    let contents = fs::read_to_string(manifest_in).map_err(|source| ValidateError::Io {
        path: manifest_in.to_path_buf(),
        source,
    })?;

    let mut lines = contents.lines().enumerate();
    let header = loop {
        match lines.next() {
            Some((_, line)) if line.trim().is_empty() => continue,
            Some((_, line)) => break line,
            None => return Err(ValidateError::EmptyManifest),
        }
    };

    let mut fixed = vec![header.to_string()];
    let mut rows = 0usize;
    for (idx, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields[0].starts_with('#') {
            continue;
        }
        if fields.len() < MANIFEST_COLUMNS {
            return Err(ValidateError::MalformedRow { line: idx + 1 });
        }
        let forward = checked_absolute(fix_path(fields[1]))?;
        let reverse = checked_absolute(fix_path(fields[2]))?;
        fixed.push(format!(
            "{}\t{}\t{}",
            fields[0],
            forward.display(),
            reverse.display()
        ));
        rows += 1;
    }

    write_fixed(manifest_out, &fixed)?;
    Ok(rows)
}

/// Normalize a path field: trim whitespace, then strip at most one leading
/// and one trailing quote character (`"` or `'`), independently.
///
/// This is deliberately not a CSV quoting parser; manifests in the wild
/// carry a single stray layer of shell quoting and nothing more.
pub fn fix_path(raw: &str) -> &str {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix(['"', '\'']).unwrap_or(trimmed);
    trimmed.strip_suffix(['"', '\'']).unwrap_or(trimmed)
}

/// Check that `raw` exists on disk and return it as an absolute path.
///
/// Absolutization is lexical (current dir join + normalization); symlinks
/// are not resolved, matching what downstream tools expect in the manifest.
fn checked_absolute(raw: &str) -> Result<PathBuf> {
    let path = Path::new(raw);
    if !path.exists() {
        return Err(ValidateError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    std::path::absolute(path).map_err(|source| ValidateError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_fixed(manifest_out: &Path, lines: &[String]) -> Result<()> {
    if let Some(parent) = manifest_out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| ValidateError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    let mut body = lines.join("\n");
    body.push('\n');
    fs::write(manifest_out, body).map_err(|source| ValidateError::Io {
        path: manifest_out.to_path_buf(),
        source,
    })
}
