//! Pre-flight validators for paired-end sequencing runs.
//!
//! Two checks run before a workflow touches any reads:
//! - [`manifest`]: structural validation of the sample manifest, rewriting
//!   the forward/reverse FASTQ paths as absolute paths.
//! - [`metadata`]: every sample ID in the fixed manifest must exist in the
//!   per-sample metadata table.
//!
//! All validation lives here as plain functions returning [`error::Result`];
//! the `validate_manifest` and `validate_metadata` binaries only translate
//! results into exit codes and messages.

pub mod error;
pub mod manifest;
pub mod metadata;
