use clap::Parser;
use std::path::PathBuf;

use seqcheck::metadata;

#[derive(Parser)]
#[command(name = "validate_metadata")]
#[command(about = "Check that every manifest sample ID exists in the metadata table", long_about = None)]
#[command(version)]
struct Cli {
    /// Fixed manifest produced by validate_manifest
    #[arg(value_name = "MANIFEST_FIXED.TSV")]
    manifest_fixed: PathBuf,

    /// Per-sample metadata table (first column #SampleID or SampleID)
    #[arg(value_name = "METADATA.TSV")]
    metadata: PathBuf,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors exit 1, not clap's default 2.
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .format_target(false)
        .init();

    match metadata::validate_metadata(&cli.manifest_fixed, &cli.metadata) {
        Ok(checked) => {
            log::info!(
                "Metadata validation OK: all {} manifest samples exist in {}",
                checked,
                cli.metadata.display()
            );
        }
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}
