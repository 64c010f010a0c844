use clap::Parser;
use std::path::PathBuf;

use seqcheck::manifest;

#[derive(Parser)]
#[command(name = "validate_manifest")]
#[command(about = "Validate a paired-end sample manifest and rewrite it with absolute paths", long_about = None)]
#[command(version)]
struct Cli {
    /// Input manifest (TSV: sample-id, forward-absolute-filepath, reverse-absolute-filepath)
    #[arg(value_name = "MANIFEST_IN.TSV")]
    manifest_in: PathBuf,

    /// Output path for the fixed manifest
    #[arg(value_name = "MANIFEST_OUT.TSV")]
    manifest_out: PathBuf,
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

    match manifest::validate_and_fix(&cli.manifest_in, &cli.manifest_out) {
        Ok(rows) => {
            log::info!(
                "Manifest validated and fixed ({} samples): {}",
                rows,
                cli.manifest_out.display()
            );
        }
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}
