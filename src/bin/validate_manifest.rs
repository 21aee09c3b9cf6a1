use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::warn;

use bucket_tools::manifest::validate_manifest;

/// validate-manifest - check a bucket manifest
///
/// Fails when a required field is missing or the url field does not parse.
/// Missing recommended fields, an odd-looking version and a malformed hash
/// are reported as warnings only.
#[derive(Parser, Debug)]
#[command(name = "validate-manifest", version, about)]
struct Cli {
    /// Path to the JSON manifest to check
    manifest: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let report = match validate_manifest(&cli.manifest) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    for warning in &report.warnings {
        warn!("{}", warning);
    }
    if !report.missing_required.is_empty() {
        eprintln!(
            "Missing required fields: {}",
            report.missing_required.join(", ")
        );
    }
    if let Some(url) = &report.invalid_url {
        eprintln!("Invalid url field: {}", url);
    }

    if report.is_valid() {
        println!("{} is valid", cli.manifest.display());
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
