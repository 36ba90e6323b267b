//! dotnet-packager - Windows and macOS installers for .NET desktop applications.
//!
//! This binary reads `packaging.json`, publishes the project and produces
//! installers under `dist/`, with per-platform error reporting.

use dotnet_packager::cli::{self, Args, RuntimeConfig};
use std::process;

fn main() {
    let args = Args::parse_args();

    // Initialize logging
    let filter = RuntimeConfig::from(&args).log_filter();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .format_target(false)
        .init();

    // Run CLI and get exit code
    let exit_code = match cli::run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            for suggestion in e.recovery_suggestions() {
                eprintln!("  hint: {}", suggestion);
            }
            1
        }
    };

    process::exit(exit_code);
}
