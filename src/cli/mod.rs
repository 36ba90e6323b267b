//! Command line interface for dotnet-packager.
//!
//! Parses arguments, loads the configuration and runs the packaging pipeline.

mod args;

pub use args::{Args, RuntimeConfig};

use crate::{
    bundler::{
        BundleReport, Bundler, CommandRunner, LoadOutcome, SettingsBuilder, SystemRunner,
        settings::ConfigLoader,
    },
    error::{CliError, Result},
    source::resolve_version,
};

/// Main CLI entry point
///
/// Returns the process exit code: 0 when every selected platform succeeded
/// (or the configuration was just created), 1 otherwise.
pub fn run(args: &Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let config = RuntimeConfig::from(args);
    run_with(&config, &SystemRunner)
}

/// Runs the pipeline with a caller-supplied command runner.
pub fn run_with(config: &RuntimeConfig, runner: &dyn CommandRunner) -> Result<i32> {
    let mut loader =
        ConfigLoader::new(config.root()).project_override(config.project().map(Into::into));
    if let Some(path) = config.config_path() {
        loader = loader.config_path(path);
    }

    let loaded = match loader.load_or_create()? {
        LoadOutcome::Created { .. } => return Ok(0),
        LoadOutcome::Loaded(loaded) => loaded,
    };
    log::info!("[config] Loaded {}", loaded.path.display());

    let version = resolve_version(loaded.config.version.as_deref(), config.root(), runner);

    let settings = SettingsBuilder::new()
        .project_root(config.root())
        .project_file(&loaded.project_file)
        .config(loaded.config)
        .version(version)
        .build()?;

    log::info!(
        "Packaging {} {} from {}",
        settings.product_name(),
        settings.version_string(),
        settings.project_file().display()
    );

    let bundler = Bundler::new(settings, runner);
    let report = if config.platforms().is_empty() {
        bundler.bundle()
    } else {
        bundler.bundle_platforms(config.platforms())
    };

    print_summary(&report);

    Ok(if report.is_success() { 0 } else { 1 })
}

fn print_summary(report: &BundleReport) {
    if report.is_empty() {
        return;
    }

    log::info!("=== Summary ===");
    for artifact in &report.artifacts {
        log::info!(
            "✓ {} ({} bytes, sha256 {})",
            artifact.path.display(),
            artifact.size,
            artifact.checksum
        );
    }
    for (platform, error) in &report.failures {
        log::error!("✗ {}: {}", platform, error);
    }
}
