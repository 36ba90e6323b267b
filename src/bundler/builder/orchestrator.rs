//! Main bundler orchestration and coordination.
//!
//! This module provides the [`Bundler`] orchestrator that runs each selected
//! platform packager and collects the results.

use super::checksum::calculate_sha256;
use crate::bundler::{
    BundledArtifact, Error, Platform, Result, Settings,
    error::ErrorExt,
    platform::{macos, windows},
    process::CommandRunner,
};
use std::path::PathBuf;

/// Outcome of a packaging run.
///
/// Platforms are independent: one failing does not prevent the next from
/// running.
#[derive(Debug, Default)]
pub struct BundleReport {
    /// Artifacts produced, in platform order
    pub artifacts: Vec<BundledArtifact>,
    /// Platforms that failed and why
    pub failures: Vec<(Platform, Error)>,
}

impl BundleReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// True when no platform ran at all.
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty() && self.failures.is_empty()
    }
}

/// Main bundler orchestrator.
///
/// Coordinates the creation of platform installers by delegating to platform
/// modules and collecting results. Every external tool runs through the
/// borrowed [`CommandRunner`].
///
/// # Platform Support
///
/// - **Windows**: Inno Setup `.exe` installer
/// - **macOS**: `.app` bundle inside a `.dmg` per runtime identifier
///
/// # Examples
///
/// ```no_run
/// use dotnet_packager::bundler::{Bundler, Settings, SystemRunner};
///
/// # fn example(settings: Settings) {
/// let bundler = Bundler::new(settings, &SystemRunner);
/// let report = bundler.bundle();
/// if !report.is_success() {
///     std::process::exit(1);
/// }
/// # }
/// ```
pub struct Bundler<'r> {
    settings: Settings,
    runner: &'r dyn CommandRunner,
}

impl std::fmt::Debug for Bundler<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bundler")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl<'r> Bundler<'r> {
    /// Creates a new bundler with the given settings and command runner.
    pub fn new(settings: Settings, runner: &'r dyn CommandRunner) -> Self {
        Self { settings, runner }
    }

    /// Packages the default platforms for this host.
    pub fn bundle(&self) -> BundleReport {
        let platforms = self.default_platforms();
        self.bundle_platforms(&platforms)
    }

    /// Packages the given platforms in order.
    ///
    /// Disabled platforms are skipped. A failing platform is recorded in the
    /// report and the remaining platforms still run.
    pub fn bundle_platforms(&self, platforms: &[Platform]) -> BundleReport {
        let mut report = BundleReport::default();

        for &platform in platforms {
            if !self.is_enabled(platform) {
                log::info!("{} packaging is disabled in the configuration; skipping", platform);
                continue;
            }

            log::info!("=== {} ===", platform);
            match self.bundle_platform(platform) {
                Ok(artifacts) => report.artifacts.extend(artifacts),
                Err(e) => {
                    log::error!("{} packaging failed: {}", platform, e);
                    report.failures.push((platform, e));
                }
            }
        }

        if report.is_empty() {
            log::info!("No packaging targets were executed");
        }

        report
    }

    fn bundle_platform(&self, platform: Platform) -> Result<Vec<BundledArtifact>> {
        let paths = match platform {
            Platform::Windows => windows::bundle_project(&self.settings, self.runner)?,
            Platform::MacOs => macos::bundle_project(&self.settings, self.runner)?,
        };

        paths
            .into_iter()
            .map(|path| describe_artifact(platform, path))
            .collect()
    }

    pub fn is_enabled(&self, platform: Platform) -> bool {
        match platform {
            Platform::Windows => self.settings.windows().enabled,
            Platform::MacOs => self.settings.macos().enabled,
        }
    }

    /// Enabled platforms that can be built on this host.
    ///
    /// The Inno Setup compiler and `hdiutil` are host tools, so only the host
    /// platform is selected. Other enabled platforms are logged as skipped.
    pub fn default_platforms(&self) -> Vec<Platform> {
        let host = Platform::host();

        Platform::ALL
            .into_iter()
            .filter(|&platform| {
                if !self.is_enabled(platform) {
                    return false;
                }
                if host == Some(platform) {
                    return true;
                }
                log::info!(
                    "Skipping {} packaging: not running on {} (use --platform {} to force)",
                    platform,
                    platform,
                    platform.short_name()
                );
                false
            })
            .collect()
    }
}

fn describe_artifact(platform: Platform, path: PathBuf) -> Result<BundledArtifact> {
    let size = std::fs::metadata(&path)
        .fs_context("reading artifact metadata", &path)?
        .len();
    let checksum = calculate_sha256(&path)?;

    Ok(BundledArtifact {
        platform,
        path,
        size,
        checksum,
    })
}
