//! Command line argument parsing and validation.

use crate::bundler::Platform;
use clap::Parser;
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Package a .NET desktop application as Windows and macOS installers
#[derive(Parser, Debug)]
#[command(
    name = "dotnet-packager",
    version,
    about = "Package a .NET desktop application as Windows and macOS installers",
    long_about = "Builds a .NET project for each target runtime and wraps the output in a \
Windows Inno Setup installer and/or macOS disk images.

On first run a packaging.json is created next to the project and nothing is built. \
Review it, then run again.

Usage:
  dotnet-packager
  dotnet-packager --root ./MyApp --platform win
  dotnet-packager --project src/App/App.csproj --platform mac --verbose

Artifacts are written to dist/win and dist/mac. Exit code 1 means at least one platform failed."
)]
pub struct Args {
    /// Project root containing packaging.json
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Configuration file, relative to the root
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Project file to package, overriding "Project" and discovery
    #[arg(long, value_name = "PATH")]
    pub project: Option<PathBuf>,

    /// Platform to package: win or mac (repeatable). Default: the host platform
    #[arg(long = "platform", value_name = "PLATFORM", value_parser = parse_platform)]
    pub platforms: Vec<Platform>,

    /// Show tool output and debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_platform(value: &str) -> Result<Platform, String> {
    value.parse()
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if !self.root.is_dir() {
            return Err(format!(
                "Root directory does not exist: {}",
                self.root.display()
            ));
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    root: PathBuf,
    config_path: Option<PathBuf>,
    project: Option<PathBuf>,
    platforms: Vec<Platform>,
    verbose: bool,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        let root = args
            .root
            .absolutize()
            .map(|p| p.into_owned())
            .unwrap_or_else(|_| args.root.clone());

        let mut platforms = args.platforms.clone();
        platforms.sort();
        platforms.dedup();

        Self {
            root,
            config_path: args.config.clone(),
            project: args.project.clone(),
            platforms,
            verbose: args.verbose,
        }
    }
}

impl RuntimeConfig {
    /// Absolute project root
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn project(&self) -> Option<&Path> {
        self.project.as_deref()
    }

    /// Forced platforms; empty means the host default
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Default `env_logger` filter; `RUST_LOG` still takes precedence
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platforms_are_repeatable_and_deduplicated() {
        let args = Args::try_parse_from([
            "dotnet-packager",
            "--platform",
            "mac",
            "--platform",
            "win",
            "--platform",
            "mac",
        ])
        .unwrap();
        let config = RuntimeConfig::from(&args);
        assert_eq!(config.platforms(), &[Platform::Windows, Platform::MacOs]);
    }

    #[test]
    fn unknown_platform_is_rejected() {
        assert!(Args::try_parse_from(["dotnet-packager", "--platform", "linux"]).is_err());
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["dotnet-packager"]).unwrap();
        let config = RuntimeConfig::from(&args);
        assert!(config.root().is_absolute());
        assert!(config.platforms().is_empty());
        assert_eq!(config.log_filter(), "info");
        assert!(args.validate().is_ok());
    }

    #[test]
    fn verbose_switches_filter() {
        let args = Args::try_parse_from(["dotnet-packager", "-v"]).unwrap();
        assert_eq!(RuntimeConfig::from(&args).log_filter(), "debug");
    }
}
