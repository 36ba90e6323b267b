//! Builder for constructing Settings.

use super::{PackagingConfig, Settings};
use std::path::{Path, PathBuf};

/// Output directory name under the project root.
pub const DIST_DIR_NAME: &str = "dist";

/// Work directory name under the project root. Hidden so project discovery
/// never descends into it.
pub const WORK_DIR_NAME: &str = ".packaging";

/// Builder for constructing [`Settings`].
///
/// # Examples
///
/// ```no_run
/// use dotnet_packager::bundler::{PackagingConfig, SettingsBuilder};
///
/// # fn example(config: PackagingConfig) -> dotnet_packager::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_root(".")
///     .project_file("App/App.csproj")
///     .config(config)
///     .version("0.0.0")
///     .dist_directory("out")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    project_root: Option<PathBuf>,
    project_file: Option<PathBuf>,
    config: Option<PackagingConfig>,
    version: Option<String>,
    dist_directory: Option<PathBuf>,
    work_directory: Option<PathBuf>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the project root (directory holding `packaging.json`).
    ///
    /// # Required
    pub fn project_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the resolved project file.
    ///
    /// # Required
    pub fn project_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the defaulted packaging configuration.
    ///
    /// # Required
    pub fn config(mut self, config: PackagingConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the resolved version.
    ///
    /// # Required
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the artifact output directory.
    ///
    /// Default: `<project root>/dist`
    pub fn dist_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.dist_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the scratch directory.
    ///
    /// Default: `<project root>/.packaging`
    pub fn work_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.work_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `project_root`, `project_file`, `config` or
    /// `version` is missing.
    pub fn build(self) -> crate::bundler::Result<Settings> {
        use crate::bundler::error::Context;

        let project_root = self.project_root.context("project_root is required")?;
        let dist_directory = self
            .dist_directory
            .unwrap_or_else(|| project_root.join(DIST_DIR_NAME));
        let work_directory = self
            .work_directory
            .unwrap_or_else(|| project_root.join(WORK_DIR_NAME));

        Ok(Settings::new(
            self.config.context("config is required")?,
            project_root,
            self.project_file.context("project_file is required")?,
            self.version.context("version is required")?,
            dist_directory,
            work_directory,
        ))
    }
}
