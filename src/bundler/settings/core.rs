//! Core Settings struct and implementations.

use super::{
    MacSettings, PackagingConfig, RuntimeIdentifier, WinSettings, loader::fill_derived_defaults,
    package::non_empty,
};
use std::path::{Path, PathBuf};

/// Effective settings for one packaging run.
///
/// Holds the fully defaulted configuration together with everything resolved
/// at startup: project root, project file, version and output locations.
/// Derived defaults are filled once on construction; the accessors only read.
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder).
///
/// # Examples
///
/// ```no_run
/// use dotnet_packager::bundler::{PackagingConfig, SettingsBuilder};
///
/// # fn example() -> dotnet_packager::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_root("/src/notepad")
///     .project_file("/src/notepad/Notepad.csproj")
///     .config(PackagingConfig {
///         product: "Notepad".into(),
///         company: "Contoso".into(),
///         ..Default::default()
///     })
///     .version("1.2.0")
///     .build()?;
/// assert_eq!(settings.product_name(), "Notepad");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Packaging configuration with defaults applied.
    config: PackagingConfig,

    /// Windows section (defaulted).
    windows: WinSettings,

    /// macOS section (defaulted).
    macos: MacSettings,

    /// Directory containing `packaging.json`; relative config paths resolve here.
    project_root: PathBuf,

    /// Absolute path of the `.csproj` being packaged.
    project_file: PathBuf,

    /// Version used in artifact names and metadata.
    version: String,

    /// Final artifacts land here (`dist/win`, `dist/mac`).
    dist_directory: PathBuf,

    /// Scratch space for publish output, rendered scripts and bundles.
    work_directory: PathBuf,
}

impl Settings {
    pub fn product_name(&self) -> &str {
        &self.config.product
    }

    pub fn company_name(&self) -> &str {
        &self.config.company
    }

    pub fn version_string(&self) -> &str {
        &self.version
    }

    pub fn windows(&self) -> &WinSettings {
        &self.windows
    }

    pub fn macos(&self) -> &MacSettings {
        &self.macos
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn project_file(&self) -> &Path {
        &self.project_file
    }

    /// Directory containing the project file.
    pub fn project_dir(&self) -> &Path {
        self.project_file.parent().unwrap_or(&self.project_root)
    }

    pub fn publish_args(&self) -> Vec<String> {
        self.config.publish_args()
    }

    pub fn dist_directory(&self) -> &Path {
        &self.dist_directory
    }

    pub fn work_directory(&self) -> &Path {
        &self.work_directory
    }

    /// Windows executable file name, `.exe` included.
    pub fn windows_executable(&self) -> String {
        self.windows.executable.clone().unwrap_or_default()
    }

    /// Runtime identifier of the Windows build.
    pub fn windows_runtime_identifier(&self) -> RuntimeIdentifier {
        RuntimeIdentifier::new(self.windows.runtime_identifier.as_deref().unwrap_or_default())
    }

    /// Publisher shown by the Windows installer.
    pub fn windows_publisher(&self) -> &str {
        non_empty(&self.windows.publisher).unwrap_or_default()
    }

    pub fn windows_publisher_url(&self) -> Option<&str> {
        non_empty(&self.windows.publisher_url)
    }

    /// macOS executable name inside `Contents/MacOS`, without `.exe`.
    pub fn macos_executable(&self) -> String {
        self.macos.executable.clone().unwrap_or_default()
    }

    /// macOS runtime identifiers, one disk image each.
    pub fn macos_runtime_identifiers(&self) -> Vec<RuntimeIdentifier> {
        self.macos
            .runtime_identifiers()
            .into_iter()
            .map(RuntimeIdentifier::new)
            .collect()
    }

    /// `.app` directory name without the extension.
    pub fn macos_app_name(&self) -> &str {
        non_empty(&self.macos.app_name).unwrap_or_default()
    }

    pub fn macos_volume_name(&self) -> &str {
        non_empty(&self.macos.volume_name).unwrap_or_default()
    }

    pub fn macos_bundle_identifier(&self) -> String {
        self.macos.bundle_identifier.clone().unwrap_or_default()
    }

    pub fn macos_minimum_system_version(&self) -> &str {
        non_empty(&self.macos.minimum_system_version).unwrap_or_default()
    }

    pub fn macos_publisher_url(&self) -> Option<&str> {
        non_empty(&self.macos.publisher_url)
    }

    /// Resolves a config-relative path against the project root.
    ///
    /// Absolute paths are returned unchanged.
    pub fn resolve_path(&self, relative: &str) -> PathBuf {
        self.project_root.join(relative)
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        config: PackagingConfig,
        project_root: PathBuf,
        project_file: PathBuf,
        version: String,
        dist_directory: PathBuf,
        work_directory: PathBuf,
    ) -> Self {
        let mut config = config;
        let stem = project_file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| config.product.clone());
        fill_derived_defaults(&mut config, &stem);

        let windows = config.win.clone().unwrap_or_default();
        let macos = config.mac.clone().unwrap_or_default();
        Self {
            config,
            windows,
            macos,
            project_root,
            project_file,
            version,
            dist_directory,
            work_directory,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::bundler::{MacSettings, PackagingConfig, SettingsBuilder, WinSettings};

    fn settings(config: PackagingConfig) -> super::Settings {
        SettingsBuilder::new()
            .project_root("/repo")
            .project_file("/repo/src/Notepad/Notepad.csproj")
            .config(config)
            .version("1.2.0")
            .build()
            .unwrap()
    }

    #[test]
    fn executable_defaults_to_project_stem() {
        let s = settings(PackagingConfig {
            product: "Notepad Pro".into(),
            ..Default::default()
        });
        assert_eq!(s.windows_executable(), "Notepad.exe");
        assert_eq!(s.macos_executable(), "Notepad");
    }

    #[test]
    fn platform_values_override_shared_ones() {
        let s = settings(PackagingConfig {
            product: "Notepad".into(),
            company: "Contoso".into(),
            executable: Some("Shared.exe".into()),
            publisher_url: Some("https://contoso.example".into()),
            win: Some(WinSettings {
                executable: Some("NotepadWin".into()),
                publisher: Some("Contoso Ltd.".into()),
                ..Default::default()
            }),
            mac: Some(MacSettings {
                publisher_url: Some("https://mac.contoso.example".into()),
                ..Default::default()
            }),
            ..Default::default()
        });
        assert_eq!(s.windows_executable(), "NotepadWin.exe");
        assert_eq!(s.macos_executable(), "Shared");
        assert_eq!(s.windows_publisher(), "Contoso Ltd.");
        assert_eq!(s.windows_publisher_url(), Some("https://contoso.example"));
        assert_eq!(s.macos_publisher_url(), Some("https://mac.contoso.example"));
    }

    #[test]
    fn macos_defaults() {
        let s = settings(PackagingConfig {
            product: "Notepad".into(),
            company: "Contoso".into(),
            ..Default::default()
        });
        assert_eq!(s.macos_bundle_identifier(), "com.contoso.notepad");
        assert_eq!(s.macos_app_name(), "Notepad");
        assert_eq!(s.macos_volume_name(), "Notepad");
        assert_eq!(s.macos_minimum_system_version(), "11.0");
        assert_eq!(s.windows_runtime_identifier().as_str(), "win-x64");
        let rids: Vec<String> = s
            .macos_runtime_identifiers()
            .iter()
            .map(|r| r.arch().to_string())
            .collect();
        assert_eq!(rids, vec!["arm64", "x64"]);
    }

    #[test]
    fn shared_bundle_identifier_is_used_for_macos() {
        let s = settings(PackagingConfig {
            product: "Notepad".into(),
            company: "Contoso".into(),
            bundle_identifier: Some("org.custom.notepad".into()),
            ..Default::default()
        });
        assert_eq!(s.macos_bundle_identifier(), "org.custom.notepad");
    }
}
