//! macOS platform-specific settings.

use super::{StringOrList, windows::enabled_by_default};
use serde::{Deserialize, Serialize};

/// Runtime identifiers built when `RuntimeIdentifiers` is not configured.
pub const DEFAULT_MAC_RUNTIMES: [&str; 2] = ["osx-arm64", "osx-x64"];

/// `LSMinimumSystemVersion` used when none is configured.
pub const DEFAULT_MINIMUM_SYSTEM_VERSION: &str = "11.0";

/// macOS application bundle and disk image configuration (`"Mac"` section).
///
/// One `.app` bundle and one drag-to-install `.dmg` is produced per runtime
/// identifier.
///
/// # Configuration
///
/// ```json
/// "Mac": {
///   "Icon": "src/App/Assets/app.icns",
///   "BundleIdentifier": "com.contoso.notepad",
///   "RuntimeIdentifiers": ["osx-arm64", "osx-x64"],
///   "Category": "public.app-category.productivity"
/// }
/// ```
///
/// # See Also
///
/// - [`WinSettings`](super::WinSettings) - Windows installer configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MacSettings {
    /// Whether macOS packaging runs at all.
    ///
    /// Default: true
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,

    /// Path to the `.icns` copied into the bundle, relative to the project root.
    ///
    /// A missing file is a warning, not an error.
    ///
    /// Default: `<project dir>/Assets/app.icns` when present
    #[serde(default, alias = "IconIcns", skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Reverse-DNS bundle identifier (CFBundleIdentifier).
    ///
    /// Default: top-level `BundleIdentifier`, else `com.<company>.<product>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_identifier: Option<String>,

    /// Executable name inside `Contents/MacOS`. Overrides the top-level
    /// `Executable`; a trailing `.exe` is dropped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executable: Option<String>,

    /// .NET runtime identifiers to publish for, one disk image each.
    ///
    /// Default: `["osx-arm64", "osx-x64"]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_identifiers: Option<StringOrList>,

    /// Bundle directory name (without `.app`).
    ///
    /// Default: `Product`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,

    /// Custom `Info.plist` template, relative to the project root.
    ///
    /// Default: None (built-in template)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info_plist: Option<String>,

    /// Disk image volume name.
    ///
    /// Default: `Product`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_name: Option<String>,

    /// LSApplicationCategoryType, e.g. `public.app-category.developer-tools`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// LSMinimumSystemVersion.
    ///
    /// Default: `11.0`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_system_version: Option<String>,

    /// Publisher website. Overrides the top-level `PublisherUrl`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher_url: Option<String>,
}

impl Default for MacSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            icon: None,
            bundle_identifier: None,
            executable: None,
            runtime_identifiers: None,
            app_name: None,
            info_plist: None,
            volume_name: None,
            category: None,
            minimum_system_version: None,
            publisher_url: None,
        }
    }
}

impl MacSettings {
    /// Configured runtime identifiers after normalization, or the defaults.
    pub fn runtime_identifiers(&self) -> Vec<String> {
        match &self.runtime_identifiers {
            Some(list) => list.to_vec(),
            None => DEFAULT_MAC_RUNTIMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Drops a trailing `.exe`; macOS apphost binaries have no extension.
pub fn macos_executable_name(name: &str) -> String {
    if name.to_ascii_lowercase().ends_with(".exe") {
        name[..name.len() - 4].to_string()
    } else {
        name.to_string()
    }
}
