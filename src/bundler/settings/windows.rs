//! Windows platform-specific settings.

use serde::{Deserialize, Serialize};

/// Runtime identifier used for the Windows build when none is configured.
pub const DEFAULT_WIN_RUNTIME: &str = "win-x64";

/// Windows installer configuration (`"Win"` section).
///
/// Produces a single Inno Setup installer for one runtime identifier.
///
/// # Configuration
///
/// ```json
/// "Win": {
///   "Icon": "src/App/Assets/app.ico",
///   "Publisher": "Contoso Ltd.",
///   "GUID": "{6F9619FF-8B86-D011-B42D-00C04FC964FF}",
///   "RuntimeIdentifier": "win-x64"
/// }
/// ```
///
/// # See Also
///
/// - [`MacSettings`](super::MacSettings) - macOS disk image configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WinSettings {
    /// Whether Windows packaging runs at all.
    ///
    /// Default: true
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,

    /// Path to the `.ico` used for the installer, relative to the project root.
    ///
    /// A missing file is a warning, not an error.
    ///
    /// Default: `<project dir>/Assets/app.ico` when present
    #[serde(default, alias = "IconIco", skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Publisher shown in Add/Remove Programs.
    ///
    /// Default: `Company`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    /// Publisher website. Overrides the top-level `PublisherUrl`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher_url: Option<String>,

    /// Executable name. Overrides the top-level `Executable`.
    ///
    /// `.exe` is appended when missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executable: Option<String>,

    /// .NET runtime identifier to publish for.
    ///
    /// Default: `win-x64`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_identifier: Option<String>,

    /// Custom Inno Setup script template, relative to the project root.
    ///
    /// Default: None (built-in template)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inno_script: Option<String>,

    /// Inno Setup AppId. Keep it stable across releases so upgrades work.
    ///
    /// Default: None (a temporary id is generated per build, with a warning)
    #[serde(rename = "GUID", default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,

    /// Inno Setup compiler name or path.
    ///
    /// Default: `iscc` on PATH or a standard Inno Setup 6 install location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler: Option<String>,
}

impl Default for WinSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            icon: None,
            publisher: None,
            publisher_url: None,
            executable: None,
            runtime_identifier: None,
            inno_script: None,
            guid: None,
            compiler: None,
        }
    }
}

pub(super) fn enabled_by_default() -> bool {
    true
}

/// Appends `.exe` unless the name already ends with it (case-insensitive).
pub fn windows_executable_name(name: &str) -> String {
    if name.to_ascii_lowercase().ends_with(".exe") {
        name.to_string()
    } else {
        format!("{}.exe", name)
    }
}
