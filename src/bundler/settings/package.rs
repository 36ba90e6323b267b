//! Top-level packaging configuration (`packaging.json`).

use super::{MacSettings, WinSettings};
use serde::{Deserialize, Serialize};

/// Arguments passed to `dotnet publish` when `PublishArgs` is not configured.
pub const DEFAULT_PUBLISH_ARGS: [&str; 2] = ["-c", "Release"];

/// Packaging configuration as stored in `packaging.json`.
///
/// Every key except `Product` and `Company` is optional. Missing values are
/// filled in memory by the loader's defaulting pass; the file itself is only
/// written once, on first run.
///
/// # Example
///
/// ```json
/// {
///   "Product": "Notepad",
///   "Company": "Contoso",
///   "Executable": "Notepad",
///   "Project": "src/Notepad/Notepad.csproj",
///   "Win": { "Icon": "src/Notepad/Assets/app.ico" },
///   "Mac": { "RuntimeIdentifiers": ["osx-arm64"] }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackagingConfig {
    /// Product name shown in installers and used in artifact names.
    #[serde(default, alias = "ProductName")]
    pub product: String,

    /// Company or author name.
    #[serde(default, alias = "CompanyName")]
    pub company: String,

    /// Executable name produced by the build, shared by both platforms.
    ///
    /// Default: project file stem
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executable: Option<String>,

    /// Project file path, relative to the project root.
    ///
    /// Default: the single `*.csproj` found under the root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// Version override. When unset the version comes from the nearest git tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Publisher website used by both platforms unless overridden.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher_url: Option<String>,

    /// Bundle identifier shared with `Mac.BundleIdentifier`, which wins when
    /// both are set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_identifier: Option<String>,

    /// Extra `dotnet publish` arguments.
    ///
    /// Default: `["-c", "Release"]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_args: Option<StringOrList>,

    /// Windows installer settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub win: Option<WinSettings>,

    /// macOS disk image settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac: Option<MacSettings>,
}

impl PackagingConfig {
    /// `dotnet publish` arguments after normalization.
    ///
    /// A single string is split on whitespace; list entries are passed as-is.
    pub fn publish_args(&self) -> Vec<String> {
        match &self.publish_args {
            Some(StringOrList::One(line)) => line.split_whitespace().map(String::from).collect(),
            Some(args) => args.to_vec(),
            None => DEFAULT_PUBLISH_ARGS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A JSON value that may be a single string or a list of strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringOrList {
    One(String),
    Many(Vec<String>),
}

impl StringOrList {
    /// Trimmed, non-empty entries.
    pub fn to_vec(&self) -> Vec<String> {
        let items: Vec<&String> = match self {
            Self::One(s) => vec![s],
            Self::Many(list) => list.iter().collect(),
        };
        items
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

impl From<Vec<String>> for StringOrList {
    fn from(list: Vec<String>) -> Self {
        Self::Many(list)
    }
}

/// Treats blank strings as unset.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
