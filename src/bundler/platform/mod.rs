//! Platform packagers.
//!
//! - [`windows`] - Inno Setup installers
//! - [`macos`] - `.app` bundles wrapped in drag-to-install disk images

pub mod macos;
pub mod windows;

use std::{fmt, path::PathBuf, str::FromStr};

/// A packaging target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Platform {
    /// Inno Setup `.exe` installer
    Windows,
    /// `.dmg` disk image per runtime identifier
    MacOs,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Windows, Platform::MacOs];

    /// Platform the tool is running on, if it is a packaging target.
    pub fn host() -> Option<Self> {
        if cfg!(windows) {
            Some(Self::Windows)
        } else if cfg!(target_os = "macos") {
            Some(Self::MacOs)
        } else {
            None
        }
    }

    /// Short name used on the command line and for `dist/` subdirectories.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Windows => "win",
            Self::MacOs => "mac",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Windows => "Windows",
            Self::MacOs => "macOS",
        })
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "win" | "windows" => Ok(Self::Windows),
            "mac" | "macos" | "osx" => Ok(Self::MacOs),
            other => Err(format!("unknown platform '{}' (expected win or mac)", other)),
        }
    }
}

/// A finished installer artifact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BundledArtifact {
    /// Platform that produced it
    pub platform: Platform,
    /// Artifact location under `dist/`
    pub path: PathBuf,
    /// Size in bytes
    pub size: u64,
    /// Hex-encoded SHA-256
    pub checksum: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_names() {
        assert_eq!("win".parse::<Platform>(), Ok(Platform::Windows));
        assert_eq!("macOS".parse::<Platform>(), Ok(Platform::MacOs));
        assert!("linux".parse::<Platform>().is_err());
    }
}
