//! Metadata and asset discovery from a .NET project file.
//!
//! Only used to infer sensible defaults; the project file is never modified.

use regex::Regex;
use std::path::{Path, PathBuf};

/// Package metadata extracted from a `.csproj`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectMetadata {
    /// `<ApplicationTitle>` or `<AssemblyName>`
    pub product_name: Option<String>,

    /// `<Company>`
    pub company_name: Option<String>,
}

/// Icon files found at the conventional project location.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectAssets {
    /// `<project dir>/Assets/app.ico`
    pub icon_ico: Option<PathBuf>,

    /// `<project dir>/Assets/app.icns`
    pub icon_icns: Option<PathBuf>,
}

/// Read product and company metadata from a project file.
///
/// An unreadable project yields empty metadata; callers fall back to the
/// project file name.
pub fn read_project_metadata(project: &Path) -> ProjectMetadata {
    let text = match std::fs::read_to_string(project) {
        Ok(text) => text,
        Err(e) => {
            log::debug!("Could not read {}: {}", project.display(), e);
            return ProjectMetadata::default();
        }
    };

    parse_project_metadata(&text)
}

/// Extract metadata from project XML text.
///
/// The product name is whichever of `<ApplicationTitle>` and `<AssemblyName>`
/// appears first in the document.
pub fn parse_project_metadata(text: &str) -> ProjectMetadata {
    let title = element_text(text, "ApplicationTitle");
    let assembly = element_text(text, "AssemblyName");
    let product_name = match (title, assembly) {
        (Some(t), Some(a)) => Some(if a.0 < t.0 { a } else { t }),
        (t, a) => t.or(a),
    };

    ProjectMetadata {
        product_name: product_name.map(|(_, name)| name),
        company_name: element_text(text, "Company").map(|(_, name)| name),
    }
}

/// Offset and text of the first non-empty `<tag>` element, ignoring
/// attributes and XML namespaces.
fn element_text(text: &str, tag: &str) -> Option<(usize, String)> {
    let pattern = format!(r"<(?:\w+:)?{tag}(?:\s[^>]*)?>\s*([^<]*?)\s*</(?:\w+:)?{tag}\s*>");
    let re = Regex::new(&pattern).ok()?;

    re.captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| (m.start(), m.as_str().trim()))
        .find(|(_, s)| !s.is_empty() && !s.starts_with("$("))
        .map(|(at, s)| (at, s.to_string()))
}

/// Discover bundle assets from the conventional `Assets/` directory next to
/// the project file.
///
/// Files are only reported if they exist. Missing icons are not an error:
/// packagers fall back to the installer tool's default icon.
pub fn discover_project_assets(project_dir: &Path) -> ProjectAssets {
    let assets_dir = project_dir.join("Assets");

    if !assets_dir.is_dir() {
        log::debug!("Assets directory not found: {}", assets_dir.display());
        return ProjectAssets::default();
    }

    let find = |filename: &str, platform: &str| {
        let icon_path = assets_dir.join(filename);
        if icon_path.is_file() {
            log::debug!("Found {} icon: {}", platform, icon_path.display());
            Some(icon_path)
        } else {
            log::debug!("{} icon not found: {}", platform, icon_path.display());
            None
        }
    };

    ProjectAssets {
        icon_ico: find("app.ico", "Windows"),
        icon_icns: find("app.icns", "macOS"),
    }
}
