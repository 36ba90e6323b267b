//! Project file resolution and source-control version lookup.

pub mod version;

use crate::bundler::error::{Error, Result};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

pub use version::{FALLBACK_VERSION, numeric_version, resolve_version, strip_version_prefix};

/// Extension of the project files the locator searches for.
pub const PROJECT_EXTENSION: &str = "csproj";

/// Directory names never searched for project files.
const SKIPPED_DIRS: [&str; 5] = ["bin", "obj", "dist", "node_modules", "Installer"];

/// Where the project file comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProjectSource {
    /// Explicit path (config `Project` or `--project`), relative to the root.
    Configured(PathBuf),
    /// Search the root for exactly one project file.
    Discover,
}

impl ProjectSource {
    /// Picks `Configured` when a non-blank path is given.
    pub fn from_option(path: Option<&Path>) -> Self {
        match path {
            Some(p) if !p.as_os_str().is_empty() => Self::Configured(p.to_path_buf()),
            _ => Self::Discover,
        }
    }

    /// Resolves the project file to an absolute path.
    pub fn resolve(&self, root: &Path) -> Result<PathBuf> {
        match self {
            Self::Configured(path) => {
                let joined = root.join(path);
                let absolute = joined
                    .absolutize()
                    .map(|p| p.into_owned())
                    .unwrap_or(joined);
                if !absolute.is_file() {
                    return Err(Error::ProjectMissing(absolute));
                }
                log::debug!("Using configured project {}", absolute.display());
                Ok(absolute)
            }
            Self::Discover => discover_project(root),
        }
    }
}

/// Finds the single project file under `root`.
///
/// Hidden directories and build output directories are skipped.
///
/// # Errors
///
/// - [`Error::ProjectNotFound`] when there is no match
/// - [`Error::AmbiguousProject`] listing every match when there is more than one
pub fn discover_project(root: &Path) -> Result<PathBuf> {
    let mut candidates = find_project_files(root)?;

    match candidates.len() {
        0 => Err(Error::ProjectNotFound {
            root: root.to_path_buf(),
        }),
        1 => {
            let project = candidates.remove(0);
            log::info!("Found project {}", project.display());
            Ok(project)
        }
        _ => Err(Error::AmbiguousProject { candidates }),
    }
}

/// All project files under `root`, sorted.
pub fn find_project_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped_dir(e));

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(PROJECT_EXTENSION))
        {
            found.push(entry.into_path());
        }
    }

    found.sort();
    Ok(found)
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref())
}

/// Path of `path` relative to `root` with `/` separators, for config files.
///
/// Falls back to the full path when `path` is outside `root`.
pub fn config_relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
