//! Error types for packaging operations.
//!
//! Errors fall into four groups: configuration problems, project resolution
//! problems, external tool failures, and filesystem failures. Soft asset
//! problems (missing icons) are never errors; they are logged as warnings.

use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Result type alias for packaging operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while loading configuration, building and packaging.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file exists but is not valid JSON for the expected schema.
    #[error("failed to parse {}: {source}", path.display())]
    ConfigParse {
        /// Path of the configuration file
        path: PathBuf,
        /// Parser detail
        #[source]
        source: serde_json::Error,
    },

    /// Configuration parsed but holds an unusable value.
    #[error("invalid configuration in {}: {reason}", path.display())]
    ConfigInvalid {
        /// Path of the configuration file
        path: PathBuf,
        /// What is wrong
        reason: String,
    },

    /// A configured template file does not exist.
    #[error("{kind} template not found: {}", path.display())]
    TemplateMissing {
        /// Template kind, e.g. "Inno Setup script"
        kind: &'static str,
        /// Expected location
        path: PathBuf,
    },

    /// No project file exists under the search root.
    #[error("no project file found under {} (expected a *.csproj file)", root.display())]
    ProjectNotFound {
        /// Directory that was searched
        root: PathBuf,
    },

    /// More than one project file was found and none is configured.
    #[error(
        "multiple project files found; set \"Project\" in packaging.json or pass --project:\n{}",
        list_paths(candidates)
    )]
    AmbiguousProject {
        /// Every matching project file
        candidates: Vec<PathBuf>,
    },

    /// The configured project file does not exist.
    #[error("project file not found: {}", .0.display())]
    ProjectMissing(PathBuf),

    /// The published output does not contain the expected executable.
    #[error("published executable not found: {} (is the build self-contained?)", .0.display())]
    ExecutableMissing(PathBuf),

    /// A required external tool is not installed or not on PATH.
    #[error("{tool} not found. {hint}")]
    ToolNotFound {
        /// Tool name
        tool: String,
        /// Installation hint
        hint: String,
    },

    /// An external command could not be launched.
    #[error("failed to run {command}: {error}")]
    CommandFailed {
        /// Command that was being launched
        command: String,
        /// Launch error
        error: io::Error,
    },

    /// An external command ran and exited unsuccessfully.
    #[error("command failed ({status}): {command}\n{output}")]
    ToolFailed {
        /// Full command line
        command: String,
        /// Exit status description
        status: String,
        /// Combined stdout/stderr of the tool, verbatim
        output: String,
    },

    /// A packaging tool reported success but produced no artifact.
    #[error("expected artifact was not produced: {}", .0.display())]
    ArtifactMissing(PathBuf),

    /// Filesystem operation failed.
    #[error("{context} {}: {source}", path.display())]
    Fs {
        /// What was being done
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// IO error without path context.
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Directory traversal error.
    #[error("directory traversal failed: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Relative path computation failed.
    #[error(transparent)]
    StripPrefix(#[from] std::path::StripPrefixError),

    /// Error with additional context.
    #[error("{context}: {source}")]
    Context {
        /// Added context
        context: String,
        /// Wrapped error
        #[source]
        source: Box<Error>,
    },

    /// Generic error.
    #[error("{0}")]
    GenericError(String),
}

fn list_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Adds path context to raw IO results.
pub trait ErrorExt<T> {
    /// Wraps an IO error with a description of the operation and the path.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Adds free-form context to results and options.
pub trait Context<T> {
    /// Attaches a static context message.
    fn context<C: Display>(self, context: C) -> Result<T>;

    /// Attaches a lazily built context message.
    fn with_context<C: Display, F: FnOnce() -> C>(self, f: F) -> Result<T>;
}

impl<T> Context<T> for Result<T> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.map_err(|e| Error::Context {
            context: context.to_string(),
            source: Box::new(e),
        })
    }

    fn with_context<C: Display, F: FnOnce() -> C>(self, f: F) -> Result<T> {
        self.map_err(|e| Error::Context {
            context: f().to_string(),
            source: Box::new(e),
        })
    }
}

impl<T> Context<T> for Option<T> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }

    fn with_context<C: Display, F: FnOnce() -> C>(self, f: F) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(f().to_string()))
    }
}

/// Returns early with a [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguous_project_lists_every_candidate() {
        let err = Error::AmbiguousProject {
            candidates: vec![PathBuf::from("a/One.csproj"), PathBuf::from("b/Two.csproj")],
        };
        let msg = err.to_string();
        assert!(msg.contains("a/One.csproj"));
        assert!(msg.contains("b/Two.csproj"));
    }

    #[test]
    fn context_wraps_message() {
        let res: Result<()> = Err(Error::GenericError("boom".into()));
        let msg = res.context("packaging Windows").unwrap_err().to_string();
        assert_eq!(msg, "packaging Windows: boom");
    }
}
