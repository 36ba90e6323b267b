//! Top-level error types for the command line tool.
//!
//! Packaging failures come from [`crate::bundler::Error`]; this module wraps
//! them together with argument errors and attaches recovery hints.

use crate::bundler::Error as PackagingError;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for all CLI operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// Packaging errors
    #[error(transparent)]
    Bundler(#[from] PackagingError),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl BundlerError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            BundlerError::Cli(_) => vec!["Run with --help to see the available options".to_string()],
            BundlerError::Bundler(e) => packaging_suggestions(e)
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

fn packaging_suggestions(error: &PackagingError) -> &'static [&'static str] {
    match error {
        PackagingError::Context { source, .. } => packaging_suggestions(source),
        PackagingError::ConfigParse { .. } => &[
            "Fix the JSON syntax in the configuration file",
            "Delete the file and run again to regenerate the defaults",
        ],
        PackagingError::ProjectNotFound { .. } => &[
            "Run from the directory that contains your .csproj, or pass --root",
            "Pass --project or set \"Project\" in packaging.json",
        ],
        PackagingError::AmbiguousProject { .. } | PackagingError::ProjectMissing(_) => {
            &["Pass --project or set \"Project\" in packaging.json"]
        }
        PackagingError::ExecutableMissing(_) => &[
            "Set \"Executable\" (or Win/Mac \"Executable\") to the name of the published binary",
        ],
        PackagingError::TemplateMissing { .. } => &[
            "Fix the template path in packaging.json or remove it to use the built-in template",
        ],
        _ => &[],
    }
}
