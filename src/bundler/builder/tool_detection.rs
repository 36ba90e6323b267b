//! External tool detection.
//!
//! Every lookup goes through [`CommandRunner::find_program`] so tests can
//! substitute fake tools.

use crate::bundler::{
    error::{Error, Result},
    process::CommandRunner,
};
use std::path::PathBuf;

pub const DOTNET_HINT: &str =
    "Install the .NET SDK (https://dotnet.microsoft.com/download) and make sure `dotnet` is on PATH.";

pub const HDIUTIL_HINT: &str = "hdiutil ships with macOS; disk images can only be built on a Mac.";

/// Locate a required tool on PATH.
///
/// # Errors
///
/// [`Error::ToolNotFound`] with `hint` when the tool is not on PATH.
pub fn require_tool(runner: &dyn CommandRunner, name: &str, hint: &str) -> Result<PathBuf> {
    match runner.find_program(name) {
        Some(path) => {
            log::debug!("Found {} at {}", name, path.display());
            Ok(path)
        }
        None => Err(Error::ToolNotFound {
            tool: name.to_string(),
            hint: hint.to_string(),
        }),
    }
}
