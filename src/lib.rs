//! Packaging helper for .NET desktop applications.
//!
//! Builds a .NET project for each target runtime and wraps the output in
//! native installers:
//! - Windows installers (.exe via Inno Setup)
//! - macOS disk images (.dmg via hdiutil, wrapping a generated .app)
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod metadata;
pub mod source;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
