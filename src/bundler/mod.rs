//! Core packaging pipeline.
//!
//! Loads settings, publishes the .NET project per runtime identifier and hands
//! the published output to the platform packagers:
//!
//! - Windows installers (`.exe` via Inno Setup)
//! - macOS disk images (`.dmg` via hdiutil, wrapping a generated `.app`)
//!
//! Every external tool is invoked through [`CommandRunner`] so the whole
//! pipeline can run against a fake in tests.

pub mod builder;
pub mod error;
pub mod platform;
pub mod process;
pub mod settings;
pub mod template;
pub mod utils;

pub use builder::{BundleReport, Bundler};
pub use error::{Error, Result};
pub use platform::{BundledArtifact, Platform};
pub use process::{CommandOutput, CommandRunner, SystemRunner, ToolCommand};
pub use settings::{
    LoadOutcome, LoadedConfig, MacSettings, PackagingConfig, RuntimeIdentifier, Settings,
    SettingsBuilder, WinSettings,
};
