//! Build and bundle orchestration.
//!
//! This module provides the main [`Bundler`] orchestrator that publishes the
//! project and drives the platform packagers.
//!
//! # Overview
//!
//! The bundler:
//! 1. Reads configuration from [`Settings`](crate::bundler::Settings)
//! 2. Determines which platforms to package
//! 3. Delegates to platform-specific modules
//! 4. Calculates sizes and checksums
//! 5. Returns a [`BundleReport`] with artifacts and per-platform failures
//!
//! # Example
//!
//! ```no_run
//! use dotnet_packager::bundler::{Bundler, Platform, Settings, SystemRunner};
//!
//! # fn example(settings: Settings) {
//! let bundler = Bundler::new(settings, &SystemRunner);
//! let report = bundler.bundle_platforms(&[Platform::Windows, Platform::MacOs]);
//!
//! for artifact in &report.artifacts {
//!     println!("Created: {} ({} bytes)", artifact.path.display(), artifact.size);
//!     println!("SHA256: {}", artifact.checksum);
//! }
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`checksum`] - SHA256 checksum calculation for artifacts
//! - [`orchestrator`] - Main [`Bundler`] struct and bundling operations
//! - [`publish`](mod@publish) - `dotnet publish` per runtime identifier
//! - [`tool_detection`] - External tool availability checking

pub mod checksum;
pub mod orchestrator;
pub mod publish;
pub mod tool_detection;

pub use orchestrator::{BundleReport, Bundler};
pub use publish::{BuildArtifact, publish};
