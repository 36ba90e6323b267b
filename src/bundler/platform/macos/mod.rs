//! macOS packaging: one `.app` bundle and one disk image per runtime
//! identifier.

pub mod app;
pub mod dmg;

use crate::bundler::{
    builder::{
        publish,
        tool_detection::{HDIUTIL_HINT, require_tool},
    },
    error::{Error, Result},
    process::CommandRunner,
    settings::Settings,
};
use std::path::PathBuf;

/// Bundle the project as drag-to-install disk images.
///
/// # Process
///
/// For each of `Mac.RuntimeIdentifiers`:
/// 1. Publish the project
/// 2. Assemble `<AppName>.app` from the publish output
/// 3. Wrap it in `dist/mac/<Product>-<Version>-<arch>.dmg`
///
/// The first failing runtime aborts the remaining ones.
///
/// # Returns
///
/// Paths of the created disk images, in runtime order.
pub fn bundle_project(settings: &Settings, runner: &dyn CommandRunner) -> Result<Vec<PathBuf>> {
    log::info!("Creating macOS disk images for {}", settings.product_name());

    let runtimes = settings.macos_runtime_identifiers();
    if runtimes.is_empty() {
        return Err(Error::ConfigInvalid {
            path: settings.project_root().to_path_buf(),
            reason: "Mac.RuntimeIdentifiers is empty".to_string(),
        });
    }

    let hdiutil = require_tool(runner, "hdiutil", HDIUTIL_HINT)?;

    let mut images = Vec::with_capacity(runtimes.len());
    for rid in &runtimes {
        let build = publish(settings, runner, rid)?;
        let app_bundle = app::bundle_app(settings, &build)?;
        images.push(dmg::create_dmg(settings, runner, &hdiutil, &app_bundle, rid)?);
    }

    Ok(images)
}
