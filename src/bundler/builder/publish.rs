//! `dotnet publish` invocation.
//!
//! Produces one self-contained, single-file build per runtime identifier under
//! `<work>/publish/<rid>`.

use super::tool_detection::{DOTNET_HINT, require_tool};
use crate::bundler::{
    error::Result,
    process::{CommandRunner, ToolCommand, run_checked},
    settings::{RuntimeIdentifier, Settings},
    utils::fs,
};
use std::path::PathBuf;

/// Published output for one runtime identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildArtifact {
    pub runtime: RuntimeIdentifier,
    pub publish_dir: PathBuf,
}

/// Builds the project for `rid`.
///
/// The publish directory is recreated first. Debug symbol files (`*.pdb`) are
/// removed from the output afterwards.
///
/// # Errors
///
/// - [`Error::ToolNotFound`](crate::bundler::Error::ToolNotFound) when `dotnet` is not on PATH
/// - [`Error::ToolFailed`](crate::bundler::Error::ToolFailed) with the build log on a failed build
pub fn publish(
    settings: &Settings,
    runner: &dyn CommandRunner,
    rid: &RuntimeIdentifier,
) -> Result<BuildArtifact> {
    let dotnet = require_tool(runner, "dotnet", DOTNET_HINT)?;

    let publish_dir = settings.work_directory().join("publish").join(rid.as_str());
    fs::create_dir_all(&publish_dir, true)?;

    log::info!(
        "[build] Publishing {} for {} (version {})",
        settings.project_file().display(),
        rid,
        settings.version_string()
    );

    let command = ToolCommand::new(&dotnet)
        .arg("publish")
        .arg(settings.project_file())
        .args(["-r", rid.as_str()])
        .arg("-o")
        .arg(&publish_dir)
        .args(["--self-contained", "true", "-p:PublishSingleFile=true"])
        .arg(format!("-p:Version={}", settings.version_string()))
        .args(settings.publish_args())
        .current_dir(settings.project_dir());

    run_checked(runner, &command)?;

    remove_debug_symbols(&publish_dir)?;

    log::info!("✓ Published {} to {}", rid, publish_dir.display());

    Ok(BuildArtifact {
        runtime: rid.clone(),
        publish_dir,
    })
}

fn remove_debug_symbols(dir: &std::path::Path) -> Result<()> {
    for entry in walkdir::WalkDir::new(dir) {
        let entry = entry?;
        let is_pdb = entry
            .path()
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdb"));
        if entry.file_type().is_file() && is_pdb {
            log::debug!("Removing {}", entry.path().display());
            fs::remove_file(entry.path())?;
        }
    }
    Ok(())
}
