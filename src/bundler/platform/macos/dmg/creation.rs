//! Core DMG creation logic using hdiutil.
//!
//! Handles the DMG workflow:
//! - Staging the bundle in a temporary directory
//! - Creating the Applications symlink
//! - Running hdiutil to generate a compressed (UDZO) image

use crate::bundler::{
    error::{Context, Error, Result},
    process::{CommandRunner, ToolCommand, run_checked},
    settings::{RuntimeIdentifier, Settings},
    utils::fs,
};
use std::path::{Path, PathBuf};

/// `<Product>-<Version>-<arch>.dmg`
pub fn dmg_file_name(product: &str, version: &str, rid: &RuntimeIdentifier) -> String {
    format!("{}-{}-{}.dmg", product, version, rid.arch())
}

/// Create a DMG from an `.app` bundle using hdiutil.
///
/// # DMG Creation Steps
/// 1. Create temporary staging directory using tempfile crate
/// 2. Copy .app bundle to staging directory
/// 3. Create Applications symlink: `staging/Applications -> /Applications`
/// 4. Run `hdiutil create -fs HFS+ ... -format UDZO`
/// 5. Verify the image exists
/// 6. Automatic cleanup (tempfile handles it)
///
/// # Returns
/// PathBuf to created DMG file under `dist/mac`
pub fn create_dmg(
    settings: &Settings,
    runner: &dyn CommandRunner,
    hdiutil: &Path,
    app_bundle: &Path,
    rid: &RuntimeIdentifier,
) -> Result<PathBuf> {
    let output_dir = settings.dist_directory().join("mac");
    fs::create_dir_all(&output_dir, false)?;

    let dmg_path = output_dir.join(dmg_file_name(
        settings.product_name(),
        settings.version_string(),
        rid,
    ));
    fs::remove_file(&dmg_path)?;

    let temp_dir = tempfile::Builder::new()
        .prefix("dmg-staging-")
        .tempdir()
        .map_err(|e| {
            Error::GenericError(format!(
                "Failed to create temporary directory for DMG contents: {}",
                e
            ))
        })?;
    let staging_path = temp_dir.path();

    let app_name = app_bundle
        .file_name()
        .ok_or_else(|| Error::GenericError("Invalid app bundle path".into()))?;
    let staged_app = staging_path.join(app_name);

    log::debug!("Copying .app to staging: {}", staged_app.display());
    fs::copy_dir(app_bundle, &staged_app).with_context(|| {
        format!(
            "copying .app bundle to staging directory: {}",
            staged_app.display()
        )
    })?;

    #[cfg(unix)]
    {
        use crate::bundler::error::ErrorExt;

        let applications_link = staging_path.join("Applications");
        fs::symlink_dir(Path::new("/Applications"), &applications_link)
            .fs_context("creating Applications symlink", &applications_link)?;
    }

    log::info!("[mac] Creating {}", dmg_path.display());

    let command = ToolCommand::new(hdiutil)
        .args(["create", "-fs", "HFS+", "-srcfolder"])
        .arg(staging_path)
        .arg("-volname")
        .arg(settings.macos_volume_name())
        .args(["-ov", "-format", "UDZO"])
        .arg(&dmg_path);

    run_checked(runner, &command)?;

    if !dmg_path.is_file() {
        return Err(Error::ArtifactMissing(dmg_path));
    }

    log::info!("✓ Created DMG: {}", dmg_path.display());

    drop(temp_dir);

    Ok(dmg_path)
}
