//! Inno Setup compiler execution.

use crate::bundler::{
    error::{Error, Result},
    process::{CommandRunner, ToolCommand, run_checked},
};
use std::path::{Path, PathBuf};

/// Compile `script` into `<output_dir>/<output_base>.exe`.
///
/// The `/O` and `/F` switches override the script's own output settings, so
/// custom templates always land in the expected place.
///
/// # Errors
///
/// - [`Error::ToolFailed`] carrying the compiler log on a non-zero exit
/// - [`Error::ArtifactMissing`] if the compiler reported success without
///   producing the installer
pub fn run_iscc(
    runner: &dyn CommandRunner,
    compiler: &Path,
    script: &Path,
    output_dir: &Path,
    output_base: &str,
) -> Result<PathBuf> {
    log::info!("[inno] Compiling {}", script.display());

    let command = ToolCommand::new(compiler)
        .arg(format!("/O{}", output_dir.display()))
        .arg(format!("/F{}", output_base))
        .arg(script);

    run_checked(runner, &command)?;

    let installer = output_dir.join(format!("{}.exe", output_base));
    if !installer.is_file() {
        return Err(Error::ArtifactMissing(installer));
    }

    Ok(installer)
}
