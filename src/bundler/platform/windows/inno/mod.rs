//! Windows installer creation with Inno Setup.
//!
//! # Module Organization
//!
//! - `template` - built-in `.iss` script
//! - `toolset` - `iscc` lookup
//! - `script` - script rendering
//! - `build` - `iscc` execution
//! - `utils` - AppId and naming helpers

mod build;
mod script;
mod template;
mod toolset;
mod utils;

pub use script::{ScriptContext, generate_iss_script, inno_tokens};
pub use template::ISS_TEMPLATE;
pub use toolset::{KNOWN_LOCATIONS, get_inno_compiler};
pub use utils::{inno_app_id, installer_base_name};

use crate::bundler::{
    builder::publish,
    error::{Error, Result},
    process::CommandRunner,
    settings::{Settings, non_empty},
    utils::fs,
};
use std::path::PathBuf;

/// Bundle the project as an Inno Setup installer.
///
/// # Process
///
/// 1. Locate the compiler (before building, so a missing tool fails fast)
/// 2. Publish for `Win.RuntimeIdentifier`
/// 3. Check the published executable exists
/// 4. Render the script into `<work>/windows/installer.iss`
/// 5. Compile to `dist/win/<Product>-Setup-<Version>.exe`
///
/// # Returns
///
/// Vector containing the path to the installer.
pub fn bundle_project(settings: &Settings, runner: &dyn CommandRunner) -> Result<Vec<PathBuf>> {
    log::info!("Building Windows installer for {}", settings.product_name());

    let compiler = get_inno_compiler(non_empty(&settings.windows().compiler), runner)?;

    let rid = settings.windows_runtime_identifier();
    let build = publish(settings, runner, &rid)?;

    let executable = settings.windows_executable();
    let exe_path = build.publish_dir.join(&executable);
    if !exe_path.is_file() {
        return Err(Error::ExecutableMissing(exe_path));
    }

    let output_dir = settings.dist_directory().join("win");
    fs::create_dir_all(&output_dir, false)?;
    let script_dir = settings.work_directory().join("windows");
    fs::create_dir_all(&script_dir, true)?;

    let output_base = installer_base_name(settings.product_name(), settings.version_string());
    let context = ScriptContext {
        build: &build,
        executable: &executable,
        output_dir: &output_dir,
        output_base: &output_base,
    };
    let script = generate_iss_script(settings, &context, &script_dir)?;

    let installer = build::run_iscc(runner, &compiler, &script, &output_dir, &output_base)?;

    log::info!("✓ Created Windows installer: {}", installer.display());

    Ok(vec![installer])
}
