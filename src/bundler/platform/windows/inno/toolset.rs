//! Inno Setup compiler lookup.

use crate::bundler::{
    error::{Error, Result},
    process::CommandRunner,
};
use std::path::{Path, PathBuf};

/// Default Inno Setup 6 install locations, checked after PATH.
pub const KNOWN_LOCATIONS: [&str; 2] = [
    r"C:\Program Files (x86)\Inno Setup 6\ISCC.exe",
    r"C:\Program Files\Inno Setup 6\ISCC.exe",
];

const ISCC_HINT: &str = "Install Inno Setup 6 (https://jrsoftware.org/isdl.php), add it to PATH \
     or set Win.Compiler in packaging.json.";

/// Locate `iscc`.
///
/// Order: `Win.Compiler` (a path or a program name), then `iscc` on PATH,
/// then [`KNOWN_LOCATIONS`].
pub fn get_inno_compiler(configured: Option<&str>, runner: &dyn CommandRunner) -> Result<PathBuf> {
    if let Some(compiler) = configured {
        let path = Path::new(compiler);
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return runner.find_program(compiler).ok_or_else(|| Error::ToolNotFound {
            tool: compiler.to_string(),
            hint: "Check Win.Compiler in packaging.json.".to_string(),
        });
    }

    if let Some(path) = runner.find_program("iscc") {
        log::debug!("Found iscc at {}", path.display());
        return Ok(path);
    }

    KNOWN_LOCATIONS
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
        .ok_or_else(|| Error::ToolNotFound {
            tool: "iscc".to_string(),
            hint: ISCC_HINT.to_string(),
        })
}
