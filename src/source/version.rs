//! Version resolution from configuration or git tags.

use crate::bundler::process::{CommandRunner, ToolCommand};
use std::path::Path;

/// Version used when neither a configured version nor a usable tag exists.
pub const FALLBACK_VERSION: &str = "0.0.0";

/// Resolve the version for this run.
///
/// 1. A non-blank configured version wins (prefix stripped).
/// 2. Otherwise the nearest tag reachable from `HEAD`
///    (`git describe --tags --abbrev=0`), prefix stripped.
/// 3. Otherwise [`FALLBACK_VERSION`], with a warning.
///
/// Never fails: a missing git binary, a directory outside a repository and a
/// repository without tags all fall back.
pub fn resolve_version(
    configured: Option<&str>,
    root: &Path,
    runner: &dyn CommandRunner,
) -> String {
    if let Some(version) = configured.map(str::trim).filter(|v| !v.is_empty()) {
        let version = strip_version_prefix(version).unwrap_or(version);
        log::debug!("Using configured version {}", version);
        return version.to_string();
    }

    match nearest_tag(root, runner) {
        Some(tag) => match strip_version_prefix(&tag) {
            Some(version) => {
                log::info!("Version {} (from tag {})", version, tag);
                version.to_string()
            }
            None => {
                log::warn!(
                    "Tag '{}' does not contain a version number; using {}",
                    tag,
                    FALLBACK_VERSION
                );
                FALLBACK_VERSION.to_string()
            }
        },
        None => {
            log::warn!(
                "No git tag found and no Version configured; using {}",
                FALLBACK_VERSION
            );
            FALLBACK_VERSION.to_string()
        }
    }
}

fn nearest_tag(root: &Path, runner: &dyn CommandRunner) -> Option<String> {
    let command = ToolCommand::new("git")
        .args(["describe", "--tags", "--abbrev=0"])
        .current_dir(root);

    match runner.run(&command) {
        Ok(output) if output.success() => output
            .output
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .map(String::from),
        Ok(output) => {
            log::debug!("git describe failed: {}", output.output.trim());
            None
        }
        Err(e) => {
            log::debug!("git unavailable: {}", e);
            None
        }
    }
}

/// Strip everything before the first digit: `v1.2.3` → `1.2.3`.
///
/// Returns `None` when the text contains no digit.
pub fn strip_version_prefix(tag: &str) -> Option<&str> {
    tag.find(|c: char| c.is_ascii_digit()).map(|i| &tag[i..])
}

/// Four-part numeric version for Windows version resources.
///
/// Takes the leading numeric components and pads or truncates to four:
/// - "1" -> "1.0.0.0"
/// - "1.2" -> "1.2.0.0"
/// - "1.2.3-beta.1" -> "1.2.3.0"
/// - "1.2.3.4.5" -> "1.2.3.4"
pub fn numeric_version(version: &str) -> String {
    let core = version
        .split(['-', '+', ' '])
        .next()
        .unwrap_or(version);

    let mut parts: Vec<String> = core
        .split('.')
        .map(|p| {
            p.chars()
                .take_while(|c| c.is_ascii_digit())
                .collect::<String>()
        })
        .take_while(|p| !p.is_empty())
        .take(4)
        .collect();

    while parts.len() < 4 {
        parts.push("0".to_string());
    }

    parts.join(".")
}
