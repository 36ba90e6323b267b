//! Artifact checksum calculation.
//!
//! Installers and disk images are single files; the checksum is the hex
//! SHA-256 of their content.

use crate::{bail, bundler::Result, bundler::error::ErrorExt};
use sha2::{Digest, Sha256};
use std::{fs::File, io::Read, path::Path};

/// Calculates the SHA-256 checksum of a file, reading it in 8KB chunks.
///
/// # Returns
///
/// * `Ok(String)` - Hex-encoded SHA-256 hash (64 characters)
/// * `Err` - If the path cannot be read or is not a regular file
pub fn calculate_sha256(path: &Path) -> Result<String> {
    let metadata = std::fs::metadata(path).fs_context("reading metadata", path)?;
    if !metadata.is_file() {
        bail!("Artifact is not a file: {}", path.display());
    }

    let mut hasher = Sha256::new();
    hash_file(path, &mut hasher)?;
    Ok(format!("{:x}", hasher.finalize()))
}

fn hash_file(path: &Path, hasher: &mut Sha256) -> Result<()> {
    let mut file = File::open(path).fs_context("opening file for hashing", path)?;
    let mut buffer = [0u8; 8192];

    loop {
        let n = file
            .read(&mut buffer)
            .fs_context("reading file for hash calculation", path)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(())
}
