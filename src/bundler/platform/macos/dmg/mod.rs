//! macOS DMG disk image creator.
//!
//! Creates drag-to-install DMG files using the native hdiutil tool. The image
//! holds the `.app` bundle and an `Applications` symlink.

mod creation;

pub use creation::{create_dmg, dmg_file_name};
