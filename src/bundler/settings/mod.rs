//! Configuration structures for packaging runs.
//!
//! [`PackagingConfig`] mirrors `packaging.json`; [`ConfigLoader`] reads or
//! creates it and [`SettingsBuilder`] combines the defaulted configuration
//! with the values resolved at startup into [`Settings`].

mod arch;
mod builder;
mod core;
mod loader;
mod macos;
mod package;
mod windows;

pub use arch::RuntimeIdentifier;
pub use builder::{DIST_DIR_NAME, SettingsBuilder, WORK_DIR_NAME};
pub use core::Settings;
pub use loader::{
    CONFIG_FILE_NAME, ConfigLoader, LoadOutcome, LoadedConfig, PLACEHOLDER_COMPANY,
    apply_defaults, bundle_identifier, default_config, fill_derived_defaults,
};
pub use macos::{
    DEFAULT_MAC_RUNTIMES, DEFAULT_MINIMUM_SYSTEM_VERSION, MacSettings, macos_executable_name,
};
pub use package::{DEFAULT_PUBLISH_ARGS, PackagingConfig, StringOrList};
pub(crate) use package::non_empty;
pub use windows::{DEFAULT_WIN_RUNTIME, WinSettings, windows_executable_name};
