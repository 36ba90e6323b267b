//! Loading, first-run creation and defaulting of `packaging.json`.
//!
//! The file is written exactly once, when it does not exist yet. Later runs
//! read it and fill missing optional values in memory; user values are never
//! overwritten and the file is never rewritten.

use super::{
    MacSettings, PackagingConfig, WinSettings,
    macos::{DEFAULT_MAC_RUNTIMES, DEFAULT_MINIMUM_SYSTEM_VERSION, macos_executable_name},
    package::non_empty,
    windows::{DEFAULT_WIN_RUNTIME, windows_executable_name},
};
use crate::{
    bundler::error::{Error, ErrorExt, Result},
    metadata::{ProjectAssets, ProjectMetadata, discover_project_assets, read_project_metadata},
    source::{ProjectSource, config_relative_path},
};
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "packaging.json";

/// Company written into a new configuration when the project has none.
pub const PLACEHOLDER_COMPANY: &str = "YourCompany";

/// What happened when loading the configuration.
#[derive(Debug)]
pub enum LoadOutcome {
    /// No configuration existed; a default one was written. Nothing should be
    /// built on this run.
    Created {
        /// Where the new file was written
        path: PathBuf,
        /// The configuration as written
        config: PackagingConfig,
    },

    /// An existing configuration was read and defaulted.
    Loaded(LoadedConfig),
}

/// A configuration read from disk with defaults applied.
#[derive(Clone, Debug)]
pub struct LoadedConfig {
    /// Configuration file path
    pub path: PathBuf,
    /// Configuration with every optional value filled
    pub config: PackagingConfig,
    /// Absolute path of the resolved project file
    pub project_file: PathBuf,
}

/// Reads or creates the packaging configuration for a project root.
///
/// # Examples
///
/// ```no_run
/// use dotnet_packager::bundler::settings::{ConfigLoader, LoadOutcome};
///
/// # fn example() -> dotnet_packager::bundler::Result<()> {
/// match ConfigLoader::new(".").load_or_create()? {
///     LoadOutcome::Created { path, .. } => println!("edit {} and re-run", path.display()),
///     LoadOutcome::Loaded(loaded) => println!("packaging {}", loaded.config.product),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ConfigLoader {
    root: PathBuf,
    config_path: PathBuf,
    project_override: Option<PathBuf>,
}

impl ConfigLoader {
    /// Loader for `<root>/packaging.json`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let config_path = root.join(CONFIG_FILE_NAME);
        Self {
            root,
            config_path,
            project_override: None,
        }
    }

    /// Uses a different configuration file. Relative paths resolve against
    /// the root.
    pub fn config_path(mut self, path: impl AsRef<Path>) -> Self {
        self.config_path = self.root.join(path);
        self
    }

    /// Forces a project file, taking precedence over config `Project` and
    /// over discovery.
    pub fn project_override(mut self, project: Option<PathBuf>) -> Self {
        self.project_override = project;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the configuration file this loader reads or creates.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Reads the configuration, or writes a default one if none exists.
    ///
    /// # Errors
    ///
    /// - [`Error::ConfigParse`] / [`Error::ConfigInvalid`] for unusable files
    /// - project resolution errors from [`ProjectSource::resolve`]
    pub fn load_or_create(&self) -> Result<LoadOutcome> {
        if !self.config_path.exists() {
            let config = self.create()?;
            return Ok(LoadOutcome::Created {
                path: self.config_path.clone(),
                config,
            });
        }

        let raw = self.read()?;

        let configured = self
            .project_override
            .clone()
            .or_else(|| non_empty(&raw.project).map(PathBuf::from));
        let project_file = ProjectSource::from_option(configured.as_deref()).resolve(&self.root)?;

        let assets = project_file
            .parent()
            .map(discover_project_assets)
            .unwrap_or_default();
        let config = apply_defaults(raw, &self.root, &project_file, &assets);

        if config.product.trim().is_empty() {
            return Err(Error::ConfigInvalid {
                path: self.config_path.clone(),
                reason: "\"Product\" must not be empty".to_string(),
            });
        }

        Ok(LoadOutcome::Loaded(LoadedConfig {
            path: self.config_path.clone(),
            config,
            project_file,
        }))
    }

    /// Parses the configuration file as written by the user.
    ///
    /// A legacy top-level array is accepted; its first object is used.
    pub fn read(&self) -> Result<PackagingConfig> {
        let text = std::fs::read_to_string(&self.config_path)
            .fs_context("reading configuration", &self.config_path)?;

        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(|source| Error::ConfigParse {
                path: self.config_path.clone(),
                source,
            })?;

        let object = match value {
            serde_json::Value::Object(map) => serde_json::Value::Object(map),
            serde_json::Value::Array(mut items)
                if items.first().is_some_and(serde_json::Value::is_object) =>
            {
                log::warn!(
                    "{} uses the legacy list layout; only the first entry is used",
                    self.config_path.display()
                );
                items.swap_remove(0)
            }
            _ => {
                return Err(Error::ConfigInvalid {
                    path: self.config_path.clone(),
                    reason: "expected a JSON object at the top level".to_string(),
                });
            }
        };

        serde_json::from_value(object).map_err(|source| Error::ConfigParse {
            path: self.config_path.clone(),
            source,
        })
    }

    /// Infers a default configuration from the project and writes it.
    fn create(&self) -> Result<PackagingConfig> {
        let project_file =
            ProjectSource::from_option(self.project_override.as_deref()).resolve(&self.root)?;
        let metadata = read_project_metadata(&project_file);
        let assets = project_file
            .parent()
            .map(discover_project_assets)
            .unwrap_or_default();

        let config = default_config(&self.root, &project_file, &metadata, &assets);

        let mut json = serde_json::to_string_pretty(&config).map_err(|source| {
            Error::ConfigParse {
                path: self.config_path.clone(),
                source,
            }
        })?;
        json.push('\n');

        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).fs_context("creating configuration directory", parent)?;
        }
        std::fs::write(&self.config_path, json)
            .fs_context("writing configuration", &self.config_path)?;

        log::info!(
            "[config] Created default configuration at {}",
            self.config_path.display()
        );
        log::info!("Edit the file as needed, then re-run.");

        Ok(config)
    }
}

/// First-run configuration inferred from the project file.
pub fn default_config(
    root: &Path,
    project_file: &Path,
    metadata: &ProjectMetadata,
    assets: &ProjectAssets,
) -> PackagingConfig {
    let stem = file_stem(project_file);
    let product = metadata.product_name.clone().unwrap_or_else(|| stem.clone());
    let company = metadata
        .company_name
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_COMPANY.to_string());
    let bundle_identifier = bundle_identifier(&company, &product, &stem);

    PackagingConfig {
        executable: Some(stem),
        project: Some(config_relative_path(root, project_file)),
        win: Some(WinSettings {
            icon: assets.icon_ico.as_deref().map(|p| config_relative_path(root, p)),
            guid: Some(format!(
                "{{{}}}",
                uuid::Uuid::new_v4().to_string().to_uppercase()
            )),
            runtime_identifier: Some(DEFAULT_WIN_RUNTIME.to_string()),
            ..Default::default()
        }),
        mac: Some(MacSettings {
            icon: assets.icon_icns.as_deref().map(|p| config_relative_path(root, p)),
            bundle_identifier: Some(bundle_identifier),
            runtime_identifiers: Some(
                DEFAULT_MAC_RUNTIMES
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>()
                    .into(),
            ),
            volume_name: Some(product.clone()),
            ..Default::default()
        }),
        product,
        company,
        ..Default::default()
    }
}

/// Fills every missing optional value without touching configured ones.
///
/// Adds the project path and discovered icons, then the values derived from
/// other keys (see [`fill_derived_defaults`]). `Product` is required and left
/// as-is.
pub fn apply_defaults(
    mut config: PackagingConfig,
    root: &Path,
    project_file: &Path,
    assets: &ProjectAssets,
) -> PackagingConfig {
    if non_empty(&config.project).is_none() {
        config.project = Some(config_relative_path(root, project_file));
    }

    let mut win = config.win.take().unwrap_or_default();
    fill(&mut win.icon, || {
        assets.icon_ico.as_deref().map(|p| config_relative_path(root, p))
    });
    config.win = Some(win);

    let mut mac = config.mac.take().unwrap_or_default();
    fill(&mut mac.icon, || {
        assets.icon_icns.as_deref().map(|p| config_relative_path(root, p))
    });
    config.mac = Some(mac);

    fill_derived_defaults(&mut config, &file_stem(project_file));
    config
}

/// Fills values that follow from other configuration keys.
///
/// Platform-specific `Executable` overrides the top-level one, which
/// defaults to `project_stem`. Blank strings count as missing. Running it
/// twice changes nothing.
pub fn fill_derived_defaults(config: &mut PackagingConfig, project_stem: &str) {
    let executable = non_empty(&config.executable)
        .unwrap_or(project_stem)
        .to_string();
    config.executable = Some(executable.clone());

    let product = config.product.clone();
    let company = config.company.clone();
    let publisher_url = non_empty(&config.publisher_url).map(str::to_string);
    let shared_bundle_id = non_empty(&config.bundle_identifier).map(str::to_string);

    let mut win = config.win.take().unwrap_or_default();
    let win_exe = non_empty(&win.executable).unwrap_or(&executable).to_string();
    win.executable = Some(windows_executable_name(&win_exe));
    fill(&mut win.publisher, || Some(company.clone()).filter(|c| !c.trim().is_empty()));
    fill(&mut win.publisher_url, || publisher_url.clone());
    fill(&mut win.runtime_identifier, || Some(DEFAULT_WIN_RUNTIME.to_string()));
    config.win = Some(win);

    let mut mac = config.mac.take().unwrap_or_default();
    let mac_exe = non_empty(&mac.executable).unwrap_or(&executable).to_string();
    mac.executable = Some(macos_executable_name(&mac_exe));
    fill(&mut mac.bundle_identifier, || {
        shared_bundle_id.or_else(|| Some(bundle_identifier(&company, &product, project_stem)))
    });
    fill(&mut mac.app_name, || Some(product.clone()));
    fill(&mut mac.volume_name, || Some(product.clone()));
    fill(&mut mac.publisher_url, || publisher_url.clone());
    fill(&mut mac.minimum_system_version, || {
        Some(DEFAULT_MINIMUM_SYSTEM_VERSION.to_string())
    });
    if mac.runtime_identifiers.is_none() {
        mac.runtime_identifiers = Some(mac.runtime_identifiers().into());
    }
    config.mac = Some(mac);
}

fn fill(slot: &mut Option<String>, default: impl FnOnce() -> Option<String>) {
    if non_empty(slot).is_none() {
        if let Some(value) = default() {
            *slot = Some(value);
        }
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "app".to_string())
}

/// `com.<company>.<product>` with both parts reduced to lowercase ASCII
/// alphanumerics.
pub fn bundle_identifier(company: &str, product: &str, project_stem: &str) -> String {
    let fallback_product = slug(project_stem, "app");
    format!(
        "com.{}.{}",
        slug(company, "example"),
        slug(product, &fallback_product)
    )
}

fn slug(text: &str, fallback: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if cleaned.is_empty() {
        fallback.to_string()
    } else {
        cleaned
    }
}
