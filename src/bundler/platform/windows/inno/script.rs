//! Inno Setup script generation.
//!
//! Renders the configured or built-in script template and writes it with a
//! UTF-8 BOM, which Inno Setup needs to read non-ASCII text correctly.

use super::{template::ISS_TEMPLATE, utils};
use crate::{
    bundler::{
        builder::BuildArtifact,
        error::{Error, Result},
        settings::{Settings, non_empty},
        template::{TokenMap, render_logged},
        utils::fs,
    },
    metadata::discover_project_assets,
    source::numeric_version,
};
use std::path::{Path, PathBuf};

/// Values substituted into the installer script.
pub struct ScriptContext<'a> {
    pub build: &'a BuildArtifact,
    pub executable: &'a str,
    pub output_dir: &'a Path,
    pub output_base: &'a str,
}

/// Render the installer script into `script_dir/installer.iss`.
///
/// # Errors
///
/// [`Error::TemplateMissing`] when `Win.InnoScript` points at a missing file.
pub fn generate_iss_script(
    settings: &Settings,
    context: &ScriptContext<'_>,
    script_dir: &Path,
) -> Result<PathBuf> {
    let template = load_template(settings)?;
    let tokens = inno_tokens(settings, context);
    let script = render_logged("Inno Setup script", &template, &tokens);

    let script_path = script_dir.join("installer.iss");
    fs::write_utf8_bom(&script_path, &script)?;
    log::debug!("Wrote {}", script_path.display());

    Ok(script_path)
}

fn load_template(settings: &Settings) -> Result<String> {
    match non_empty(&settings.windows().inno_script) {
        Some(relative) => {
            let path = settings.resolve_path(relative);
            if !path.is_file() {
                return Err(Error::TemplateMissing {
                    kind: "Inno Setup script",
                    path,
                });
            }
            log::info!("Using Inno Setup template {}", path.display());
            fs::read_text(&path)
        }
        None => Ok(ISS_TEMPLATE.to_string()),
    }
}

/// Token set for the installer script.
pub fn inno_tokens(settings: &Settings, context: &ScriptContext<'_>) -> TokenMap {
    let win = settings.windows();

    let app_id = match non_empty(&win.guid) {
        Some(guid) => utils::inno_app_id(guid),
        None => {
            log::warn!(
                "Win.GUID is not set; using a temporary AppId. Set a stable GUID in packaging.json so upgrades replace earlier installs."
            );
            utils::generated_app_id()
        }
    };

    let icon = setup_icon(settings)
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    let (allowed, install_64) = utils::inno_architectures(context.build.runtime.arch());

    let mut tokens = TokenMap::new();
    tokens
        .insert("ProductName", settings.product_name())
        .insert("CompanyName", settings.company_name())
        .insert("Publisher", settings.windows_publisher())
        .insert_opt("PublisherUrl", settings.windows_publisher_url())
        .insert("Version", settings.version_string())
        .insert("VersionInfo", numeric_version(settings.version_string()))
        .insert("Executable", context.executable)
        .insert("AppId", app_id)
        .insert("SourceDir", context.build.publish_dir.display().to_string())
        .insert("OutputDir", context.output_dir.display().to_string())
        .insert("OutputBase", context.output_base)
        .insert("SetupIconFile", icon)
        .insert("RuntimeIdentifier", context.build.runtime.as_str())
        .insert("ArchitecturesAllowed", allowed)
        .insert("ArchitecturesInstallIn64BitMode", install_64)
        .insert("Year", chrono::Local::now().format("%Y").to_string());
    tokens
}

/// Installer icon: `Win.Icon` if it exists, else `Assets/app.ico` next to the
/// project. A configured but missing icon is a warning.
fn setup_icon(settings: &Settings) -> Option<PathBuf> {
    match non_empty(&settings.windows().icon) {
        Some(relative) => {
            let path = settings.resolve_path(relative);
            if path.is_file() {
                Some(path)
            } else {
                log::warn!(
                    "Windows icon not found: {}; the installer will use the default icon",
                    path.display()
                );
                None
            }
        }
        None => discover_project_assets(settings.project_dir()).icon_ico,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::{
        PackagingConfig, SettingsBuilder, WinSettings, settings::RuntimeIdentifier,
    };

    fn settings(root: &Path, win: WinSettings) -> Settings {
        SettingsBuilder::new()
            .project_root(root)
            .project_file(root.join("App/App.csproj"))
            .config(PackagingConfig {
                product: "Foo".into(),
                company: "Acme".into(),
                win: Some(win),
                ..Default::default()
            })
            .version("1.2.3")
            .build()
            .unwrap()
    }

    fn build(root: &Path) -> BuildArtifact {
        BuildArtifact {
            runtime: RuntimeIdentifier::new("win-x64"),
            publish_dir: root.join(".packaging/publish/win-x64"),
        }
    }

    #[test]
    fn builtin_script_is_rendered_with_bom() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(
            dir.path(),
            WinSettings {
                guid: Some("{6f9619ff-8b86-d011-b42d-00c04fc964ff}".into()),
                ..Default::default()
            },
        );
        let build = build(dir.path());
        let output_dir = dir.path().join("dist/win");
        let context = ScriptContext {
            build: &build,
            executable: "App.exe",
            output_dir: &output_dir,
            output_base: "Foo-Setup-1.2.3",
        };

        let path = generate_iss_script(&settings, &context, dir.path()).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(fs::UTF8_BOM));

        let text = fs::read_text(&path).unwrap();
        assert!(text.contains("AppId={{6F9619FF-8B86-D011-B42D-00C04FC964FF}\n"));
        assert!(text.contains("AppName=Foo\n"));
        assert!(text.contains("AppPublisher=Acme\n"));
        assert!(text.contains("VersionInfoVersion=1.2.3.0\n"));
        assert!(text.contains("OutputBaseFilename=Foo-Setup-1.2.3\n"));
        assert!(text.contains("SetupIconFile=\n"));
        assert!(text.contains(r#"Filename: "{app}\App.exe""#));
        assert!(text.contains("{cm:LaunchProgram,Foo}"));
        assert!(!text.contains("{{ProductName}}"));
    }

    #[test]
    fn configured_template_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(
            dir.path(),
            WinSettings {
                inno_script: Some("Installer/setup.iss".into()),
                ..Default::default()
            },
        );
        let build = build(dir.path());
        let context = ScriptContext {
            build: &build,
            executable: "App.exe",
            output_dir: dir.path(),
            output_base: "Foo-Setup-1.2.3",
        };

        let err = generate_iss_script(&settings, &context, dir.path()).unwrap_err();
        assert!(matches!(err, Error::TemplateMissing { .. }));
    }

    #[test]
    fn custom_template_keeps_unknown_tokens() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("Installer")).unwrap();
        std::fs::write(
            dir.path().join("Installer/setup.iss"),
            "#define Name \"{{ProductName}}\"\nDefaultDirName={autopf}\\{#Name}\n{{Unknown}}\n",
        )
        .unwrap();
        let settings = settings(
            dir.path(),
            WinSettings {
                inno_script: Some("Installer/setup.iss".into()),
                guid: Some("ABC".into()),
                ..Default::default()
            },
        );
        let build = build(dir.path());
        let context = ScriptContext {
            build: &build,
            executable: "App.exe",
            output_dir: dir.path(),
            output_base: "Foo-Setup-1.2.3",
        };

        let path = generate_iss_script(&settings, &context, &dir.path().join("work")).unwrap();
        let text = fs::read_text(&path).unwrap();
        assert_eq!(
            text,
            "#define Name \"Foo\"\nDefaultDirName={autopf}\\{#Name}\n{{Unknown}}\n"
        );
    }
}
