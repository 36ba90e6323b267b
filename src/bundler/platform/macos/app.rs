//! `.app` bundle assembly.
//!
//! Layout:
//!
//! ```text
//! <AppName>.app/
//!   Contents/
//!     Info.plist
//!     PkgInfo
//!     MacOS/      publish output, executable marked 0755
//!     Resources/  icon
//! ```

use crate::{
    bundler::{
        builder::BuildArtifact,
        error::{Error, Result},
        settings::{Settings, non_empty},
        template::{TokenMap, render_logged},
        utils::fs,
    },
    metadata::discover_project_assets,
};
use std::path::{Path, PathBuf};

/// Built-in `Info.plist`, used when `Mac.InfoPlist` is not configured.
pub const INFO_PLIST_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>CFBundleName</key>
    <string>{{AppName}}</string>
    <key>CFBundleDisplayName</key>
    <string>{{ProductName}}</string>
    <key>CFBundleIdentifier</key>
    <string>{{BundleIdentifier}}</string>
    <key>CFBundleVersion</key>
    <string>{{Version}}</string>
    <key>CFBundleShortVersionString</key>
    <string>{{Version}}</string>
    <key>CFBundleExecutable</key>
    <string>{{Executable}}</string>
    <key>CFBundleIconFile</key>
    <string>{{IconFile}}</string>
    <key>CFBundlePackageType</key>
    <string>APPL</string>
    <key>CFBundleSignature</key>
    <string>????</string>
    <key>CFBundleInfoDictionaryVersion</key>
    <string>6.0</string>
    <key>LSApplicationCategoryType</key>
    <string>{{Category}}</string>
    <key>LSMinimumSystemVersion</key>
    <string>{{MinimumSystemVersion}}</string>
    <key>NSHumanReadableCopyright</key>
    <string>{{Copyright}}</string>
    <key>NSHighResolutionCapable</key>
    <true/>
</dict>
</plist>
"#;

const PKG_INFO: &str = "APPL????";

/// Assemble the `.app` bundle for one publish output.
///
/// The bundle is rebuilt from scratch under `<work>/mac-<rid>/`.
///
/// # Errors
///
/// - [`Error::ExecutableMissing`] when the publish output lacks the executable
/// - [`Error::TemplateMissing`] when `Mac.InfoPlist` points at a missing file
pub fn bundle_app(settings: &Settings, build: &BuildArtifact) -> Result<PathBuf> {
    let staging_root = settings
        .work_directory()
        .join(format!("mac-{}", build.runtime));
    fs::create_dir_all(&staging_root, true)?;

    let bundle_dir = staging_root.join(format!("{}.app", settings.macos_app_name()));
    let contents = bundle_dir.join("Contents");
    let macos_dir = contents.join("MacOS");
    let resources_dir = contents.join("Resources");

    log::info!("[mac] Assembling {}", bundle_dir.display());

    fs::copy_dir(&build.publish_dir, &macos_dir)?;
    fs::create_dir_all(&resources_dir, false)?;

    let executable = settings.macos_executable();
    let exe_path = macos_dir.join(&executable);
    if !exe_path.is_file() {
        return Err(Error::ExecutableMissing(exe_path));
    }
    fs::set_executable(&exe_path)?;

    let icon_file = copy_icon(settings, &resources_dir)?;

    let template = load_template(settings)?;
    let tokens = plist_tokens(settings, &executable, icon_file.as_deref().unwrap_or(""));
    let plist = render_logged("Info.plist", &template, &tokens);
    fs::write_text(&contents.join("Info.plist"), &plist)?;
    fs::write_text(&contents.join("PkgInfo"), PKG_INFO)?;

    log::info!("✓ Created app bundle: {}", bundle_dir.display());

    Ok(bundle_dir)
}

fn load_template(settings: &Settings) -> Result<String> {
    match non_empty(&settings.macos().info_plist) {
        Some(relative) => {
            let path = settings.resolve_path(relative);
            if !path.is_file() {
                return Err(Error::TemplateMissing {
                    kind: "Info.plist",
                    path,
                });
            }
            log::info!("Using Info.plist template {}", path.display());
            fs::read_text(&path)
        }
        None => Ok(INFO_PLIST_TEMPLATE.to_string()),
    }
}

/// Copies the icon into `Resources` and returns its file name.
///
/// Uses `Mac.Icon`, else `Assets/app.icns` next to the project. A configured
/// but missing icon is a warning.
fn copy_icon(settings: &Settings, resources_dir: &Path) -> Result<Option<String>> {
    let source = match non_empty(&settings.macos().icon) {
        Some(relative) => {
            let path = settings.resolve_path(relative);
            if !path.is_file() {
                log::warn!(
                    "macOS icon not found: {}; the app will use the default icon",
                    path.display()
                );
                return Ok(None);
            }
            path
        }
        None => match discover_project_assets(settings.project_dir()).icon_icns {
            Some(path) => path,
            None => {
                log::warn!("No macOS icon configured and Assets/app.icns not found");
                return Ok(None);
            }
        },
    };

    let Some(name) = source.file_name() else {
        return Ok(None);
    };
    fs::copy_file(&source, &resources_dir.join(name))?;
    Ok(Some(name.to_string_lossy().into_owned()))
}

/// Token set for `Info.plist`. Values are XML-escaped.
pub fn plist_tokens(settings: &Settings, executable: &str, icon_file: &str) -> TokenMap {
    let mac = settings.macos();
    let year = chrono::Local::now().format("%Y").to_string();
    let copyright = if settings.company_name().trim().is_empty() {
        format!("Copyright © {}", year)
    } else {
        format!("Copyright © {} {}", year, settings.company_name())
    };

    [
        ("ProductName", settings.product_name().to_string()),
        ("AppName", settings.macos_app_name().to_string()),
        ("BundleIdentifier", settings.macos_bundle_identifier()),
        ("Version", settings.version_string().to_string()),
        ("Executable", executable.to_string()),
        ("IconFile", icon_file.to_string()),
        (
            "Category",
            non_empty(&mac.category).unwrap_or_default().to_string(),
        ),
        (
            "MinimumSystemVersion",
            settings.macos_minimum_system_version().to_string(),
        ),
        ("Copyright", copyright),
        (
            "PublisherUrl",
            settings.macos_publisher_url().unwrap_or_default().to_string(),
        ),
        ("Year", year),
    ]
    .into_iter()
    .map(|(name, value)| (name, xml_escape(&value)))
    .collect()
}

fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::{
        MacSettings, PackagingConfig, SettingsBuilder, settings::RuntimeIdentifier,
    };

    fn fixture(mac: MacSettings) -> (tempfile::TempDir, Settings, BuildArtifact) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let publish_dir = root.join(".packaging/publish/osx-arm64");
        std::fs::create_dir_all(&publish_dir).unwrap();
        std::fs::write(publish_dir.join("App"), "bin").unwrap();
        std::fs::write(publish_dir.join("libSkiaSharp.dylib"), "lib").unwrap();

        let settings = SettingsBuilder::new()
            .project_root(root)
            .project_file(root.join("App/App.csproj"))
            .config(PackagingConfig {
                product: "Tom & Jerry".into(),
                company: "Acme".into(),
                mac: Some(mac),
                ..Default::default()
            })
            .version("2.0.1")
            .build()
            .unwrap();
        let build = BuildArtifact {
            runtime: RuntimeIdentifier::new("osx-arm64"),
            publish_dir,
        };
        (dir, settings, build)
    }

    #[test]
    fn assembles_bundle_layout() {
        let (dir, settings, build) = fixture(MacSettings {
            app_name: Some("TomJerry".into()),
            bundle_identifier: Some("com.acme.tj".into()),
            ..Default::default()
        });

        let bundle = bundle_app(&settings, &build).unwrap();
        assert_eq!(
            bundle,
            dir.path().join(".packaging/mac-osx-arm64/TomJerry.app")
        );
        assert!(bundle.join("Contents/MacOS/App").is_file());
        assert!(bundle.join("Contents/MacOS/libSkiaSharp.dylib").is_file());
        assert!(bundle.join("Contents/Resources").is_dir());
        assert_eq!(
            std::fs::read_to_string(bundle.join("Contents/PkgInfo")).unwrap(),
            "APPL????"
        );

        let plist = std::fs::read_to_string(bundle.join("Contents/Info.plist")).unwrap();
        assert!(plist.contains("<string>com.acme.tj</string>"));
        assert!(plist.contains("<string>Tom &amp; Jerry</string>"));
        assert!(plist.contains("<string>2.0.1</string>"));
        assert!(plist.contains("<string>11.0</string>"));
        assert!(!plist.contains("{{"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(bundle.join("Contents/MacOS/App"))
                .unwrap()
                .permissions()
                .mode();
            assert_eq!(mode & 0o777, 0o755);
        }
    }

    #[test]
    fn missing_icon_is_not_fatal() {
        let (_dir, settings, build) = fixture(MacSettings {
            icon: Some("Assets/missing.icns".into()),
            ..Default::default()
        });

        let bundle = bundle_app(&settings, &build).unwrap();
        let plist = std::fs::read_to_string(bundle.join("Contents/Info.plist")).unwrap();
        assert!(plist.contains("<key>CFBundleIconFile</key>\n    <string></string>"));
    }

    #[test]
    fn configured_icon_is_copied() {
        let (dir, settings, build) = fixture(MacSettings {
            icon: Some("art/Logo.icns".into()),
            ..Default::default()
        });
        std::fs::create_dir_all(dir.path().join("art")).unwrap();
        std::fs::write(dir.path().join("art/Logo.icns"), "icns").unwrap();

        let bundle = bundle_app(&settings, &build).unwrap();
        assert!(bundle.join("Contents/Resources/Logo.icns").is_file());
        let plist = std::fs::read_to_string(bundle.join("Contents/Info.plist")).unwrap();
        assert!(plist.contains("<string>Logo.icns</string>"));
    }

    #[test]
    fn missing_executable_fails() {
        let (_dir, settings, build) = fixture(MacSettings {
            executable: Some("Other".into()),
            ..Default::default()
        });

        let err = bundle_app(&settings, &build).unwrap_err();
        assert!(matches!(err, Error::ExecutableMissing(_)));
    }
}
