//! Inno Setup helper functions.

/// `<Product>-Setup-<Version>`, the installer file name without `.exe`.
pub fn installer_base_name(product: &str, version: &str) -> String {
    format!("{}-Setup-{}", product, version)
}

/// Inno Setup `AppId` value for a configured GUID.
///
/// Braces are normalized and the opening brace is doubled, since a single `{`
/// starts an Inno constant: `6F96...` and `{6F96...}` both become `{{6F96...}`.
pub fn inno_app_id(guid: &str) -> String {
    let core = guid.trim().trim_start_matches('{').trim_end_matches('}');
    format!("{{{{{}}}", core.to_uppercase())
}

/// Fresh `AppId` for projects without a configured `GUID`.
pub fn generated_app_id() -> String {
    inno_app_id(&uuid::Uuid::new_v4().to_string())
}

/// `ArchitecturesAllowed` / `ArchitecturesInstallIn64BitMode` for a RID
/// architecture. Empty means "any" to Inno Setup.
pub fn inno_architectures(arch: &str) -> (&'static str, &'static str) {
    match arch {
        "x64" => ("x64compatible", "x64compatible"),
        "arm64" => ("arm64", "arm64"),
        _ => ("", ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_id_braces_are_normalized() {
        assert_eq!(inno_app_id("{6f9619ff-8b86}"), "{{6F9619FF-8B86}");
        assert_eq!(inno_app_id("6F9619FF-8B86"), "{{6F9619FF-8B86}");
        assert_eq!(inno_app_id(" {{6F9619FF-8B86} "), "{{6F9619FF-8B86}");
    }

    #[test]
    fn generated_app_id_is_uppercase_guid() {
        let id = generated_app_id();
        assert!(id.starts_with("{{") && id.ends_with('}'));
        assert_eq!(id.len(), 2 + 36 + 1);
        assert_eq!(id, id.to_uppercase());
    }

    #[test]
    fn installer_name() {
        assert_eq!(installer_base_name("Foo", "1.2.3"), "Foo-Setup-1.2.3");
    }

    #[test]
    fn x86_allows_any_architecture() {
        assert_eq!(inno_architectures("x86"), ("", ""));
        assert_eq!(inno_architectures("x64").0, "x64compatible");
    }
}
