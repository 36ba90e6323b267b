//! .NET runtime identifiers.

use std::fmt;

/// A .NET runtime identifier (RID) such as `osx-arm64` or `win-x64`.
///
/// The RID is passed to `dotnet publish -r` unchanged; the architecture part
/// (the segment after the last `-`) is used in artifact names.
///
/// # Examples
///
/// ```
/// use dotnet_packager::bundler::RuntimeIdentifier;
///
/// let rid = RuntimeIdentifier::new("osx-arm64");
/// assert_eq!(rid.os(), "osx");
/// assert_eq!(rid.arch(), "arm64");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RuntimeIdentifier(String);

impl RuntimeIdentifier {
    pub fn new(rid: impl Into<String>) -> Self {
        Self(rid.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Operating system part, e.g. `osx` for `osx-arm64`.
    pub fn os(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    /// Architecture part, e.g. `x64` for `linux-musl-x64`.
    ///
    /// A RID without a `-` is returned whole.
    pub fn arch(&self) -> &str {
        self.0.rsplit('-').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for RuntimeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RuntimeIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_os_and_arch() {
        let rid = RuntimeIdentifier::new("linux-musl-x64");
        assert_eq!(rid.os(), "linux");
        assert_eq!(rid.arch(), "x64");
    }

    #[test]
    fn rid_without_separator_is_its_own_arch() {
        let rid = RuntimeIdentifier::new("any");
        assert_eq!(rid.arch(), "any");
        assert_eq!(rid.os(), "any");
    }
}
