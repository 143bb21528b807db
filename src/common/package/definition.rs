//! Package specifications and their expansion into package manager tokens.

use serde::Deserialize;
use std::str::FromStr;

use super::PackageError;

/// Template RPM package managers use to pin a version: `name-version`.
pub const RPM_VERSION_FORMAT: &str = "%s-%s";

const PLACEHOLDER: &str = "%s";

/// A package name with an optional version pin.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawPackageSpec")]
pub struct PackageSpec {
    pub name: String,
    pub version: Option<String>,
}

impl PackageSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
        }
    }

    pub fn versioned(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: Some(version.into()),
        }
    }

    /// Build a spec from a `[name]` or `[name, version]` sequence.
    pub fn from_parts(parts: &[String]) -> Result<Self, PackageError> {
        match parts {
            [name] => Ok(Self::new(name.clone())),
            [name, version] => Ok(Self::versioned(name.clone(), version.clone())),
            _ => Err(PackageError::InvalidPackage(format!(
                "invalid package & version tuple {:?}",
                parts
            ))),
        }
    }

    /// The version pin, treating an empty string as unpinned.
    fn pinned_version(&self) -> Option<&str> {
        self.version.as_deref().filter(|v| !v.is_empty())
    }
}

impl FromStr for PackageSpec {
    type Err = PackageError;

    /// Parses `name` or `name=version`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, version) = match s.split_once('=') {
            Some((name, version)) => (name, Some(version)),
            None => (s, None),
        };

        if name.is_empty() {
            return Err(PackageError::InvalidPackage(format!(
                "missing package name in {:?}",
                s
            )));
        }

        Ok(Self {
            name: name.to_string(),
            version: version.map(str::to_string),
        })
    }
}

/// Accepted TOML shapes for a package entry.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPackageSpec {
    Name(String),
    Parts(Vec<String>),
}

impl TryFrom<RawPackageSpec> for PackageSpec {
    type Error = PackageError;

    fn try_from(raw: RawPackageSpec) -> Result<Self, Self::Error> {
        match raw {
            RawPackageSpec::Name(name) => Ok(Self::new(name)),
            RawPackageSpec::Parts(parts) => Self::from_parts(&parts),
        }
    }
}

/// A `printf`-style template with a name slot followed by a version slot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct VersionFormat {
    prefix: String,
    separator: String,
    suffix: String,
}

impl VersionFormat {
    pub fn new(template: &str) -> Result<Self, PackageError> {
        let parts: Vec<&str> = template.split(PLACEHOLDER).collect();
        match parts.as_slice() {
            [prefix, separator, suffix] => Ok(Self {
                prefix: prefix.to_string(),
                separator: separator.to_string(),
                suffix: suffix.to_string(),
            }),
            _ => Err(PackageError::InvalidFormat(template.to_string())),
        }
    }

    /// The `%s-%s` template used by dnf, tdnf and yum.
    pub fn rpm() -> Self {
        Self {
            prefix: String::new(),
            separator: "-".to_string(),
            suffix: String::new(),
        }
    }

    pub fn render(&self, name: &str, version: &str) -> String {
        format!(
            "{}{}{}{}{}",
            self.prefix, name, self.separator, version, self.suffix
        )
    }
}

impl TryFrom<String> for VersionFormat {
    type Error = PackageError;

    fn try_from(template: String) -> Result<Self, Self::Error> {
        Self::new(&template)
    }
}

impl std::fmt::Display for VersionFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{PLACEHOLDER}{}{PLACEHOLDER}{}",
            self.prefix, self.separator, self.suffix
        )
    }
}

/// Expand package specs into the tokens handed to the package manager.
///
/// Pinned packages go through `format`, unpinned ones are passed by name.
/// Order is preserved.
pub fn expand_package_list(format: &VersionFormat, packages: &[PackageSpec]) -> Vec<String> {
    packages
        .iter()
        .map(|pkg| match pkg.pinned_version() {
            Some(version) => format.render(&pkg.name, version),
            None => pkg.name.clone(),
        })
        .collect()
}
