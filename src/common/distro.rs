use std::fs;
use std::path::Path;

const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Distribution IDs that identify an Azure Linux host.
///
/// CBL-Mariner is the 1.0/2.0 name of Azure Linux.
const AZURELINUX_IDS: &[&str] = &["azurelinux", "mariner"];

/// The identifying fields of `/etc/os-release`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsRelease {
    pub id: String,
    pub id_like: Vec<String>,
    pub version_id: Option<String>,
    pub pretty_name: Option<String>,
}

impl OsRelease {
    /// Detect the current operating system from /etc/os-release
    pub fn detect() -> Self {
        Self::from_path(OS_RELEASE_PATH)
    }

    /// Read an os-release file. Missing or unreadable files give an unknown release.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match fs::read_to_string(path.as_ref()) {
            Ok(content) => Self::parse(&content),
            Err(_) => Self::default(),
        }
    }

    /// Parse os-release content
    pub fn parse(content: &str) -> Self {
        let mut release = Self::default();

        for line in content.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim().trim_matches('"').trim_matches('\'');

            match key.trim() {
                "ID" => release.id = value.to_string(),
                "ID_LIKE" => {
                    release.id_like = value.split_whitespace().map(str::to_string).collect()
                }
                "VERSION_ID" => release.version_id = Some(value.to_string()),
                "PRETTY_NAME" => release.pretty_name = Some(value.to_string()),
                _ => {}
            }
        }

        release
    }

    pub fn is_known(&self) -> bool {
        !self.id.is_empty()
    }

    /// Check if this is Azure Linux (or CBL-Mariner)
    pub fn is_azurelinux(&self) -> bool {
        AZURELINUX_IDS.contains(&self.id.as_str())
    }

    /// Check if this OS belongs to the RHEL/Fedora family
    pub fn is_rhel_like(&self) -> bool {
        self.is_azurelinux()
            || matches!(self.id.as_str(), "rhel" | "fedora" | "centos")
            || self
                .id_like
                .iter()
                .any(|like| matches!(like.as_str(), "rhel" | "fedora" | "centos"))
    }

    pub fn family(&self) -> HostFamily {
        if self.is_azurelinux() {
            HostFamily::AzureLinux
        } else if self.is_rhel_like() {
            HostFamily::RhelLike
        } else {
            HostFamily::Other
        }
    }

    /// Get the display name of the operating system
    pub fn name(&self) -> &str {
        match (&self.pretty_name, self.is_known()) {
            (Some(pretty), _) => pretty.as_str(),
            (None, true) => self.id.as_str(),
            (None, false) => "Unknown",
        }
    }
}

/// How close a host is to Azure Linux.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostFamily {
    AzureLinux,
    /// Fedora, RHEL, CentOS and their derivatives
    RhelLike,
    Other,
}

impl std::fmt::Display for HostFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::AzureLinux => "azurelinux",
            Self::RhelLike => "rhel family",
            Self::Other => "other",
        };
        write!(f, "{}", name)
    }
}

impl std::fmt::Display for OsRelease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.version_id {
            Some(version) if self.pretty_name.is_none() => write!(f, "{} {}", self.name(), version),
            _ => write!(f, "{}", self.name()),
        }
    }
}
