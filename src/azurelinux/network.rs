//! Network renderer settings for Azure Linux.
//!
//! These values are handed to the networkd and netplan renderers as is.

use serde::{Deserialize, Serialize};

/// Header written at the top of every generated network file.
pub const NETWORK_FILE_HEADER: &str = "\
# This file is generated from information provided by the datasource.  Changes
# to it will not persist across an instance reboot. To disable cloud-init's
# network configuration capabilities, write a file
# /etc/cloud/cloud.cfg.d/99-disable-network-config.cfg with the following:
# network: {config: disabled}
";

/// Where systemd-networkd reads `.network` units from.
pub const NETWORK_CONF_DIR: &str = "/etc/systemd/network/";
pub const SYSTEMD_LOCALE_CONF_FN: &str = "/etc/locale.conf";
pub const RESOLVE_CONF_FN: &str = "/etc/systemd/resolved.conf";
/// The netplan file cloud-init owns.
pub const CLOUDINIT_NETPLAN_FILE: &str = "/etc/netplan/50-cloud-init.yaml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    #[default]
    Networkd,
    Netplan,
}

impl RendererKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Networkd => "networkd",
            Self::Netplan => "netplan",
        }
    }
}

impl std::fmt::Display for RendererKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkdConfig {
    pub resolv_conf_fn: &'static str,
    pub network_conf_dir: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetplanConfig {
    pub netplan_path: &'static str,
    pub netplan_header: &'static str,
    /// Run `netplan generate` and friends after writing the file.
    pub postcmds: bool,
}

/// Settings for one renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RendererConfig {
    Networkd(NetworkdConfig),
    Netplan(NetplanConfig),
}

impl RendererConfig {
    pub fn for_kind(kind: RendererKind) -> Self {
        match kind {
            RendererKind::Networkd => Self::Networkd(NetworkdConfig {
                resolv_conf_fn: RESOLVE_CONF_FN,
                network_conf_dir: NETWORK_CONF_DIR,
            }),
            RendererKind::Netplan => Self::Netplan(NetplanConfig {
                netplan_path: CLOUDINIT_NETPLAN_FILE,
                netplan_header: NETWORK_FILE_HEADER,
                postcmds: true,
            }),
        }
    }

    pub fn kind(&self) -> RendererKind {
        match self {
            Self::Networkd(_) => RendererKind::Networkd,
            Self::Netplan(_) => RendererKind::Netplan,
        }
    }
}

/// The file a renderer writes its whole configuration to, if it uses a single file.
pub fn network_conf_fn(kind: RendererKind) -> Option<&'static str> {
    match kind {
        RendererKind::Netplan => Some(CLOUDINIT_NETPLAN_FILE),
        RendererKind::Networkd => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_networkd_config() {
        let config = RendererConfig::for_kind(RendererKind::Networkd);
        assert_eq!(
            config,
            RendererConfig::Networkd(NetworkdConfig {
                resolv_conf_fn: "/etc/systemd/resolved.conf",
                network_conf_dir: "/etc/systemd/network/",
            })
        );
        assert_eq!(config.kind(), RendererKind::Networkd);
    }

    #[test]
    fn test_netplan_config() {
        let RendererConfig::Netplan(config) = RendererConfig::for_kind(RendererKind::Netplan) else {
            panic!("expected netplan config");
        };
        assert_eq!(config.netplan_path, "/etc/netplan/50-cloud-init.yaml");
        assert!(config.postcmds);
        assert!(config.netplan_header.starts_with("# This file is generated"));
        assert!(config.netplan_header.ends_with("# network: {config: disabled}\n"));
    }

    #[test]
    fn test_network_conf_fn() {
        assert_eq!(
            network_conf_fn(RendererKind::Netplan),
            Some(CLOUDINIT_NETPLAN_FILE)
        );
        assert_eq!(network_conf_fn(RendererKind::Networkd), None);
    }

    #[test]
    fn test_header_lines_are_comments() {
        assert!(NETWORK_FILE_HEADER.lines().all(|line| line.starts_with('#')));
        assert_eq!(NETWORK_FILE_HEADER.lines().count(), 5);
    }

    #[test]
    fn test_serialize_networkd_to_toml() {
        let toml = toml::to_string(&RendererConfig::for_kind(RendererKind::Networkd)).unwrap();
        assert!(toml.contains(r#"network_conf_dir = "/etc/systemd/network/""#));
    }
}
