//! Azure Linux distro variant.
//!
//! Azure Linux is an RPM distribution managed with `tdnf` (or `dnf` on some
//! images) and configured by cloud-init through systemd-networkd or netplan.

pub mod network;

use log::info;

use crate::common::host::{ExecutableLookup, SearchPath};
use crate::common::package::{
    CommandRunner, ExtraArgs, PackageCommand, PackageError, PackageManager, PackageSpec,
    StreamingRunner, VersionFormat,
};
use network::{RendererConfig, RendererKind};

pub const OSFAMILY: &str = "azurelinux";
pub const INIT_CMD: &[&str] = &["systemctl"];

/// Azure Linux distro configuration plus the package operations built on it.
pub struct AzureLinux<L = SearchPath, R = StreamingRunner> {
    name: String,
    packages: PackageCommand<L, R>,
}

impl AzureLinux {
    /// Distro using the host PATH and real process execution.
    pub fn system(name: impl Into<String>) -> Self {
        Self::new(name, SearchPath::system(), StreamingRunner)
    }
}

impl<L: ExecutableLookup, R: CommandRunner> AzureLinux<L, R> {
    pub fn new(name: impl Into<String>, lookup: L, runner: R) -> Self {
        Self {
            name: name.into(),
            packages: PackageCommand::new(lookup, runner),
        }
    }

    /// Override the template used to pin package versions.
    pub fn with_version_format(mut self, format: VersionFormat) -> Self {
        self.packages = self.packages.with_format(format);
        self
    }

    pub fn version_format(&self) -> &VersionFormat {
        self.packages.format()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn osfamily(&self) -> &'static str {
        OSFAMILY
    }

    pub fn init_cmd(&self) -> &'static [&'static str] {
        INIT_CMD
    }

    pub fn network_conf_dir(&self) -> &'static str {
        network::NETWORK_CONF_DIR
    }

    pub fn systemd_locale_conf_fn(&self) -> &'static str {
        network::SYSTEMD_LOCALE_CONF_FN
    }

    pub fn resolve_conf_fn(&self) -> &'static str {
        network::RESOLVE_CONF_FN
    }

    pub fn network_conf_fn(&self, kind: RendererKind) -> Option<&'static str> {
        network::network_conf_fn(kind)
    }

    pub fn renderer_config(&self, kind: RendererKind) -> RendererConfig {
        RendererConfig::for_kind(kind)
    }

    /// Settings for every renderer this distro supports.
    pub fn renderer_configs(&self) -> Vec<RendererConfig> {
        [RendererKind::Networkd, RendererKind::Netplan]
            .into_iter()
            .map(RendererConfig::for_kind)
            .collect()
    }

    /// The package manager the next package operation would use.
    pub fn package_manager(&self) -> PackageManager {
        self.packages.manager()
    }

    /// Argv `package_command` would run, without running it.
    pub fn plan_package_command(
        &self,
        action: &str,
        extra_args: impl Into<ExtraArgs>,
        pkgs: &[PackageSpec],
    ) -> Vec<String> {
        self.packages.plan(action, extra_args, pkgs)
    }

    pub fn package_command(
        &self,
        action: &str,
        extra_args: impl Into<ExtraArgs>,
        pkgs: &[PackageSpec],
    ) -> Result<(), PackageError> {
        self.packages.run(action, extra_args, pkgs)
    }

    pub fn install_packages(&self, pkgs: &[PackageSpec]) -> Result<(), PackageError> {
        info!("Installing {} package(s) on {}", pkgs.len(), self.name);
        self.package_command("install", ExtraArgs::Absent, pkgs)
    }

    /// Refresh the package metadata cache.
    pub fn update_package_sources(&self) -> Result<(), PackageError> {
        info!("Updating package sources on {}", self.name);
        self.package_command("makecache", ExtraArgs::Absent, &[])
    }

    pub fn upgrade_packages(&self) -> Result<(), PackageError> {
        info!("Upgrading packages on {}", self.name);
        self.package_command("upgrade", ExtraArgs::Absent, &[])
    }
}
