//! Package manager selection for Azure Linux hosts.

use log::debug;

use crate::common::host::ExecutableLookup;

/// The package managers a host may provide, in the order they are probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    /// DNF - Azure Linux 3.0 and Fedora-style hosts
    Dnf,
    /// Tiny DNF - default on Azure Linux / CBL-Mariner images
    Tdnf,
    /// YUM - last resort, never probed
    Yum,
}

impl PackageManager {
    /// Pick the package manager for the current host.
    ///
    /// The `tdnf` probe does not depend on the `dnf` result: when both are
    /// installed `tdnf` wins. When neither is found `yum` is returned
    /// without checking that it exists.
    ///
    /// A host with `dnf` but no `tdnf` gets `dnf`. cloud-init's Azure Linux
    /// module attaches its yum fallback to the `tdnf` check and so hands such
    /// hosts `yum`; that behaviour is intentionally not reproduced here.
    pub fn select(lookup: &dyn ExecutableLookup) -> Self {
        let mut selected = None;

        if lookup.is_available(Self::Dnf.binary()) {
            debug!("Using DNF for package management");
            selected = Some(Self::Dnf);
        }
        if lookup.is_available(Self::Tdnf.binary()) {
            debug!("Using TDNF for package management");
            selected = Some(Self::Tdnf);
        }

        selected.unwrap_or_else(|| {
            debug!("Using YUM for package management");
            Self::Yum
        })
    }

    /// Name of the executable to invoke.
    pub fn binary(&self) -> &'static str {
        match self {
            Self::Dnf => "dnf",
            Self::Tdnf => "tdnf",
            Self::Yum => "yum",
        }
    }

    /// Flags placed right after the binary.
    ///
    /// `-t` makes yum tolerant of command line errors about packages, e.g.
    /// asking to install something that is already installed.
    /// `-y` answers yes to every prompt.
    pub fn base_args(&self) -> &'static [&'static str] {
        match self {
            Self::Dnf | Self::Tdnf => &["-y"],
            Self::Yum => &["-t", "-y"],
        }
    }

    /// Get a human-readable name for this package manager.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Dnf => "DNF",
            Self::Tdnf => "TDNF",
            Self::Yum => "YUM",
        }
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
