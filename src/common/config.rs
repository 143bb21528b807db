//! Settings for the `azl` frontend.
//!
//! ```toml
//! dry_run = false
//! renderer = "netplan"
//! extra_args = ["--setopt=install_weak_deps=False"]
//! default_packages = ["vim", ["git", "2.45.2"]]
//! version_format = "%s-%s"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::azurelinux::network::RendererKind;
use crate::common::package::{PackageSpec, VersionFormat};
use crate::common::paths;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Print package commands instead of running them
    pub dry_run: bool,
    /// Renderer shown by `azl renderer` when none is given
    pub renderer: RendererKind,
    /// Placed before the `-a` arguments of `azl pkg run`
    pub extra_args: Vec<String>,
    /// Installed by `azl pkg install` when no packages are named
    pub default_packages: Vec<PackageSpec>,
    /// Template for pinned packages, `%s-%s` when unset
    pub version_format: Option<VersionFormat>,
}

impl Settings {
    /// Load from an explicit file, or the first settings file that exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        match Self::find(paths::config_search_paths()) {
            Some(path) => Self::load_from_path(path),
            None => Ok(Self::default()),
        }
    }

    fn find(candidates: Vec<PathBuf>) -> Option<PathBuf> {
        candidates.into_iter().find(|path| path.exists())
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("parsing settings in {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid settings")
    }

    /// Extra args from settings followed by the ones given on the command line.
    pub fn merged_extra_args(&self, cli_args: &[String]) -> Vec<String> {
        self.extra_args.iter().chain(cli_args).cloned().collect()
    }
}
