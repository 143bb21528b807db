//! Azure Linux distro variant for cloud-instance initialization.
//!
//! Provides package manager selection (`dnf`, `tdnf` or `yum`), package
//! command construction, and the static network renderer settings for
//! Azure Linux hosts.

pub mod azurelinux;
pub mod common;
