//! Host capability probes.
//!
//! Everything that asks the host "is this program installed" goes through
//! [`ExecutableLookup`] so selection logic can be exercised without touching
//! the real PATH.

use std::ffi::OsString;
use std::path::PathBuf;

/// Answers whether an executable resolves on the host's search path.
pub trait ExecutableLookup {
    fn is_available(&self, program: &str) -> bool;
}

impl<F> ExecutableLookup for F
where
    F: Fn(&str) -> bool,
{
    fn is_available(&self, program: &str) -> bool {
        self(program)
    }
}

/// PATH lookup backed by the `which` crate.
#[derive(Debug, Clone, Default)]
pub struct SearchPath {
    /// Explicit search path; `None` means the process `PATH`.
    paths: Option<OsString>,
}

impl SearchPath {
    /// Look programs up in the process `PATH`.
    pub fn system() -> Self {
        Self::default()
    }

    /// Look programs up in the given directories only.
    pub fn with_paths(paths: impl Into<OsString>) -> Self {
        Self {
            paths: Some(paths.into()),
        }
    }

    /// Resolve a program to its full path.
    pub fn resolve(&self, program: &str) -> Option<PathBuf> {
        match &self.paths {
            None => which::which(program).ok(),
            Some(paths) => {
                let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
                which::which_in(program, Some(paths), cwd).ok()
            }
        }
    }
}

impl ExecutableLookup for SearchPath {
    fn is_available(&self, program: &str) -> bool {
        self.resolve(program).is_some()
    }
}
