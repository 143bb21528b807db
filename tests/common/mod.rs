use anyhow::Result;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway host: a PATH directory with fake package managers, a home
/// directory and a log every fake appends its argv to.
pub struct TestEnvironment {
    temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        fs::create_dir_all(temp_dir.path().join("bin"))?;
        fs::create_dir_all(temp_dir.path().join("home"))?;
        Ok(Self { temp_dir })
    }

    /// Directory used as the only PATH entry
    pub fn bin_dir(&self) -> PathBuf {
        self.temp_dir.path().join("bin")
    }

    pub fn home(&self) -> PathBuf {
        self.temp_dir.path().join("home")
    }

    /// File the fake package managers record their invocations in
    pub fn invocation_log(&self) -> PathBuf {
        self.temp_dir.path().join("invocations.log")
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Install a fake package manager that logs `<name> <args>` and exits with `exit_code`.
    pub fn install_fake(&self, name: &str, exit_code: i32) -> Result<()> {
        let script = format!(
            "#!/bin/sh\necho \"${{0##*/}} $*\" >> '{}'\nexit {}\n",
            self.invocation_log().display(),
            exit_code
        );
        let path = self.bin_dir().join(name);
        fs::write(&path, script)?;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
        Ok(())
    }

    /// Lines recorded by the fake package managers so far
    pub fn invocations(&self) -> Result<Vec<String>> {
        let log = self.invocation_log();
        if !log.exists() {
            return Ok(Vec::new());
        }
        Ok(fs::read_to_string(log)?
            .lines()
            .map(str::to_string)
            .collect())
    }
}
