use std::path::PathBuf;

/// Centralized path management for azl
/// Settings are looked up in the user config directory first, then system wide.

const CONFIG_FILE_NAME: &str = "distro.toml";

/// System wide settings file
pub fn system_config_path() -> PathBuf {
    PathBuf::from("/etc/azl").join(CONFIG_FILE_NAME)
}

/// Per-user settings file, if a config directory can be determined
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("azl").join(CONFIG_FILE_NAME))
}

/// Settings files to try, in priority order
pub fn config_search_paths() -> Vec<PathBuf> {
    user_config_path()
        .into_iter()
        .chain(std::iter::once(system_config_path()))
        .collect()
}
