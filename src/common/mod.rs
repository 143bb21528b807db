pub mod config;
pub mod distro;
pub mod host;
pub mod package;
pub mod paths;
pub mod shell;
