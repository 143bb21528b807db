//! Package manager invocation for RPM based Azure Linux hosts.
//!
//! # Architecture
//!
//! - [`PackageManager`]: which binary to run, picked on every call
//! - [`ExtraArgs`]: the string-or-list extra arguments
//! - [`PackageSpec`]: a package name with an optional version pin
//! - [`PackageCommand`]: builds `<binary> <flags> <extra> <action> <packages>` and runs it
//!
//! # Example
//!
//! ```
//! use azl_distro::common::host::SearchPath;
//! use azl_distro::common::package::{DryRunRunner, ExtraArgs, PackageCommand, PackageSpec};
//!
//! let command = PackageCommand::new(SearchPath::system(), DryRunRunner);
//! let argv = command.plan("install", ExtraArgs::Absent, &[PackageSpec::new("curl")]);
//! assert_eq!(argv.last().map(String::as_str), Some("curl"));
//! ```

mod args;
mod command;
mod definition;
mod error;
mod manager;
mod runner;

pub use args::ExtraArgs;
pub use command::PackageCommand;
pub use definition::{PackageSpec, RPM_VERSION_FORMAT, VersionFormat, expand_package_list};
pub use error::PackageError;
pub use manager::PackageManager;
pub use runner::{CommandRunner, DryRunRunner, StreamingRunner};
