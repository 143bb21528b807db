//! Package manager command construction and execution.

use super::definition::{PackageSpec, VersionFormat, expand_package_list};
use super::runner::CommandRunner;
use super::{ExtraArgs, PackageError, PackageManager};
use crate::common::host::ExecutableLookup;

/// Builds and runs package manager invocations.
///
/// The manager is selected again on every call, so installing `tdnf` or
/// `dnf` between two calls changes the binary used by the second one.
pub struct PackageCommand<L, R> {
    lookup: L,
    runner: R,
    format: VersionFormat,
}

impl<L: ExecutableLookup, R: CommandRunner> PackageCommand<L, R> {
    pub fn new(lookup: L, runner: R) -> Self {
        Self {
            lookup,
            runner,
            format: VersionFormat::rpm(),
        }
    }

    /// Use `format` instead of the RPM template for pinned packages.
    pub fn with_format(mut self, format: VersionFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format(&self) -> &VersionFormat {
        &self.format
    }

    /// The package manager the next invocation would use.
    pub fn manager(&self) -> PackageManager {
        PackageManager::select(&self.lookup)
    }

    /// Build the argv for `action` without running it.
    ///
    /// Layout: `<binary> <base flags> <extra args> <action> <packages>`.
    pub fn plan(
        &self,
        action: &str,
        extra_args: impl Into<ExtraArgs>,
        packages: &[PackageSpec],
    ) -> Vec<String> {
        let manager = self.manager();

        let mut argv = vec![manager.binary().to_string()];
        argv.extend(manager.base_args().iter().map(|arg| arg.to_string()));
        argv.extend(extra_args.into().into_tokens());
        argv.push(action.to_string());
        argv.extend(expand_package_list(&self.format, packages));

        argv
    }

    /// Build the argv for `action` and run it with output streamed to the terminal.
    pub fn run(
        &self,
        action: &str,
        extra_args: impl Into<ExtraArgs>,
        packages: &[PackageSpec],
    ) -> Result<(), PackageError> {
        let argv = self.plan(action, extra_args, packages);
        self.runner.run(&argv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingRunner {
        calls: RefCell<Vec<Vec<String>>>,
    }

    impl CommandRunner for &RecordingRunner {
        fn run(&self, argv: &[String]) -> Result<(), PackageError> {
            self.calls.borrow_mut().push(argv.to_vec());
            Ok(())
        }
    }

    fn host(installed: &'static [&'static str]) -> impl Fn(&str) -> bool {
        move |program: &str| installed.iter().any(|p| *p == program)
    }

    fn pkgs(names: &[&str]) -> Vec<PackageSpec> {
        names.iter().map(|name| PackageSpec::new(*name)).collect()
    }

    #[test]
    fn test_dnf_only_host() {
        let runner = RecordingRunner::default();
        let command = PackageCommand::new(host(&["dnf"]), &runner);

        command
            .run("install", ExtraArgs::Absent, &pkgs(&["curl"]))
            .unwrap();
        assert_eq!(*runner.calls.borrow(), vec![vec!["dnf", "-y", "install", "curl"]]);
    }

    #[test]
    fn test_tdnf_overrides_dnf() {
        let runner = RecordingRunner::default();
        let command = PackageCommand::new(host(&["dnf", "tdnf"]), &runner);

        let argv = command.plan("install", ExtraArgs::Absent, &pkgs(&["vim"]));
        assert_eq!(argv, vec!["tdnf", "-y", "install", "vim"]);
    }

    #[test]
    fn test_custom_version_format() {
        let runner = RecordingRunner::default();
        let format = VersionFormat::new("%s=%s").unwrap();
        let command = PackageCommand::new(host(&["tdnf"]), &runner).with_format(format);

        let argv = command.plan(
            "install",
            ExtraArgs::Absent,
            &[PackageSpec::versioned("git", "2.45.2")],
        );
        assert_eq!(argv, vec!["tdnf", "-y", "install", "git=2.45.2"]);
    }

    #[test]
    fn test_yum_fallback() {
        let runner = RecordingRunner::default();
        let command = PackageCommand::new(host(&[]), &runner);

        let argv = command.plan("remove", ExtraArgs::Absent, &pkgs(&["vim"]));
        assert_eq!(argv, vec!["yum", "-t", "-y", "remove", "vim"]);
    }

    #[test]
    fn test_single_extra_arg_before_action() {
        let runner = RecordingRunner::default();
        let command = PackageCommand::new(host(&["tdnf"]), &runner);

        let argv = command.plan("install", "--foo", &pkgs(&["vim"]));
        assert_eq!(argv, vec!["tdnf", "-y", "--foo", "install", "vim"]);
    }

    #[test]
    fn test_extra_arg_list_in_order() {
        let runner = RecordingRunner::default();
        let command = PackageCommand::new(host(&["dnf"]), &runner);

        let extra = vec!["--foo".to_string(), "--bar".to_string()];
        let argv = command.plan("install", extra, &[]);
        assert_eq!(argv, vec!["dnf", "-y", "--foo", "--bar", "install"]);
    }

    #[test]
    fn test_packages_follow_action_in_order() {
        let runner = RecordingRunner::default();
        let command = PackageCommand::new(host(&["dnf"]), &runner);

        let argv = command.plan("install", ExtraArgs::Absent, &pkgs(&["vim", "git"]));
        assert_eq!(argv[2..], ["install", "vim", "git"]);
    }

    #[test]
    fn test_no_packages_ends_with_action() {
        let runner = RecordingRunner::default();
        let command = PackageCommand::new(host(&["tdnf"]), &runner);

        let argv = command.plan("makecache", ExtraArgs::Absent, &[]);
        assert_eq!(argv.last().map(String::as_str), Some("makecache"));
        assert_eq!(argv.len(), 3);
    }

    #[test]
    fn test_versioned_packages_expand() {
        let runner = RecordingRunner::default();
        let command = PackageCommand::new(host(&["tdnf"]), &runner);

        let packages = vec![
            PackageSpec::versioned("kernel", "6.6.47.1"),
            PackageSpec::new("walinuxagent"),
        ];
        let argv = command.plan("install", ExtraArgs::Absent, &packages);
        assert_eq!(
            argv,
            vec!["tdnf", "-y", "install", "kernel-6.6.47.1", "walinuxagent"]
        );
    }

    #[test]
    fn test_selection_is_not_cached() {
        let installed = RefCell::new(vec!["dnf"]);
        let lookup = |program: &str| installed.borrow().iter().any(|p| *p == program);
        let runner = RecordingRunner::default();
        let command = PackageCommand::new(lookup, &runner);

        assert_eq!(command.manager(), PackageManager::Dnf);
        installed.borrow_mut().push("tdnf");
        assert_eq!(command.manager(), PackageManager::Tdnf);
        installed.borrow_mut().clear();
        assert_eq!(command.manager(), PackageManager::Yum);
    }

    #[test]
    fn test_runner_error_propagates() {
        struct FailingRunner;
        impl CommandRunner for FailingRunner {
            fn run(&self, _argv: &[String]) -> Result<(), PackageError> {
                Err(PackageError::EmptyCommand)
            }
        }

        let command = PackageCommand::new(host(&["dnf"]), FailingRunner);
        assert!(matches!(
            command.run("install", ExtraArgs::Absent, &[]),
            Err(PackageError::EmptyCommand)
        ));
    }
}
