//! Process execution for package manager command lines.

use colored::Colorize;
use duct::cmd;
use log::debug;

use super::PackageError;
use crate::common::shell::shell_join;

/// Runs a fully built argv to completion.
pub trait CommandRunner {
    fn run(&self, argv: &[String]) -> Result<(), PackageError>;
}

/// Runs the command with the parent's stdin, stdout and stderr.
///
/// Output is never captured so the package manager's progress shows up live.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamingRunner;

impl CommandRunner for StreamingRunner {
    fn run(&self, argv: &[String]) -> Result<(), PackageError> {
        let (program, args) = argv.split_first().ok_or(PackageError::EmptyCommand)?;
        debug!("Running {}", shell_join(argv));

        let output = cmd(program.as_str(), args)
            .unchecked()
            .run()
            .map_err(|source| PackageError::Spawn {
                program: program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(PackageError::Exit {
                command: shell_join(argv),
                status: output.status,
            });
        }

        Ok(())
    }
}

/// Prints the command instead of running it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&self, argv: &[String]) -> Result<(), PackageError> {
        if argv.is_empty() {
            return Err(PackageError::EmptyCommand);
        }
        println!("{} {}", "[DRY RUN]".yellow(), shell_join(argv));
        Ok(())
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for Box<R> {
    fn run(&self, argv: &[String]) -> Result<(), PackageError> {
        (**self).run(argv)
    }
}
