use crate::env::Environment;
use anyhow::Result;
use std::io::Write;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
/// This mirrors the convention used by POSIX shells and many command-line
/// tools. Whether the interactive loop keeps running is a separate concern,
/// tracked by [`Environment::should_exit`] — a failing command never stops
/// the loop by itself.
pub type ExitCode = i32;

/// Object-safe trait for any command that can be executed by the shell.
///
/// Built-ins implement this via a blanket impl in the `builtin` module;
/// external programs via `ExternalCommand`. Commands write their own output
/// and diagnostics to the provided streams; external commands ignore them
/// and let the child inherit the real stdio handles.
pub trait ExecutableCommand {
    /// Executes the command.
    fn execute(
        self: Box<Self>,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode>;
}

/// Factory that tries to create a command from a name and its arguments.
///
/// Returns `None` when the factory doesn't recognize the `name`. Factories
/// are scanned in registration order and the first match wins, so the
/// registry's order is part of the dispatch contract.
pub trait CommandFactory {
    /// Attempt to create a command instance for the provided name and arguments.
    fn try_create(
        &self,
        env: &Environment,
        name: &str,
        args: &[&str],
    ) -> Option<Box<dyn ExecutableCommand>>;
}
