use crate::command::{CommandFactory, ExecutableCommand, ExitCode};
use crate::env::Environment;
use crate::interpreter::Factory;
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::env as stdenv;
use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::path::Path;
use std::process::ExitStatus;

/// Command that is not a builtin.
///
/// Holds the resolved executable path and the argument list. Execution
/// spawns exactly one child with inherited stdio and blocks until that child
/// has exited or been killed by a signal; a merely stopped child keeps the
/// wait alive, so the interpreter never runs anything in the background.
pub struct ExternalCommand {
    name: OsString,
    args: Vec<OsString>,
}

impl ExternalCommand {
    pub fn new(name: OsString, args: Vec<OsString>) -> Self {
        Self { name, args }
    }
}

impl CommandFactory for Factory<ExternalCommand> {
    fn try_create(
        &self,
        _env: &Environment,
        name: &str,
        args: &[&str],
    ) -> Option<Box<dyn ExecutableCommand>> {
        let search_paths = stdenv::var_os("PATH").unwrap_or_default();
        let executable = resolve(&search_paths, Path::new(name))?;
        Some(Box::new(ExternalCommand::new(
            executable.as_os_str().to_owned(),
            args.iter().map(|x| x.into()).collect(),
        )))
    }
}

impl ExecutableCommand for ExternalCommand {
    fn execute(
        self: Box<Self>,
        _stdout: &mut dyn Write,
        stderr: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        let mut child = std::process::Command::new(&self.name)
            .args(&self.args)
            .current_dir(&env.current_dir)
            .spawn()
            .with_context(|| format!("failed to launch {}", Path::new(&self.name).display()))?;
        let exit_status = child.wait().with_context(|| {
            format!("failed to wait for {}", Path::new(&self.name).display())
        })?;
        match exit_status.code() {
            Some(code) => Ok(code),
            None => {
                // Killed by a signal; would otherwise end silently.
                writeln!(
                    stderr,
                    "{}: {}",
                    Path::new(&self.name).display(),
                    exit_status
                )?;
                Ok(terminated_by_signal(exit_status))
            }
        }
    }
}

#[cfg(unix)]
fn terminated_by_signal(exit_status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    if let Some(signal) = ExitStatusExt::signal(&exit_status) {
        128 + signal
    } else if ExitStatusExt::core_dumped(&exit_status) {
        255
    } else {
        -1
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_exit_status: ExitStatus) -> i32 {
    -1
}

/// Resolve a command name to an executable path the way `execvp` would.
///
/// A name containing a path separator (absolute, `./x`, `a/b`) bypasses the
/// search and is returned as-is if it exists. A bare name is looked up in
/// each directory of `search_paths` in order; the first existing match wins.
/// An empty name resolves to nothing.
pub(crate) fn resolve<'a>(search_paths: &OsStr, name: &'a Path) -> Option<Cow<'a, Path>> {
    if name.as_os_str().is_empty() {
        return None;
    }

    if name.is_absolute() || name.components().nth(1).is_some() {
        return name.exists().then_some(Cow::Borrowed(name));
    }

    for dir in stdenv::split_paths(search_paths) {
        let candidate = dir.join(name);
        if candidate.exists() {
            return Some(Cow::Owned(candidate));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    fn osstr(s: &str) -> &OsStr {
        OsStr::new(s)
    }

    #[test]
    #[cfg(unix)]
    fn absolute_existing() {
        let path = Path::new("/bin/sh");
        let found = resolve(osstr("/bin"), path).expect("expected to find /bin/sh");
        assert_eq!(found.as_ref(), path);
    }

    #[test]
    #[cfg(unix)]
    fn absolute_nonexisting() {
        let path = Path::new("/bin/nonexisting");
        assert!(resolve(osstr("/bin"), path).is_none());
    }

    #[test]
    #[cfg(unix)]
    fn bare_name_found_in_path() {
        let found = resolve(osstr("/bin"), Path::new("sh"))
            .expect("expected to find 'sh' in /bin via PATH search");
        assert!(found.as_ref().ends_with("sh"));
        assert!(found.as_ref().starts_with("/bin"));
    }

    #[test]
    #[cfg(unix)]
    fn bare_name_not_found_in_path() {
        assert!(resolve(osstr("/bin"), Path::new("nonexisting")).is_none());
    }

    #[test]
    #[cfg(unix)]
    fn bare_name_searches_path_entries_in_order() {
        // "sh" exists in /bin; an empty first entry must not shadow it.
        let found = resolve(osstr("/nonexistent-dir:/bin"), Path::new("sh"))
            .expect("expected the second PATH entry to match");
        assert!(found.as_ref().starts_with("/bin"));
    }

    #[test]
    #[cfg(unix)]
    fn multiple_components_relative_path() {
        use std::fs;
        use std::fs::File;

        let _lock = crate::testutil::lock_current_dir();
        let cwd_before = stdenv::current_dir().expect("cwd");
        let tmp_base =
            stdenv::temp_dir().join(format!("tinysh_external_tests_{}_mc", std::process::id()));
        let _ = fs::remove_dir_all(&tmp_base);
        fs::create_dir_all(tmp_base.join("bin")).expect("create temp bin dir");
        File::create(tmp_base.join("bin").join("sh")).expect("touch bin/sh");

        stdenv::set_current_dir(&tmp_base).expect("set cwd");
        let res = resolve(osstr("/does/not/matter"), Path::new("bin/sh"));
        stdenv::set_current_dir(&cwd_before).ok();

        // A separator suppresses the PATH search and the name is used as-is.
        let found = res.expect("expected to find relative 'bin/sh' in current dir");
        assert_eq!(found.as_ref(), Path::new("bin/sh"));
        let _ = fs::remove_dir_all(tmp_base);
    }

    #[test]
    fn empty_name_is_none() {
        assert!(resolve(OsStr::new("/bin"), Path::new("")).is_none());
    }
}
