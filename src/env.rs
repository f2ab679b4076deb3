use std::env as stdenv;
use std::path::PathBuf;

/// Mutable, user-level view of the interpreter state.
///
/// The environment contains:
/// - `current_dir`: the working directory for command execution. This is the
///   single piece of global mutable state in the interpreter; only the `cd`
///   builtin writes it. Children spawned afterwards observe the value that
///   was current when they were created.
/// - `should_exit`: a flag the interactive loop checks to know when to
///   terminate. Only the `exit` builtin sets it.
///
/// Note: fields are public for simplicity to keep the crate small.
#[derive(Debug, Clone)]
pub struct Environment {
    /// The current working directory for command execution.
    pub current_dir: PathBuf,
    /// When set to true, indicates that the interactive loop should exit.
    pub should_exit: bool,
}

impl Environment {
    /// Capture the current process state into a new `Environment` instance.
    ///
    /// Initializes `current_dir` from `std::env::current_dir()` and
    /// `should_exit` to `false`.
    pub fn new() -> Self {
        let current_dir = stdenv::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            current_dir,
            should_exit: false,
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::env::Environment;
    use std::env as stdenv;

    #[test]
    fn test_new_captures_current_dir() {
        let env = Environment::new();
        assert_eq!(env.current_dir, stdenv::current_dir().unwrap());
        assert!(!env.should_exit);
    }
}
