use crate::command::{CommandFactory, ExitCode};
use crate::env::Environment;
use crate::lexer;
use crate::reader::LineReader;
use anyhow::{Context, Result, anyhow};
use std::io::{self, BufRead, Write};

/// Factory allows creating instances of ExecutableCommand.
///
/// Only supports commands defined in this crate — builtins and
/// ExternalCommand.
pub(crate) struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

/// The interactive command interpreter.
///
/// Owns the [`Environment`] and an ordered list of [`CommandFactory`]
/// objects that are queried to create commands by name; the first factory to
/// recognize a name wins, so builtins shadow external programs. See
/// [`Default`] for the registry included out of the box.
///
/// Example
/// ```
/// use tinysh::Interpreter;
/// let mut sh = Interpreter::default();
/// let code = sh.run("help", &[]).unwrap();
/// assert_eq!(code, 0);
/// ```
pub struct Interpreter {
    env: Environment,
    commands: Vec<Box<dyn CommandFactory>>,
}

impl Interpreter {
    /// Create a new interpreter with a custom set of command factories.
    pub fn new(commands: Vec<Box<dyn CommandFactory>>) -> Self {
        Self {
            env: Environment::new(),
            commands,
        }
    }

    /// Run a single command invocation by name with arguments.
    ///
    /// Returns the command's exit code, or an error if no factory recognizes
    /// the name (i.e. it is neither a builtin nor resolvable as an external
    /// program) or the command fails to execute.
    pub fn run(&mut self, name: &str, args: &[&str]) -> Result<ExitCode> {
        let mut stdout = io::stdout().lock();
        let mut stderr = io::stderr().lock();
        for factory in &self.commands {
            if let Some(cmd) = factory.try_create(&self.env, name, args) {
                return cmd.execute(&mut stdout, &mut stderr, &mut self.env);
            }
        }
        Err(anyhow!("command not found: {}", name))
    }

    /// Route one argument vector.
    ///
    /// An empty vector is a no-op that succeeds; otherwise the first token
    /// is the command name and the rest are its arguments. Pure routing —
    /// any side effects belong to the command itself.
    pub fn dispatch(&mut self, argv: &[String]) -> Result<ExitCode> {
        match argv.split_first() {
            None => Ok(0),
            Some((name, rest)) => {
                let args: Vec<&str> = rest.iter().map(String::as_str).collect();
                self.run(name, &args)
            }
        }
    }

    /// The interactive Read-Eval-Print Loop over standard input.
    ///
    /// Returns when the `exit` builtin has run. Command failures of every
    /// kind are reported on standard error and the loop keeps going; only a
    /// failure of the input stream itself is returned as an error.
    pub fn repl(&mut self) -> Result<()> {
        let mut reader = LineReader::new(io::stdin().lock());
        self.run_loop(&mut reader)
    }

    /// Loop body, generic over the input source so sessions can be scripted
    /// in tests.
    ///
    /// Each iteration owns one line and one argument vector; both are
    /// dropped before the next prompt. A command's child process (if any)
    /// has been fully waited on before the next prompt is printed.
    fn run_loop<R: BufRead>(&mut self, reader: &mut LineReader<R>) -> Result<()> {
        while !self.env.should_exit {
            {
                let mut stdout = io::stdout().lock();
                write!(stdout, "> ")?;
                stdout.flush()?;
            }
            let line = reader.read_line().context("failed to read input")?;
            let argv = lexer::split_into_tokens(&line);
            if let Err(err) = self.dispatch(&argv) {
                eprintln!("tinysh: {err:#}");
            }
        }
        Ok(())
    }
}

impl Default for Interpreter {
    /// Create an interpreter with the default registry, in registration
    /// order: the `cd`, `help` and `exit` builtins, then the external
    /// command launcher as the fallback.
    fn default() -> Self {
        use crate::builtin::{Cd, Exit, Help};
        use crate::external::ExternalCommand;
        Self::new(vec![
            Box::new(Factory::<Cd>::default()),
            Box::new(Factory::<Help>::default()),
            Box::new(Factory::<Exit>::default()),
            Box::new(Factory::<ExternalCommand>::default()),
        ])
    }
}
