//! A tiny interactive command interpreter.
//!
//! This crate implements the smallest useful shell: a prompt loop that reads
//! one line at a time, splits it into whitespace-delimited tokens, executes
//! one of a fixed set of built-in commands (`cd`, `help`, `exit`) in-process,
//! or launches the named external program and waits for it to finish in the
//! foreground. There are no pipes, no redirections and no job control.
//!
//! The main entry point is [`Interpreter`], which owns the ordered command
//! registry and the interactive loop. The public modules [`command`] and
//! [`env`] expose the traits and state needed to implement additional
//! commands.

mod builtin;
pub mod command;
pub mod env;
mod external;
mod interpreter;
mod lexer;
mod reader;
#[cfg(test)]
mod testutil;

/// Just a convenient re-export of the interactive command runner.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::Interpreter;
