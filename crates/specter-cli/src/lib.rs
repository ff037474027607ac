//! Command-line front end for specter.
//!
//! The binary is a thin wrapper: argument definitions live in [`args`],
//! logging setup in [`logging`], and every subcommand in [`run`], which
//! writes to any [`std::io::Write`] so it can be driven in-process.

pub mod args;
pub mod logging;
pub mod run;

pub use args::{Cli, Command, LogLevel, OutputFormat};
pub use logging::init_logging;
