//! # maprun
//!
//! Launch a runtime with the script argument resolved through the project's
//! import map (`deno.json`).

pub mod cli;
pub mod color;
pub mod command;
pub mod config;
pub mod error;
pub mod executor;
pub mod invocation;
pub mod logging;
pub mod resolver;
pub mod runtime;

/// Print an error message and exit with code 1.
pub fn fatal_error(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}
