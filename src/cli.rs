//! CLI module containing the main entry point logic.
//!
//! Only the arguments before the first `--` are parsed here. Everything after
//! it is forwarded to the runtime, with the script specifier resolved through
//! the import map.

use crate::color::ColorChoice;
use crate::command::CommandLine;
use crate::error::LaunchError;
use crate::invocation::Invocation;
use crate::{config, executor, logging, resolver, runtime};
use clap::Parser as ClapParser;
use std::ffi::OsString;
use std::path::PathBuf;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The launcher's own options. None of these are forwarded to the runtime.
#[derive(ClapParser, Debug)]
#[command(name = "maprun")]
#[command(version = PKG_VERSION)]
#[command(about = "Resolve a script through the import map and run it", long_about = None)]
#[command(override_usage = "maprun [OPTIONS] -- [RUNTIME_FLAGS]... <SCRIPT> [SCRIPT_ARGS]...")]
pub struct Cli {
    /// Config file holding the import map
    #[arg(
        short,
        long,
        value_name = "PATH",
        env = "MAPRUN_CONFIG",
        default_value = config::DEFAULT_CONFIG_FILE
    )]
    pub config: PathBuf,

    /// Runtime executable to launch (looked up on PATH)
    #[arg(
        long,
        value_name = "PROGRAM",
        env = "MAPRUN_RUNTIME",
        default_value = runtime::DEFAULT_RUNTIME
    )]
    pub runtime: String,

    /// Shell that runs the assembled command line
    #[arg(
        long,
        value_name = "PROGRAM",
        env = "MAPRUN_SHELL",
        default_value = executor::DEFAULT_SHELL
    )]
    pub shell: String,

    /// When to colour the echoed command
    #[arg(long, value_name = "WHEN", value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Do not echo the command before running it
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the command to stdout instead of running it
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

/// Convert the raw argument vector, rejecting anything that is not UTF-8.
///
/// # Errors
///
/// [`LaunchError::NonUnicodeArgument`] for the first offending argument.
pub fn collect_args(
    args: impl IntoIterator<Item = OsString>,
) -> Result<Vec<String>, LaunchError> {
    args.into_iter()
        .map(|arg| arg.into_string().map_err(LaunchError::NonUnicodeArgument))
        .collect()
}

/// Load the import map, resolve the script and build the command line.
///
/// # Errors
///
/// Any configuration, runtime lookup or quoting failure. A script that does
/// not resolve is not an error.
pub fn prepare(cli: &Cli, mut invocation: Invocation) -> Result<CommandLine, LaunchError> {
    let loaded = config::load_import_map(&cli.config)?;
    resolver::resolve_script(&loaded, &mut invocation);

    let runtime_path = runtime::locate_runtime(&cli.runtime)?;
    CommandLine::assemble(&runtime_path, &invocation.forwarded)
}

/// Run one launch and return the exit code to finish with.
///
/// # Errors
///
/// See [`prepare`] and [`executor::execute`].
pub fn launch(cli: &Cli, invocation: Invocation) -> Result<i32, LaunchError> {
    let command = prepare(cli, invocation)?;

    if cli.dry_run {
        println!("{command}");
        return Ok(0);
    }

    if !cli.quiet {
        executor::echo(&command, cli.color.enabled());
    }

    executor::execute(&cli.shell, &command)
}

/// Parse the process arguments and launch.
///
/// Usage errors exit with code 2 from clap, launch errors with code 1.
pub fn run_cli() {
    let result = {
        let _logger_guard = logging::init();
        run(std::env::args_os())
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => crate::fatal_error(&format!("Error: {e}")),
    }
}

fn run(args: impl IntoIterator<Item = OsString>) -> Result<i32, LaunchError> {
    let mut args = collect_args(args)?.into_iter();
    let program = args.next().unwrap_or_else(|| "maprun".to_string());

    let invocation = Invocation::split(args);
    let cli = Cli::parse_from(std::iter::once(program).chain(invocation.own.iter().cloned()));

    launch(&cli, invocation)
}
