//! Echoing and executing the assembled command line.

use crate::color;
use crate::command::CommandLine;
use crate::error::LaunchError;
use std::process::{Command, ExitStatus, Stdio};

/// Shell used to run the command line when `--shell` is not given.
pub const DEFAULT_SHELL: &str = "sh";

/// The `$ <line>` form written to stderr before execution.
#[must_use]
pub fn echo_line(command: &CommandLine, color: bool) -> String {
    color::paint_gray(&format!("$ {command}"), color)
}

/// Write the command line to stderr.
pub fn echo(command: &CommandLine, color: bool) {
    eprintln!("{}", echo_line(command, color));
}

/// Run `<shell> -c <line>` with inherited stdio and wait for it.
///
/// Returns the exit code the launcher should exit with.
///
/// # Errors
///
/// [`LaunchError::Spawn`] if the shell cannot be started.
pub fn execute(shell: &str, command: &CommandLine) -> Result<i32, LaunchError> {
    let status = Command::new(shell)
        .arg("-c")
        .arg(command.as_str())
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| LaunchError::Spawn {
            shell: shell.to_string(),
            source,
        })?;

    Ok(exit_code(status))
}

/// Map a child's exit status to our own exit code. Signals become `128 + n`.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
