//! Locating the runtime executable.

use crate::error::LaunchError;
use std::path::PathBuf;

/// Runtime launched when `--runtime` is not given.
pub const DEFAULT_RUNTIME: &str = "deno";

/// Resolve `program` to an absolute path, searching `PATH` for bare names.
///
/// # Errors
///
/// [`LaunchError::RuntimeNotFound`] if no such executable exists.
pub fn locate_runtime(program: &str) -> Result<PathBuf, LaunchError> {
    which::which(program).map_err(|source| LaunchError::RuntimeNotFound {
        runtime: program.to_string(),
        source,
    })
}
