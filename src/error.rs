//! Errors that abort a launch.
//!
//! A script specifier that fails to resolve is not one of these: resolution
//! falls back to the original argument and the launch continues.

use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config file '{}': {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },
    #[error("Invalid \"importMap\" location {value:?} in '{}'", config.display())]
    InvalidImportMapPath { config: PathBuf, value: String },
    #[error("Failed to determine the current directory: {0}")]
    CurrentDir(std::io::Error),

    #[error("Argument is not valid unicode: {0:?}")]
    NonUnicodeArgument(OsString),

    #[error("Runtime '{runtime}' not found: {source}")]
    RuntimeNotFound {
        runtime: String,
        source: which::Error,
    },
    #[error("Runtime path is not valid unicode: {0:?}")]
    NonUnicodeRuntimePath(PathBuf),
    #[error("Cannot quote argument {0:?}: contains a NUL byte")]
    Quote(String),

    #[error("Failed to start shell '{shell}': {source}")]
    Spawn {
        shell: String,
        source: std::io::Error,
    },
}
