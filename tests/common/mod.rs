//! Common test helpers shared across integration tests

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)] // Not all helpers are used by every test file

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use url::Url;

/// Package version for testing --version flag
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Helper to get the compiled binary path
pub fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_maprun"))
}

/// Helper to create a temporary directory for tests
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Helper to create a deno.json in a directory
pub fn create_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("deno.json");
    fs::write(&path, content).unwrap();
    path
}

/// Helper to create an executable script standing in for the runtime.
///
/// It prints each argument it receives on its own line, so tests can check
/// exactly which tokens arrived.
pub fn create_fake_runtime(dir: &Path) -> PathBuf {
    create_executable(
        dir,
        "fake-runtime",
        "#!/bin/sh\nfor arg in \"$@\"; do printf '%s\\n' \"$arg\"; done\n",
    )
}

/// Helper to create an executable shell script in a directory
pub fn create_executable(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// The `file:` URL a path inside the working directory resolves to.
///
/// The child sees the canonical form of the temp directory as its cwd.
pub fn file_url(dir: &Path, relative: &str) -> String {
    let dir = fs::canonicalize(dir).unwrap();
    Url::from_file_path(dir.join(relative)).unwrap().to_string()
}

/// Helper to create a Command with test environment
///
/// Runs in `dir` with the fake runtime and clears variables that would
/// change the launcher's defaults or output.
pub fn test_command(dir: &Path, runtime: &Path) -> Command {
    let mut cmd = Command::new(get_binary_path());
    cmd.current_dir(dir)
        .env("MAPRUN_RUNTIME", runtime)
        .env_remove("MAPRUN_CONFIG")
        .env_remove("MAPRUN_SHELL")
        .env_remove("RUST_LOG");
    cmd
}

/// Stdout of a finished command, one entry per line
pub fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}
