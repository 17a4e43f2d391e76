//! # maprun
//!
//! Reads the import map from `deno.json`, resolves the script argument through
//! it and runs the runtime with the result.
//!
//! ## Usage
//!
//! - Run a mapped script: `maprun -- app/main.ts`
//! - Pass runtime flags: `maprun -- -A app/main.ts --port 8000`
//! - Use another config: `maprun --config tools.json -- app/main.ts`
//! - Show the command only: `maprun --dry-run -- app/main.ts`

/// Entry point for the CLI tool.
fn main() {
    maprun::cli::run_cli();
}
