//! Assembling the shell command line that launches the runtime.

use crate::error::LaunchError;
use std::fmt;
use std::path::Path;

/// The quoted, space-joined command line for one launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    tokens: Vec<String>,
    line: String,
}

impl CommandLine {
    /// Build the command line `<runtime> <forwarded...>`.
    ///
    /// Empty tokens are dropped. Every remaining token is quoted for a POSIX
    /// shell so that splitting the line reproduces the tokens exactly.
    ///
    /// # Errors
    ///
    /// [`LaunchError::NonUnicodeRuntimePath`] if the runtime path is not
    /// UTF-8, [`LaunchError::Quote`] if a token contains a NUL byte.
    pub fn assemble(runtime: &Path, forwarded: &[String]) -> Result<Self, LaunchError> {
        let runtime = runtime
            .to_str()
            .ok_or_else(|| LaunchError::NonUnicodeRuntimePath(runtime.to_path_buf()))?;

        let tokens: Vec<String> = std::iter::once(runtime)
            .chain(forwarded.iter().map(String::as_str))
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();

        let quoted = tokens
            .iter()
            .map(|token| {
                shlex::try_quote(token).map_err(|_| LaunchError::Quote(token.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            line: quoted.join(" "),
            tokens,
        })
    }

    /// The unquoted tokens, runtime path first.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.line
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assemble(forwarded: &[&str]) -> CommandLine {
        let forwarded: Vec<String> = forwarded.iter().map(|s| (*s).to_string()).collect();
        CommandLine::assemble(Path::new("/usr/bin/deno"), &forwarded).unwrap()
    }

    #[test]
    fn test_plain_tokens_are_not_quoted() {
        let line = assemble(&["-A", "file:///work/src/main.ts", "--flag"]);
        assert_eq!(line.as_str(), "/usr/bin/deno -A file:///work/src/main.ts --flag");
    }

    #[test]
    fn test_runtime_only() {
        assert_eq!(assemble(&[]).as_str(), "/usr/bin/deno");
    }

    #[test]
    fn test_empty_tokens_are_dropped() {
        let line = assemble(&["", "main.ts", ""]);
        assert_eq!(line.tokens(), ["/usr/bin/deno", "main.ts"]);
        assert_eq!(line.as_str(), "/usr/bin/deno main.ts");
    }

    #[test]
    fn test_special_characters_round_trip() {
        let forwarded = [
            "main.ts",
            "hello world",
            "it's",
            "$HOME",
            "a;b|c&d",
            "`cmd`",
            "\"quoted\"",
            "*.ts",
            "line\nbreak",
        ];
        let line = assemble(&forwarded);

        let reparsed = shlex::split(line.as_str()).unwrap();
        assert_eq!(reparsed, line.tokens());
        assert_eq!(&reparsed[1..], forwarded);
    }

    #[test]
    fn test_runtime_path_with_space_is_quoted() {
        let line = CommandLine::assemble(Path::new("/opt/my tools/deno"), &[]).unwrap();
        assert_ne!(line.as_str(), "/opt/my tools/deno");
        assert_eq!(shlex::split(line.as_str()).unwrap(), ["/opt/my tools/deno"]);
    }

    #[test]
    fn test_nul_byte_is_rejected() {
        let result = CommandLine::assemble(Path::new("/usr/bin/deno"), &["a\0b".to_string()]);
        assert!(matches!(result, Err(LaunchError::Quote(_))));
    }

    #[test]
    fn test_display_matches_line() {
        let line = assemble(&["main.ts"]);
        assert_eq!(line.to_string(), line.as_str());
    }
}
