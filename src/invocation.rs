//! Splitting the raw argument vector into the launcher's own options and the
//! arguments forwarded to the runtime.

/// Separates launcher options from forwarded arguments.
pub const BOUNDARY: &str = "--";

/// The argument vector of one launch, split at the first [`BOUNDARY`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Invocation {
    /// Tokens before the boundary. Parsed by the launcher, never forwarded.
    pub own: Vec<String>,
    /// Tokens after the boundary, in order. Later `--` tokens are kept.
    pub forwarded: Vec<String>,
}

impl Invocation {
    /// Split `args` (without the program name) at the first `--`.
    ///
    /// Without a boundary every token is the launcher's own and nothing is
    /// forwarded.
    pub fn split(args: impl IntoIterator<Item = String>) -> Self {
        let mut own = Vec::new();
        let mut forwarded = Vec::new();

        let mut past_boundary = false;
        for arg in args {
            if past_boundary {
                forwarded.push(arg);
            } else if arg == BOUNDARY {
                past_boundary = true;
            } else {
                own.push(arg);
            }
        }

        Self { own, forwarded }
    }

    /// Index into [`Self::forwarded`] of the script specifier: the first
    /// token not starting with `-`.
    #[must_use]
    pub fn script_index(&self) -> Option<usize> {
        self.forwarded.iter().position(|arg| !arg.starts_with('-'))
    }

    /// The script specifier, if any.
    #[must_use]
    pub fn script(&self) -> Option<&str> {
        self.script_index().map(|i| self.forwarded[i].as_str())
    }
}
