//! Terminal colouring for the echoed command line.

use clap::ValueEnum;
use std::io::IsTerminal;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Colour when stderr is a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Whether output to stderr should be coloured.
    #[must_use]
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
            }
        }
    }
}

/// Wrap `text` in the ANSI bright-black (gray) style when `enabled`.
#[must_use]
pub fn paint_gray(text: &str, enabled: bool) -> String {
    if enabled {
        format!("\x1b[90m{text}\x1b[39m")
    } else {
        text.to_string()
    }
}
