//! UI context for environment detection and configuration.

use std::io::IsTerminal;

use crate::helpers::OutputFormat;

use super::mode::OutputMode;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
    /// Resolved output mode
    pub mode: OutputMode,
}

impl UiContext {
    /// Create context from environment and CLI flags.
    pub fn from_env(json_flag: bool, format: Option<OutputFormat>) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        // Resolve color: disabled if NO_COLOR env or TERM=dumb
        let color = is_tty && !no_color_env && !term_is_dumb;
        let mode = OutputMode::resolve(json_flag, format, is_tty, term_is_dumb);

        Self { color, mode }
    }

    /// Context for the interactive menu: always a table, colored on a TTY.
    pub fn interactive() -> Self {
        let mut ctx = Self::from_env(false, Some(OutputFormat::Table));
        ctx.mode = OutputMode::Pretty;
        ctx
    }
}
