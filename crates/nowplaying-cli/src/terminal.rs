//! Terminal capability probing: color support and report width.

use crate::types::ColorMode;
use is_terminal::IsTerminal;

pub const DEFAULT_COLUMNS: usize = 80;

fn no_color_requested() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty())
}

fn resolve_color(mode: ColorMode, is_tty: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => is_tty && !no_color_requested(),
    }
}

pub fn stdout_color_enabled(mode: ColorMode) -> bool {
    resolve_color(mode, std::io::stdout().is_terminal())
}

/// `None` means the mode has not been chosen yet; errors are still worth
/// coloring on an interactive stderr.
pub fn stderr_color_enabled(mode: Option<ColorMode>) -> bool {
    resolve_color(mode.unwrap_or_default(), std::io::stderr().is_terminal())
}

/// Report width: explicit override, terminal width, `$COLUMNS`, then 80.
pub fn terminal_width(override_columns: Option<usize>) -> usize {
    if let Some(columns) = override_columns {
        return columns;
    }

    if let Some((terminal_size::Width(w), _)) = terminal_size::terminal_size() {
        return usize::from(w);
    }

    std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .filter(|&columns| columns > 0)
        .unwrap_or(DEFAULT_COLUMNS)
}
