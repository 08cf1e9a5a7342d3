//! Supporting helpers for CLI messages.

use owo_colors::OwoColorize;

fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Prefix for fatal CLI errors printed to stderr.
pub fn error_prefix() -> String {
    if color_enabled() {
        "✖ error:".red().bold().to_string()
    } else {
        "✖ error:".to_string()
    }
}

/// Prefix for non-fatal notes printed to stderr.
pub fn note_prefix() -> String {
    if color_enabled() {
        "◆ note:".blue().bold().to_string()
    } else {
        "◆ note:".to_string()
    }
}
