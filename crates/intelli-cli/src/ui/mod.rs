//! Terminal UI utilities for status messages and run summaries.
//!
//! # Examples
//!
//! ```no_run
//! use intelli_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Stub generated");
//! ui::warning("3 signatures need manual handling");
//! ```

mod format;
mod messages;

pub use format::{format_duration, format_report, print_report};
pub use messages::{info, success, warning};

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal detection on stderr.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color support based on environment.
///
/// Disables `owo-colors` output globally when colors should not be used or
/// `--no-color` was passed.
pub fn init_colors(no_color: bool) {
    owo_colors::set_override(!no_color && should_use_color());
}
