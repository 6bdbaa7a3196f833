//! Output styling helpers.

use owo_colors::OwoColorize;
use std::fmt::Display;

/// Check mark used in success lines.
pub const CHECK: &str = "✓";
/// Arrow used in step lines.
pub const ARROW: &str = "→";

/// Convenience styling for displayable values.
pub trait Stylize: Display + Sized {
    /// Bold, for headings and key names.
    fn emphasis(&self) -> String {
        self.bold().to_string()
    }
    /// Cyan, for values the user cares about (branches, URLs).
    fn accent(&self) -> String {
        self.cyan().to_string()
    }
    /// Green, for success summaries.
    fn success(&self) -> String {
        self.green().to_string()
    }
    /// Yellow, for warnings.
    fn warn(&self) -> String {
        self.yellow().to_string()
    }
    /// Red, for errors.
    fn error(&self) -> String {
        self.red().to_string()
    }
    /// Dimmed, for secondary detail.
    fn muted(&self) -> String {
        self.dimmed().to_string()
    }
}

impl<T: Display> Stylize for T {}

/// Styled check mark.
pub fn check() -> String {
    CHECK.green().to_string()
}

/// Styled arrow.
pub fn arrow() -> String {
    ARROW.dimmed().to_string()
}
