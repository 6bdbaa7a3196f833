//! Core types for pushmr

use serde::{Deserialize, Serialize};

/// A git remote discovered from the repository configuration.
///
/// Read-only view onto external state; never written back. Duplicate
/// config sections or multi-value `url` entries produce one `Remote`
/// per url so ambiguity is surfaced instead of silently resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remote {
    /// Remote name (e.g., "origin")
    pub name: String,
    /// Remote URL
    pub url: String,
}

impl Remote {
    /// Label shown in pick-lists.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.url)
    }
}

/// Captured result of one external command invocation.
///
/// Both the exit code and the raw text matter: informational output,
/// including the created merge-request URL, often arrives on the
/// diagnostic stream rather than as a structured value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandOutput {
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
    /// Process exit code; `None` when terminated by a signal.
    pub exit_code: Option<i32>,
}

impl CommandOutput {
    /// Whether the command exited zero.
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Both streams joined, for pattern matching.
    #[must_use]
    pub fn combined(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Short failure detail: trimmed stderr, falling back to stdout.
    #[must_use]
    pub fn detail(&self) -> String {
        let err = self.stderr.trim();
        if err.is_empty() {
            self.stdout.trim().to_string()
        } else {
            err.to_string()
        }
    }
}
