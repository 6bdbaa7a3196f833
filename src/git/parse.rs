//! Parsers for human-oriented git output.
//!
//! git emits the values the workflow needs as prose, not structure, so
//! every parser here is best-effort string matching kept separate from
//! the command invocation for testability.

use crate::types::CommandOutput;

/// Sentinel `git remote show` prints when the remote HEAD is unknown.
/// Treated as absent, never as a literal branch name.
const UNKNOWN_HEAD: &str = "(unknown)";

/// Current branch from `git rev-parse --abbrev-ref HEAD` output.
///
/// A detached HEAD prints the literal `HEAD`; both that and an empty
/// result mean there is no usable branch.
pub fn current_branch(output: &CommandOutput) -> Option<String> {
    if !output.success() {
        return None;
    }
    let name = output.stdout.trim();
    if name.is_empty() || name == "HEAD" {
        None
    } else {
        Some(name.to_string())
    }
}

/// The server-advertised default branch from `git remote show` output.
///
/// Authoritative when present (survives default-branch renames). Returns
/// `None` when the line is missing or the remote reports `(unknown)`.
pub fn head_branch(show_output: &str) -> Option<String> {
    for line in show_output.lines() {
        if let Some(value) = line.trim().strip_prefix("HEAD branch:") {
            let value = value.trim();
            if value.is_empty() || value == UNKNOWN_HEAD {
                return None;
            }
            return Some(value.to_string());
        }
    }
    None
}

/// Branch names from `git branch -r` output, scoped to `remote`.
///
/// The `HEAD ->` pointer line is dropped and names lose their
/// `<remote>/` prefix.
pub fn remote_branches(listing: &str, remote: &str) -> Vec<String> {
    let prefix = format!("{remote}/");
    listing
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.contains("->"))
        .filter_map(|line| line.strip_prefix(&prefix))
        .map(ToString::to_string)
        .collect()
}

/// How a non-zero `git merge` exit should be classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeFailureKind {
    /// Conflicts left in the working tree; user resolves and re-runs.
    Conflict,
    /// Divergent-branch refusal. Should not occur after a fetch-then-merge
    /// sequence.
    Divergent,
    /// Anything else.
    Other,
}

/// Classify a failed merge from its combined output.
pub fn classify_merge_failure(output: &str) -> MergeFailureKind {
    if output.contains("Automatic merge failed; fix conflicts") || output.contains("CONFLICT") {
        MergeFailureKind::Conflict
    } else if output.contains("divergent branches") {
        MergeFailureKind::Divergent
    } else {
        MergeFailureKind::Other
    }
}
