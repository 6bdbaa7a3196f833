//! Error types for pushmr

use std::path::PathBuf;
use thiserror::Error;

/// All errors the workflow can surface.
///
/// Every failure is terminal for the invocation that produced it; the
/// user re-runs after remediation. `UrlOpenFailed` and `CheckoutFailed`
/// never escape the workflow — they are downgraded to warnings because
/// the merge request already exists by the time they can occur.
#[derive(Debug, Error)]
pub enum Error {
    /// The starting directory could not be determined or read.
    #[error("no repository: {0}")]
    NoRepository(String),

    /// No `.git` marker found walking up from the start directory.
    #[error("'{0}' is not inside a git repository")]
    NotAGitRepository(PathBuf),

    /// The repository's config file is missing or unreadable.
    #[error("cannot read git config at '{path}': {reason}")]
    ConfigUnreadable {
        /// Path of the config file that failed to load.
        path: PathBuf,
        /// Underlying filesystem error.
        reason: String,
    },

    /// The repository configuration contains no remotes.
    #[error("repository has no configured remotes")]
    NoRemote,

    /// The user dismissed a pick-list. Deliberate abort, not a failure;
    /// the binary exits silently with success.
    #[error("selection cancelled")]
    SelectionCancelled,

    /// The remote advertises no branches the merge request could target.
    #[error("remote '{0}' has no branches to target")]
    NoRemoteBranches(String),

    /// HEAD is detached or the current branch name could not be read.
    #[error("HEAD is detached or the current branch could not be determined")]
    DetachedOrUnknownBranch,

    /// `git fetch` exited non-zero.
    #[error("fetch from '{remote}' failed: {detail}")]
    FetchFailed {
        /// Remote that was being fetched.
        remote: String,
        /// Trimmed command output.
        detail: String,
    },

    /// The merge stopped on conflicts. Recoverable: resolve, commit,
    /// re-run — the workflow holds no state between invocations.
    #[error("merge stopped on conflicts; resolve them, commit, and re-run")]
    MergeConflict,

    /// Local and remote branches have diverged. Should not occur given
    /// the fetch-then-merge sequencing.
    #[error("local and remote branches have diverged: {0}")]
    DivergentBranches(String),

    /// `git merge` failed for a reason other than conflicts/divergence.
    #[error("merge of '{reference}' failed: {detail}")]
    MergeFailed {
        /// The `remote/branch` reference that was being merged.
        reference: String,
        /// Trimmed command output.
        detail: String,
    },

    /// `git push` exited non-zero; no merge request was created.
    #[error("push to '{remote}' failed: {detail}")]
    PushFailed {
        /// Remote that was being pushed to.
        remote: String,
        /// Trimmed command output.
        detail: String,
    },

    /// The browser could not be launched. Non-fatal.
    #[error("could not open {url}: {reason}")]
    UrlOpenFailed {
        /// URL that failed to open.
        url: String,
        /// Underlying launcher error.
        reason: String,
    },

    /// Switching back to the target branch failed. Non-fatal.
    #[error("could not switch back to '{branch}': {detail}")]
    CheckoutFailed {
        /// Branch the checkout targeted.
        branch: String,
        /// Trimmed command output.
        detail: String,
    },

    /// An external command could not be spawned at all.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The terminal prompt itself failed (not a user cancellation).
    #[error("terminal prompt failed: {0}")]
    Prompt(String),
}

/// Convenience result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
