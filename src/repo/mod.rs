//! Repository discovery and configuration access.
//!
//! Everything here reads; nothing writes. The config is parsed as plain
//! text (see [`config`]) rather than through a git library, matching the
//! rest of the crate's subprocess-and-parse approach.

pub mod config;

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Walk upward from `start` until a directory containing a `.git`
/// marker is found.
///
/// The marker may be a directory (normal repository) or a file (linked
/// worktree / submodule); both count as "inside a repository" here —
/// [`git_dir`] handles the indirection.
pub fn discover_root(start: &Path) -> Result<PathBuf> {
    let start = start
        .canonicalize()
        .map_err(|e| Error::NoRepository(format!("{}: {e}", start.display())))?;

    let mut dir = start.as_path();
    loop {
        if dir.join(".git").exists() {
            return Ok(dir.to_path_buf());
        }
        match dir.parent() {
            Some(parent) => dir = parent,
            None => return Err(Error::NotAGitRepository(start.clone())),
        }
    }
}

/// Resolve the `.git` directory for `root`, following the `gitdir:`
/// pointer file used by linked worktrees and submodules.
///
/// Falls back to the marker path itself if the pointer is unreadable or
/// dangling, so the subsequent config read surfaces the real error.
pub fn git_dir(root: &Path) -> PathBuf {
    let marker = root.join(".git");

    if marker.is_file() {
        if let Ok(contents) = fs::read_to_string(&marker) {
            if let Some(target) = contents.trim().strip_prefix("gitdir:") {
                let target = target.trim();
                let path = if Path::new(target).is_absolute() {
                    PathBuf::from(target)
                } else {
                    root.join(target)
                };
                if path.is_dir() {
                    return path;
                }
            }
        }
    }

    marker
}

/// Read the repository's config text.
pub fn read_config(root: &Path) -> Result<String> {
    let path = git_dir(root).join("config");
    fs::read_to_string(&path).map_err(|e| Error::ConfigUnreadable {
        path,
        reason: e.to_string(),
    })
}
