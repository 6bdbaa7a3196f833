//! Git config text parsing.
//!
//! Only `[remote "name"]` sections are of interest. The parser is
//! line-oriented and deliberately forgiving: unknown sections are
//! skipped, and a malformed or multi-value config (several `url` entries
//! for one remote, or repeated sections of the same name) yields one
//! [`Remote`] per url so the caller can surface every candidate instead
//! of silently picking one.

use crate::types::Remote;

/// Parse all remote url entries out of git config text.
///
/// Entries are returned in file order.
pub fn parse_remotes(text: &str) -> Vec<Remote> {
    let mut remotes = Vec::new();
    let mut current: Option<String> = None;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if line.starts_with('[') {
            current = section_remote_name(line);
            continue;
        }
        if let Some(name) = &current {
            if let Some((key, value)) = line.split_once('=') {
                let value = value.trim();
                if key.trim() == "url" && !value.is_empty() {
                    remotes.push(Remote {
                        name: name.clone(),
                        url: value.to_string(),
                    });
                }
            }
        }
    }

    remotes
}

/// `[remote "origin"]` → `Some("origin")`; any other section → `None`.
fn section_remote_name(line: &str) -> Option<String> {
    let inner = line.strip_prefix('[')?.strip_suffix(']')?.trim();
    let rest = inner.strip_prefix("remote")?.trim();
    let name = rest.strip_prefix('"')?.strip_suffix('"')?;
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
