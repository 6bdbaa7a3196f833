//! Merge-request semantics: naming policy, push options, URL handling.
//!
//! GitLab creates the merge request server-side when the push carries
//! the right `-o` options, and reports the resulting URL as prose on the
//! diagnostic stream. This module owns that vocabulary: which branches
//! are eligible, which options to send, and how to recover a URL from
//! the push output (or build a listing URL when the server stayed
//! silent). The dual URL strategy is an external-system limitation to
//! preserve, not a design choice.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Branch-name prefixes eligible for the automated flow.
pub const AUTO_FLOW_PREFIXES: [&str; 2] = ["feat", "fix"];

/// Path suffix of a project's merge-request listing page.
const LISTING_SUFFIX: &str = "/-/merge_requests";

/// Server-emitted URLs arrive on lines the transport prefixes with
/// `remote:`.
static REMOTE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"remote:\s*(https?://\S+)").expect("static pattern")
});

/// Whether `branch` may go through the automated merge-request flow.
///
/// Plain case-sensitive prefix match against the fixed allow-list; no
/// further anchoring.
#[must_use]
pub fn branch_is_eligible(branch: &str) -> bool {
    AUTO_FLOW_PREFIXES
        .iter()
        .any(|prefix| branch.starts_with(prefix))
}

/// A server-side push option, conveyed as `-o <value>` alongside the push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushOption(String);

impl PushOption {
    /// The raw `key[=value]` text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PushOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Push options requesting merge-request creation for `branch` against
/// `target`.
///
/// The source branch is kept (`remove_source_branch=false`) so the user
/// can delete it manually later; the branch name doubles as the title.
#[must_use]
pub fn merge_request_options(target: &str, branch: &str) -> Vec<PushOption> {
    vec![
        PushOption("merge_request.create".to_string()),
        PushOption(format!("merge_request.target={target}")),
        PushOption("merge_request.remove_source_branch=false".to_string()),
        PushOption(format!("merge_request.title={branch}")),
    ]
}

/// Extract the server-emitted merge-request URL from push output.
///
/// First `remote:`-prefixed http(s) URL wins. The caller passes combined
/// stdout+stderr; GitLab writes these lines to the diagnostic stream.
#[must_use]
pub fn extract_merge_request_url(output: &str) -> Option<String> {
    REMOTE_URL
        .captures(output)
        .map(|captures| captures[1].to_string())
}

/// Construct the merge-request listing URL for a remote url.
///
/// Fallback for when the push output carried no URL: strip a trailing
/// `.git` and append the listing path. scp-like ssh remotes
/// (`git@host:group/proj.git`) are rewritten to https so the result is
/// still openable in a browser. Returns `None` when no browsable URL can
/// be built.
#[must_use]
pub fn listing_url(remote_url: &str) -> Option<String> {
    let remote_url = remote_url.trim();

    let http = if remote_url.starts_with("http://") || remote_url.starts_with("https://") {
        remote_url.to_string()
    } else if let Some(rest) = remote_url.strip_prefix("ssh://git@") {
        format!("https://{rest}")
    } else if let Some(rest) = remote_url.strip_prefix("git@") {
        let (host, path) = rest.split_once(':')?;
        format!("https://{host}/{path}")
    } else {
        return None;
    };

    let base = http.strip_suffix(".git").unwrap_or(&http);
    let listing = format!("{}{LISTING_SUFFIX}", base.trim_end_matches('/'));

    // Well-formedness check only; the value handed out stays textual.
    Url::parse(&listing).ok()?;
    Some(listing)
}
