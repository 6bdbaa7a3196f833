//! The branch-sync-and-publish workflow.
//!
//! A linear, prompt-interspersed flow expressed as an explicit state
//! machine: [`Step`] names every state and the runner walks them in
//! order, so every terminal and error exit is enumerable and
//! independently testable. One external command runs at a time; there
//! are no retries, and no rollback — a failed push leaves the working
//! tree merged, and re-running after remediation needs no cleanup
//! because the workflow holds no state between invocations.

use crate::error::{Error, Result};
use crate::git::{GitBackend, parse};
use crate::mr;
use crate::repo;
use crate::types::Remote;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Remote name preferred as the pick-list default cursor.
const DEFAULT_REMOTE: &str = "origin";

/// States of the workflow, in execution order.
///
/// `OpenListingOnly` is the non-automated branch taken when the current
/// branch falls outside the naming policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Find the repository root from the start directory.
    LocateRoot,
    /// Read the current branch and check the naming policy.
    ValidateCurrentBranch,
    /// Parse config remotes and pick exactly one.
    ResolveRemote,
    /// Determine the integration branch the merge request targets.
    ResolveTargetBranch,
    /// Fetch refs from the selected remote.
    FetchRemote,
    /// Merge the remote target tip into the current checkout.
    MergeRemoteTarget,
    /// Push with server-side merge-request creation options.
    PushAndCreateRequest,
    /// Scan push output for the merge-request URL and open it.
    ExtractAndOpenUrl,
    /// Check the target branch back out.
    SwitchToTargetBranch,
    /// Degraded path: open the merge-request listing page only.
    OpenListingOnly,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LocateRoot => "locate-root",
            Self::ValidateCurrentBranch => "validate-current-branch",
            Self::ResolveRemote => "resolve-remote",
            Self::ResolveTargetBranch => "resolve-target-branch",
            Self::FetchRemote => "fetch-remote",
            Self::MergeRemoteTarget => "merge-remote-target",
            Self::PushAndCreateRequest => "push-and-create-request",
            Self::ExtractAndOpenUrl => "extract-and-open-url",
            Self::SwitchToTargetBranch => "switch-to-target-branch",
            Self::OpenListingOnly => "open-listing-only",
        };
        f.write_str(name)
    }
}

/// Terminal success values of a workflow run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A merge request was created and its exact URL opened.
    MergeRequestCreated {
        /// The server-emitted merge-request URL.
        url: String,
        /// Whether the checkout was switched back to the target branch.
        switched_back: bool,
    },
    /// Push succeeded but the server emitted no URL; the listing page was
    /// opened instead when one could be built. The local checkout stays
    /// on the source branch on this path.
    PushedWithoutUrl {
        /// Constructed listing URL, when the remote url allowed one.
        listing_url: Option<String>,
    },
    /// Current branch is outside the naming policy; only the listing page
    /// was opened.
    ListingOnly {
        /// Constructed listing URL, when the remote url allowed one.
        listing_url: Option<String>,
    },
}

/// Diagnostic and user-facing output capability.
///
/// Explicitly passed rather than a module-level singleton. Every state
/// transition goes to the diagnostic channel; `info`/`warn` lines are a
/// strict subset shown to the user.
pub trait Reporter: Send + Sync {
    /// Append a state transition to the diagnostic channel.
    fn transition(&self, step: Step);
    /// User-facing informational line.
    fn info(&self, message: &str);
    /// User-facing warning (non-fatal problem).
    fn warn(&self, message: &str);
}

/// Interactive pick-list capability.
pub trait Selector: Send + Sync {
    /// Present `items` and return the chosen index, or `None` when the
    /// user dismissed the prompt. Blocks without timeout.
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<Option<usize>>;
}

/// Browser-launch capability.
pub trait UrlOpener: Send + Sync {
    /// Open `url` in the user's default browser.
    fn open(&self, url: &str) -> Result<()>;
}

/// The workflow orchestrator.
///
/// Holds only capabilities; all per-run state lives inside
/// [`Workflow::run`].
pub struct Workflow<'a> {
    git: &'a dyn GitBackend,
    selector: &'a dyn Selector,
    opener: &'a dyn UrlOpener,
    reporter: &'a dyn Reporter,
}

impl<'a> Workflow<'a> {
    /// Assemble a workflow from its capabilities.
    pub fn new(
        git: &'a dyn GitBackend,
        selector: &'a dyn Selector,
        opener: &'a dyn UrlOpener,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            git,
            selector,
            opener,
            reporter,
        }
    }

    /// Run the whole flow starting from `start_dir`.
    ///
    /// Errors are terminal for this invocation and carry the state they
    /// arose in; [`Error::SelectionCancelled`] is a deliberate user abort.
    pub async fn run(&self, start_dir: &Path) -> Result<Outcome> {
        self.reporter.transition(Step::LocateRoot);
        let root = repo::discover_root(start_dir)?;
        debug!(root = %root.display(), "repository root located");

        self.reporter.transition(Step::ValidateCurrentBranch);
        let head = self.git.current_branch().await?;
        let branch = parse::current_branch(&head).ok_or(Error::DetachedOrUnknownBranch)?;
        debug!(%branch, "current branch");

        if !mr::branch_is_eligible(&branch) {
            return self.open_listing_only(&root, &branch);
        }

        self.reporter.transition(Step::ResolveRemote);
        let remote = self.resolve_remote(&root)?;
        debug!(remote = %remote.name, url = %remote.url, "remote resolved");

        self.reporter.transition(Step::ResolveTargetBranch);
        let target = self.resolve_target_branch(&remote).await?;
        debug!(%target, "target branch resolved");

        self.reporter.transition(Step::FetchRemote);
        let fetched = self.git.fetch(&remote.name).await?;
        if !fetched.success() {
            return Err(Error::FetchFailed {
                remote: remote.name,
                detail: fetched.detail(),
            });
        }
        self.reporter.info(&format!("Fetched {}", remote.name));

        self.reporter.transition(Step::MergeRemoteTarget);
        let reference = format!("{}/{target}", remote.name);
        let merged = self.git.merge(&reference).await?;
        if !merged.success() {
            return Err(match parse::classify_merge_failure(&merged.combined()) {
                parse::MergeFailureKind::Conflict => Error::MergeConflict,
                parse::MergeFailureKind::Divergent => Error::DivergentBranches(merged.detail()),
                parse::MergeFailureKind::Other => Error::MergeFailed {
                    reference,
                    detail: merged.detail(),
                },
            });
        }
        self.reporter
            .info(&format!("Merged {reference} into {branch}"));

        self.reporter.transition(Step::PushAndCreateRequest);
        let options = mr::merge_request_options(&target, &branch);
        let pushed = self
            .git
            .push_with_options(&remote.name, &branch, &options)
            .await?;
        if !pushed.success() {
            return Err(Error::PushFailed {
                remote: remote.name,
                detail: pushed.detail(),
            });
        }
        self.reporter
            .info(&format!("Pushed {branch} to {}", remote.name));

        self.reporter.transition(Step::ExtractAndOpenUrl);
        let Some(url) = mr::extract_merge_request_url(&pushed.combined()) else {
            // Deliberate asymmetry: without a confirmed merge-request URL
            // the local checkout stays on the source branch.
            let listing = self.open_listing(&remote);
            return Ok(Outcome::PushedWithoutUrl {
                listing_url: listing,
            });
        };
        self.reporter.info(&format!("Merge request: {url}"));
        self.open_url(&url);

        self.reporter.transition(Step::SwitchToTargetBranch);
        let checkout = self.git.checkout(&target).await?;
        let switched_back = checkout.success();
        if switched_back {
            self.reporter.info(&format!("Switched back to {target}"));
        } else {
            self.reporter.warn(
                &Error::CheckoutFailed {
                    branch: target,
                    detail: checkout.detail(),
                }
                .to_string(),
            );
        }

        Ok(Outcome::MergeRequestCreated { url, switched_back })
    }

    /// Non-automated path for branches outside the naming policy: resolve
    /// a remote, guess its listing page, open it. Terminal success.
    fn open_listing_only(&self, root: &Path, branch: &str) -> Result<Outcome> {
        self.reporter.transition(Step::OpenListingOnly);
        self.reporter.info(&format!(
            "'{branch}' does not start with {}; opening the merge-request list instead",
            mr::AUTO_FLOW_PREFIXES.join("/")
        ));
        let remote = self.resolve_remote(root)?;
        let listing = self.open_listing(&remote);
        Ok(Outcome::ListingOnly {
            listing_url: listing,
        })
    }

    /// Parse config remotes and pick exactly one.
    ///
    /// Auto-selects an unambiguous single entry; otherwise prompts with
    /// every entry (duplicates included) as a distinct choice, the cursor
    /// defaulting to `origin` when present.
    fn resolve_remote(&self, root: &Path) -> Result<Remote> {
        let config = repo::read_config(root)?;
        let mut remotes = repo::config::parse_remotes(&config);

        match remotes.len() {
            0 => Err(Error::NoRemote),
            1 => Ok(remotes.remove(0)),
            _ => {
                let labels: Vec<String> = remotes.iter().map(Remote::label).collect();
                let default = remotes
                    .iter()
                    .position(|remote| remote.name == DEFAULT_REMOTE)
                    .unwrap_or(0);
                let index = self
                    .selector
                    .select("Push to which remote?", &labels, default)?
                    .ok_or(Error::SelectionCancelled)?;
                Ok(remotes.swap_remove(index))
            }
        }
    }

    /// Determine the integration branch: server-advertised HEAD first
    /// (authoritative, survives renames), textual branch listing plus a
    /// prompt second (best-effort, requires user judgment).
    async fn resolve_target_branch(&self, remote: &Remote) -> Result<String> {
        let shown = self.git.show_remote(&remote.name).await?;
        if shown.success() {
            if let Some(head) = parse::head_branch(&shown.stdout) {
                return Ok(head);
            }
        }
        debug!(remote = %remote.name, "remote HEAD unknown, falling back to branch listing");

        let listing = self.git.list_remote_branches(&remote.name).await?;
        let branches = parse::remote_branches(&listing.stdout, &remote.name);
        if branches.is_empty() {
            return Err(Error::NoRemoteBranches(remote.name.clone()));
        }

        let index = self
            .selector
            .select("Target branch for the merge request?", &branches, 0)?
            .ok_or(Error::SelectionCancelled)?;
        Ok(branches[index].clone())
    }

    /// Build and open the remote's listing page, if its url allows one.
    fn open_listing(&self, remote: &Remote) -> Option<String> {
        let listing = mr::listing_url(&remote.url);
        match &listing {
            Some(url) => {
                self.reporter.info(&format!("Merge request list: {url}"));
                self.open_url(url);
            }
            None => self.reporter.warn(&format!(
                "no browsable listing URL could be built from '{}'",
                remote.url
            )),
        }
        listing
    }

    /// Open a URL, downgrading failure to a warning — the merge request
    /// already exists by the time this runs.
    fn open_url(&self, url: &str) {
        if let Err(error) = self.opener.open(url) {
            self.reporter.warn(&error.to_string());
        }
    }
}
