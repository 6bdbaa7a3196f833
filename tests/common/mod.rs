//! Shared test fixtures.

#![allow(dead_code)]

mod mock_git;

pub use mock_git::{
    MockGit, PushCall, RecordingOpener, RecordingReporter, ScriptedSelector, SelectCall, failed,
    ok,
};

use pushmr::error::Result;
use pushmr::workflow::{Outcome, Workflow};
use std::fs;
use tempfile::TempDir;

/// Push output containing the server-emitted merge-request URL.
pub const PUSH_OUTPUT_WITH_URL: &str = "\
Enumerating objects: 5, done.
remote:
remote: View merge request for feat/demo:
remote:   https://example.com/group/proj/-/merge_requests/42
remote:
To https://example.com/group/proj.git
";

/// The URL inside [`PUSH_OUTPUT_WITH_URL`].
pub const MR_URL: &str = "https://example.com/group/proj/-/merge_requests/42";

/// Merge output for a conflicted merge.
pub const CONFLICT_OUTPUT: &str = "\
Auto-merging src/app.rs
CONFLICT (content): Merge conflict in src/app.rs
Automatic merge failed; fix conflicts and then commit the result.
";

/// Create a temp directory with a `.git/config` declaring the given
/// remotes.
pub fn fake_repo(remotes: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().unwrap();
    let git_dir = temp.path().join(".git");
    fs::create_dir_all(&git_dir).unwrap();

    let mut config = String::from("[core]\n\tbare = false\n");
    for (name, url) in remotes {
        config.push_str(&format!(
            "[remote \"{name}\"]\n\turl = {url}\n\tfetch = +refs/heads/*:refs/remotes/{name}/*\n"
        ));
    }
    fs::write(git_dir.join("config"), config).unwrap();
    temp
}

/// Everything a workflow test needs, pre-wired for the happy path:
/// one `origin` remote, `feat/demo` checked out, all commands succeeding.
pub struct Harness {
    pub git: MockGit,
    pub selector: ScriptedSelector,
    pub opener: RecordingOpener,
    pub reporter: RecordingReporter,
    pub repo: TempDir,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_remotes(&[("origin", "https://example.com/group/proj.git")])
    }

    pub fn with_remotes(remotes: &[(&str, &str)]) -> Self {
        Self {
            git: MockGit::new(),
            selector: ScriptedSelector::choosing(0),
            opener: RecordingOpener::new(),
            reporter: RecordingReporter::new(),
            repo: fake_repo(remotes),
        }
    }

    pub async fn run(&self) -> Result<Outcome> {
        Workflow::new(&self.git, &self.selector, &self.opener, &self.reporter)
            .run(self.repo.path())
            .await
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}
