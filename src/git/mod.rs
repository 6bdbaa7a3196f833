//! External git invocation behind a trait seam.
//!
//! [`GitBackend`] names exactly the external operations the workflow
//! performs; [`GitCli`] is the production implementation that shells out
//! to the `git` binary. Tests swap in a scriptable mock.

pub mod parse;

use crate::error::Result;
use crate::mr::PushOption;
use crate::types::CommandOutput;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::debug;

/// The external git operations the workflow performs.
///
/// Each method returns the captured [`CommandOutput`]; `Err` means the
/// process could not be spawned at all. Exit-code and text inspection is
/// the caller's job, since several outcomes (conflicts, created-object
/// URLs) only show up as text.
#[async_trait]
pub trait GitBackend: Send + Sync {
    /// Name of the currently checked-out branch
    /// (`git rev-parse --abbrev-ref HEAD`).
    async fn current_branch(&self) -> Result<CommandOutput>;

    /// Remote details including the server-advertised HEAD branch
    /// (`git remote show <remote>`).
    async fn show_remote(&self, remote: &str) -> Result<CommandOutput>;

    /// Textual listing of remote-tracking branches (`git branch -r`).
    async fn list_remote_branches(&self, remote: &str) -> Result<CommandOutput>;

    /// Fetch refs from the remote.
    async fn fetch(&self, remote: &str) -> Result<CommandOutput>;

    /// Merge `reference` into the current checkout.
    async fn merge(&self, reference: &str) -> Result<CommandOutput>;

    /// Push `branch` to `remote` with server-side push options.
    async fn push_with_options(
        &self,
        remote: &str,
        branch: &str,
        options: &[PushOption],
    ) -> Result<CommandOutput>;

    /// Check out `branch`.
    async fn checkout(&self, branch: &str) -> Result<CommandOutput>;
}

/// [`GitBackend`] implementation that shells out to the `git` binary.
///
/// One command at a time; each call suspends until the child exits.
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    /// Create a backend that runs git inside `workdir`.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    async fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        debug!(?args, "running git");
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .await?;

        let result = CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        };
        debug!(exit_code = ?result.exit_code, "git finished");
        Ok(result)
    }
}

#[async_trait]
impl GitBackend for GitCli {
    async fn current_branch(&self) -> Result<CommandOutput> {
        self.run(&["rev-parse", "--abbrev-ref", "HEAD"]).await
    }

    async fn show_remote(&self, remote: &str) -> Result<CommandOutput> {
        self.run(&["remote", "show", remote]).await
    }

    async fn list_remote_branches(&self, _remote: &str) -> Result<CommandOutput> {
        // Listing is global; scoping to the remote happens in the parser.
        self.run(&["branch", "-r"]).await
    }

    async fn fetch(&self, remote: &str) -> Result<CommandOutput> {
        self.run(&["fetch", remote]).await
    }

    async fn merge(&self, reference: &str) -> Result<CommandOutput> {
        self.run(&["merge", reference]).await
    }

    async fn push_with_options(
        &self,
        remote: &str,
        branch: &str,
        options: &[PushOption],
    ) -> Result<CommandOutput> {
        let mut args: Vec<&str> = vec!["push", remote, branch];
        for option in options {
            args.push("-o");
            args.push(option.as_str());
        }
        self.run(&args).await
    }

    async fn checkout(&self, branch: &str) -> Result<CommandOutput> {
        self.run(&["checkout", branch]).await
    }
}
