//! Mock git backend and recording capabilities for workflow tests.
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use pushmr::error::{Error, Result};
use pushmr::git::GitBackend;
use pushmr::mr::PushOption;
use pushmr::types::CommandOutput;
use pushmr::workflow::{Reporter, Selector, Step, UrlOpener};
use std::sync::Mutex;

/// Successful command output with the given stdout.
pub fn ok(stdout: &str) -> CommandOutput {
    CommandOutput {
        stdout: stdout.to_string(),
        stderr: String::new(),
        exit_code: Some(0),
    }
}

/// Failed (exit 1) command output with the given stderr.
pub fn failed(stderr: &str) -> CommandOutput {
    CommandOutput {
        stdout: String::new(),
        stderr: stderr.to_string(),
        exit_code: Some(1),
    }
}

/// Call record for `push_with_options`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushCall {
    pub remote: String,
    pub branch: String,
    pub options: Vec<String>,
}

/// Scriptable mock `GitBackend` with call recording.
///
/// Manually implemented rather than generated: responses are plain
/// public fields set per test, and every mutating operation records its
/// arguments for verification.
pub struct MockGit {
    pub branch_output: CommandOutput,
    pub show_remote_output: CommandOutput,
    pub listing_output: CommandOutput,
    pub fetch_output: CommandOutput,
    pub merge_output: CommandOutput,
    pub push_output: CommandOutput,
    pub checkout_output: CommandOutput,
    // Call tracking
    pub fetch_calls: Mutex<Vec<String>>,
    pub merge_calls: Mutex<Vec<String>>,
    pub push_calls: Mutex<Vec<PushCall>>,
    pub checkout_calls: Mutex<Vec<String>>,
}

impl MockGit {
    /// A mock describing the happy path: `feat/demo` checked out, remote
    /// HEAD advertised as `main`, every command succeeding.
    pub fn new() -> Self {
        Self {
            branch_output: ok("feat/demo\n"),
            show_remote_output: ok("* remote origin\n  HEAD branch: main\n"),
            listing_output: ok("  origin/main\n"),
            fetch_output: ok(""),
            merge_output: ok("Already up to date.\n"),
            push_output: ok(""),
            checkout_output: ok("Switched to branch 'main'\n"),
            fetch_calls: Mutex::new(Vec::new()),
            merge_calls: Mutex::new(Vec::new()),
            push_calls: Mutex::new(Vec::new()),
            checkout_calls: Mutex::new(Vec::new()),
        }
    }

    /// Override the checked-out branch name.
    pub fn with_branch(mut self, branch: &str) -> Self {
        self.branch_output = ok(&format!("{branch}\n"));
        self
    }

    pub fn fetch_calls(&self) -> Vec<String> {
        self.fetch_calls.lock().unwrap().clone()
    }

    pub fn merge_calls(&self) -> Vec<String> {
        self.merge_calls.lock().unwrap().clone()
    }

    pub fn push_calls(&self) -> Vec<PushCall> {
        self.push_calls.lock().unwrap().clone()
    }

    pub fn checkout_calls(&self) -> Vec<String> {
        self.checkout_calls.lock().unwrap().clone()
    }
}

impl Default for MockGit {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GitBackend for MockGit {
    async fn current_branch(&self) -> Result<CommandOutput> {
        Ok(self.branch_output.clone())
    }

    async fn show_remote(&self, _remote: &str) -> Result<CommandOutput> {
        Ok(self.show_remote_output.clone())
    }

    async fn list_remote_branches(&self, _remote: &str) -> Result<CommandOutput> {
        Ok(self.listing_output.clone())
    }

    async fn fetch(&self, remote: &str) -> Result<CommandOutput> {
        self.fetch_calls.lock().unwrap().push(remote.to_string());
        Ok(self.fetch_output.clone())
    }

    async fn merge(&self, reference: &str) -> Result<CommandOutput> {
        self.merge_calls.lock().unwrap().push(reference.to_string());
        Ok(self.merge_output.clone())
    }

    async fn push_with_options(
        &self,
        remote: &str,
        branch: &str,
        options: &[PushOption],
    ) -> Result<CommandOutput> {
        self.push_calls.lock().unwrap().push(PushCall {
            remote: remote.to_string(),
            branch: branch.to_string(),
            options: options.iter().map(|o| o.as_str().to_string()).collect(),
        });
        Ok(self.push_output.clone())
    }

    async fn checkout(&self, branch: &str) -> Result<CommandOutput> {
        self.checkout_calls.lock().unwrap().push(branch.to_string());
        Ok(self.checkout_output.clone())
    }
}

/// Call record for `Selector::select`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectCall {
    pub prompt: String,
    pub items: Vec<String>,
    pub default: usize,
}

/// `Selector` that always answers with a fixed choice (or dismissal).
pub struct ScriptedSelector {
    pub choice: Option<usize>,
    pub calls: Mutex<Vec<SelectCall>>,
}

impl ScriptedSelector {
    /// Always pick the item at `index`.
    pub fn choosing(index: usize) -> Self {
        Self {
            choice: Some(index),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Always dismiss the prompt.
    pub fn cancelling() -> Self {
        Self {
            choice: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<SelectCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Selector for ScriptedSelector {
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<Option<usize>> {
        self.calls.lock().unwrap().push(SelectCall {
            prompt: prompt.to_string(),
            items: items.to_vec(),
            default,
        });
        Ok(self.choice)
    }
}

/// `UrlOpener` that records every URL, optionally failing.
pub struct RecordingOpener {
    pub opened: Mutex<Vec<String>>,
    pub fail: bool,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self {
            opened: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// An opener whose every launch fails.
    pub fn failing() -> Self {
        Self {
            opened: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl Default for RecordingOpener {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlOpener for RecordingOpener {
    fn open(&self, url: &str) -> Result<()> {
        self.opened.lock().unwrap().push(url.to_string());
        if self.fail {
            Err(Error::UrlOpenFailed {
                url: url.to_string(),
                reason: "no browser in tests".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

/// `Reporter` that records transitions and messages.
#[derive(Default)]
pub struct RecordingReporter {
    pub steps: Mutex<Vec<Step>>,
    pub infos: Mutex<Vec<String>>,
    pub warnings: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> Vec<Step> {
        self.steps.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }
}

impl Reporter for RecordingReporter {
    fn transition(&self, step: Step) {
        self.steps.lock().unwrap().push(step);
    }

    fn info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }

    fn warn(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }
}
