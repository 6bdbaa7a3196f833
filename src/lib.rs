//! pushmr — create GitLab merge requests via git push options
//!
//! No GitLab API involved: the merge request is created server-side as a
//! side effect of `git push -o merge_request.create …`. This crate
//! orchestrates the surrounding git operations (fetch, merge,
//! push-with-options, branch switch), parses their text output, and
//! prompts the user when the repository configuration is ambiguous.
//!
//! The workflow itself lives in [`workflow`]; everything effectful (git
//! invocation, pick-lists, browser launch, output) is behind a trait so
//! the whole flow is testable without a terminal or a remote.

pub mod browse;
pub mod error;
pub mod git;
pub mod mr;
pub mod repo;
pub mod types;
pub mod workflow;
