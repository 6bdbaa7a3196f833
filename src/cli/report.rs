//! Styled reporter and top-level result printing.

use super::style::{Stylize, arrow, check};
use anstream::{eprintln, println};
use pushmr::error::Error;
use pushmr::workflow::{Outcome, Reporter, Step};
use tracing::debug;

/// [`Reporter`] that prints styled lines and mirrors everything to the
/// tracing channel, so the user-facing output stays a strict subset of
/// the diagnostic log.
#[derive(Debug, Default, Clone, Copy)]
pub struct CliReporter;

impl CliReporter {
    /// Create a reporter.
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for CliReporter {
    fn transition(&self, step: Step) {
        debug!(%step, "workflow step");
    }

    fn info(&self, message: &str) {
        debug!("{message}");
        println!("{} {message}", arrow());
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
        eprintln!("{} {message}", "warning:".warn());
    }
}

/// Print the closing summary for a finished workflow.
pub fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::MergeRequestCreated { url, switched_back } => {
            println!("{} Merge request created: {}", check(), url.accent());
            if !switched_back {
                println!("{}", "Still on the source branch.".muted());
            }
        }
        Outcome::PushedWithoutUrl { listing_url } => {
            println!(
                "{} Pushed; the server reported no merge-request URL",
                check()
            );
            if let Some(url) = listing_url {
                println!("  See {}", url.accent());
            }
            println!("{}", "Local checkout left on the source branch.".muted());
        }
        Outcome::ListingOnly { listing_url } => {
            if let Some(url) = listing_url {
                println!("Opened merge-request list: {}", url.accent());
            }
        }
    }
}

/// Print a terminal error once, with a matching diagnostic entry.
pub fn print_error(error: &Error) {
    tracing::error!("{error}");
    eprintln!("{} {error}", "error:".error());
}
