//! pushmr binary entry point.

mod cli;

use clap::Parser;
use pushmr::browse::SystemOpener;
use pushmr::error::Error;
use pushmr::git::GitCli;
use pushmr::workflow::Workflow;
use std::path::PathBuf;
use std::process::ExitCode;

/// Create a GitLab merge request for the current branch.
///
/// Fetches and merges the target branch, pushes with server-side
/// merge-request options, and opens the resulting URL. No GitLab API,
/// no tokens: everything goes through git.
#[derive(Debug, Parser)]
#[command(name = "pushmr", version, about, long_about = None)]
struct Cli {
    /// Repository path (defaults to the current directory)
    #[arg(long)]
    path: Option<PathBuf>,

    /// Log every workflow step and git invocation
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::init_tracing(cli.verbose);

    let start_dir = match cli.path {
        Some(path) => path,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                cli::report::print_error(&Error::NoRepository(e.to_string()));
                return ExitCode::FAILURE;
            }
        },
    };

    let git = GitCli::new(&start_dir);
    let selector = cli::prompt::TerminalSelector;
    let opener = SystemOpener;
    let reporter = cli::report::CliReporter::new();

    let workflow = Workflow::new(&git, &selector, &opener, &reporter);
    match workflow.run(&start_dir).await {
        Ok(outcome) => {
            cli::report::print_outcome(&outcome);
            ExitCode::SUCCESS
        }
        // Deliberate user abort: no error output, clean exit.
        Err(Error::SelectionCancelled) => ExitCode::SUCCESS,
        Err(error) => {
            cli::report::print_error(&error);
            ExitCode::FAILURE
        }
    }
}
