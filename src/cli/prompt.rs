//! Interactive pick-lists.

use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;
use pushmr::error::{Error, Result};
use pushmr::workflow::Selector;

/// [`Selector`] backed by a dialoguer pick-list.
///
/// Esc/`q` dismisses the prompt, which the workflow treats as a
/// deliberate cancellation, not an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalSelector;

impl Selector for TerminalSelector {
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<Option<usize>> {
        Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact_opt()
            .map_err(|e| Error::Prompt(e.to_string()))
    }
}
