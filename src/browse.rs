//! Default-browser launch capability.

use crate::error::{Error, Result};
use crate::workflow::UrlOpener;

/// Opens URLs with the operating system's default browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        open::that(url).map_err(|e| Error::UrlOpenFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}
