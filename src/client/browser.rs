//! System browser launcher.

use crate::client::BrowserLauncher;
use crate::model::LaunchError;

/// Opens URLs with the platform's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl BrowserLauncher for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), LaunchError> {
        webbrowser::open(url).map_err(|source| LaunchError {
            url: url.to_string(),
            source,
        })
    }
}
