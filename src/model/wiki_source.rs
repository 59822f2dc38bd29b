//! Supported wiki sources.

use std::fmt;

/// A MediaWiki installation the user can search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WikiSource {
    /// English Wikipedia.
    Wikipedia,
    /// The Arch Linux wiki.
    Arch,
}

impl WikiSource {
    /// All selectable sources, in menu order.
    pub const ALL: [WikiSource; 2] = [WikiSource::Wikipedia, WikiSource::Arch];

    /// Short name shown in the selection menu.
    pub fn name(self) -> &'static str {
        match self {
            WikiSource::Wikipedia => "wikipedia",
            WikiSource::Arch => "arch",
        }
    }

    /// Endpoint of the MediaWiki action API.
    pub fn api_url(self) -> &'static str {
        match self {
            WikiSource::Wikipedia => "https://en.wikipedia.org/w/api.php",
            WikiSource::Arch => "https://wiki.archlinux.org/api.php",
        }
    }

    /// Base URL that article paths are appended to for browser viewing.
    fn page_base(self) -> &'static str {
        match self {
            WikiSource::Wikipedia => "https://en.wikipedia.org/wiki/",
            WikiSource::Arch => "https://wiki.archlinux.org/index.php/",
        }
    }

    /// Browser URL of the article titled `title`.
    ///
    /// Spaces in the title become underscores, matching MediaWiki page paths.
    pub fn page_url(self, title: &str) -> String {
        format!("{}{}", self.page_base(), title.replace(' ', "_"))
    }
}

impl fmt::Display for WikiSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
