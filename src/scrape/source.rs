//! Upstream page locators.

use crate::domain::month_name;

/// Identifies one upstream listing page to scrape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSource {
    /// The fixed latest-events page.
    Latest,
    /// The archive page for one past calendar month.
    Archive {
        /// Four-digit year.
        year: i32,
        /// Zero-based month index (0 = January).
        month0: u32,
    },
}

impl PageSource {
    /// Renders the full URL for this source.
    ///
    /// Archive pages follow the upstream scheme
    /// `{base}/{year}/{year}_{MonthName}.html`.
    #[must_use]
    pub fn url(&self, latest_url: &str, archive_base_url: &str) -> String {
        match self {
            Self::Latest => latest_url.to_string(),
            Self::Archive { year, month0 } => {
                let month = month_name(*month0);
                let base = archive_base_url.trim_end_matches('/');
                format!("{base}/{year}/{year}_{month}.html")
            }
        }
    }
}
