//! Domain layer: earthquake records, combined snapshots, month arithmetic.
//!
//! This module contains the data model shared by the scraping, caching,
//! and API layers: a single detected seismic event, the combined
//! newest-first snapshot served to clients, and the previous-calendar-month
//! computation that picks the archive page to scrape.

pub mod earthquake;
pub mod month;
pub mod snapshot;

pub use earthquake::Earthquake;
pub use month::{month_name, previous_month};
pub use snapshot::{Snapshot, sort_newest_first};
