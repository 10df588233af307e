//! Scraping layer: page sources, HTML row extraction, and the fetcher.
//!
//! The extraction contract is deliberately narrow (markup in, records out)
//! so the positional table parsing can be replaced without touching the
//! cache or API layers. The fetch capability sits behind [`FetchPage`] so
//! the service layer can be exercised without a network.

pub mod extract;
pub mod fetch;
pub mod source;

pub use extract::extract_events;
pub use fetch::{FetchPage, PageFetcher};
pub use source::PageSource;
