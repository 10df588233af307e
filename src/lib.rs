//! # quake-gateway
//!
//! REST API serving PHIVOLCS earthquake listings as a cached JSON feed.
//!
//! The upstream publishes seismic events as HTML tables only. This service
//! scrapes the latest-events page plus the previous calendar month's archive
//! page, merges and sorts the records, and serves them as JSON behind a
//! two-tier cache (in-process + optional PostgreSQL key-value tier) so that
//! client requests almost never wait on the upstream.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── QuakeService (service/)        ← snapshot cache + refresh
//!     │       ├── PageFetcher (scrape/)  ← reqwest, relaxed TLS trust
//!     │       │       └── extract_events ← scraper, table rows → records
//!     │       └── SnapshotStore (persistence/)
//!     │
//!     └── Refresh scheduler (service/scheduler)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod scrape;
pub mod service;
