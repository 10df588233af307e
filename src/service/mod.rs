//! Service layer: snapshot aggregation, caching, and refresh scheduling.
//!
//! [`QuakeService`] owns the fetch-merge-sort-cache pipeline and both cache
//! tiers; [`scheduler::spawn_refresh_loop`] drives it on a fixed cadence.

pub mod quake_service;
pub mod scheduler;

pub use quake_service::QuakeService;
