//! A single detected seismic event.

use serde::{Deserialize, Serialize};

/// One seismic event scraped from an upstream listing row.
///
/// Retained records always have finite `latitude`, `longitude`, and
/// `magnitude` — rows failing that gate are dropped during extraction.
/// `occurred_at` and `depth_km` carry no such guarantee: the upstream
/// sometimes publishes unparseable date or depth text, and those records
/// are kept with the field set to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Earthquake {
    /// Original textual timestamp exactly as published.
    pub date_text: String,

    /// Event time in milliseconds since epoch, parsed from `date_text`.
    /// `None` when the published text is unparseable.
    pub occurred_at: Option<i64>,

    /// Epicenter latitude in decimal degrees. Always finite.
    pub latitude: f64,

    /// Epicenter longitude in decimal degrees. Always finite.
    pub longitude: f64,

    /// Hypocenter depth in kilometers. `None` when unparseable.
    pub depth_km: Option<f64>,

    /// Event magnitude. Always finite.
    pub magnitude: f64,

    /// Free-text location description.
    pub place: String,
}
