//! Earthquake feed DTOs.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Earthquake, Snapshot};

/// One earthquake record as served on the wire.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EarthquakeDto {
    /// Original textual timestamp as published upstream.
    pub date: String,
    /// Event time in epoch milliseconds; `null` when the published text
    /// was unparseable.
    pub time: Option<i64>,
    /// Epicenter latitude in decimal degrees.
    pub lat: f64,
    /// Epicenter longitude in decimal degrees.
    pub lon: f64,
    /// Depth in kilometers; `null` when unparseable.
    pub depth: Option<f64>,
    /// Magnitude.
    pub mag: f64,
    /// Free-text location description.
    pub place: String,
}

impl From<&Earthquake> for EarthquakeDto {
    fn from(event: &Earthquake) -> Self {
        Self {
            date: event.date_text.clone(),
            time: event.occurred_at,
            lat: event.latitude,
            lon: event.longitude,
            depth: event.depth_km,
            mag: event.magnitude,
            place: event.place.clone(),
        }
    }
}

/// Response body for `GET /api/earthquakes`.
#[derive(Debug, Serialize, ToSchema)]
pub struct EarthquakeFeedResponse {
    /// Number of records; always equals `earthquakes.len()`.
    pub count: usize,
    /// Combined latest + previous-month records, newest first.
    pub earthquakes: Vec<EarthquakeDto>,
    /// RFC 3339 time of the last successful refresh.
    #[serde(rename = "lastUpdated", skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl EarthquakeFeedResponse {
    /// Maps a cached snapshot to the wire shape.
    #[must_use]
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let earthquakes: Vec<EarthquakeDto> =
            snapshot.events.iter().map(EarthquakeDto::from).collect();
        Self {
            count: earthquakes.len(),
            earthquakes,
            last_updated: Some(snapshot.last_updated.to_rfc3339()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn snapshot() -> Snapshot {
        Snapshot {
            events: vec![
                Earthquake {
                    date_text: "05 January 2024 - 10:00 AM".to_string(),
                    occurred_at: Some(1_704_448_800_000),
                    latitude: 14.5,
                    longitude: 121.0,
                    depth_km: Some(10.0),
                    magnitude: 4.2,
                    place: "Quezon City".to_string(),
                },
                Earthquake {
                    date_text: "garbled".to_string(),
                    occurred_at: None,
                    latitude: 7.1,
                    longitude: 126.6,
                    depth_km: None,
                    magnitude: 5.0,
                    place: "Davao Oriental".to_string(),
                },
            ],
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn count_matches_record_array() {
        let response = EarthquakeFeedResponse::from_snapshot(&snapshot());
        assert_eq!(response.count, response.earthquakes.len());
        assert_eq!(response.count, 2);
    }

    #[test]
    fn records_map_field_for_field() {
        let snap = snapshot();
        let response = EarthquakeFeedResponse::from_snapshot(&snap);
        let Some(dto) = response.earthquakes.first() else {
            panic!("expected a record");
        };
        assert_eq!(dto.date, "05 January 2024 - 10:00 AM");
        assert_eq!(dto.time, Some(1_704_448_800_000));
        assert_eq!(dto.lat, 14.5);
        assert_eq!(dto.lon, 121.0);
        assert_eq!(dto.depth, Some(10.0));
        assert_eq!(dto.mag, 4.2);
        assert_eq!(dto.place, "Quezon City");
    }

    #[test]
    fn wire_field_names_match_the_published_api() {
        let response = EarthquakeFeedResponse::from_snapshot(&snapshot());
        let Ok(json) = serde_json::to_value(&response) else {
            panic!("response serializes");
        };
        assert!(json.get("count").is_some());
        assert!(json.get("lastUpdated").is_some());
        let Some(record) = json
            .get("earthquakes")
            .and_then(|e| e.as_array())
            .and_then(|a| a.last())
        else {
            panic!("expected records array");
        };
        for key in ["date", "time", "lat", "lon", "depth", "mag", "place"] {
            assert!(record.get(key).is_some(), "missing wire field {key}");
        }
        // Invalid time and depth serialize as JSON null, not as absent keys.
        assert_eq!(record.get("time"), Some(&serde_json::Value::Null));
        assert_eq!(record.get("depth"), Some(&serde_json::Value::Null));
    }
}
