//! Combined snapshot of the latest and previous-month event listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Earthquake;

/// The merged, newest-first collection served to clients.
///
/// Built wholesale on each refresh and installed atomically behind an
/// `Arc` swap — readers see either the old snapshot or the new one,
/// never a mix. The same struct is what the durable cache tier persists
/// (as JSON) across restarts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Events sorted by [`Earthquake::occurred_at`] descending.
    pub events: Vec<Earthquake>,

    /// Wall-clock time of the refresh that produced this snapshot.
    pub last_updated: DateTime<Utc>,
}

/// Stable-sorts events by occurrence time, newest first.
///
/// Records whose timestamp failed to parse sort after every dated record;
/// ties keep their concatenation order (latest page before archive page).
pub fn sort_newest_first(events: &mut [Earthquake]) {
    events.sort_by_key(|e| std::cmp::Reverse(e.occurred_at.unwrap_or(i64::MIN)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quake(occurred_at: Option<i64>, place: &str) -> Earthquake {
        Earthquake {
            date_text: String::new(),
            occurred_at,
            latitude: 14.5,
            longitude: 121.0,
            depth_km: Some(10.0),
            magnitude: 4.2,
            place: place.to_string(),
        }
    }

    #[test]
    fn sorts_newest_first() {
        let mut events = vec![
            quake(Some(100), "a"),
            quake(Some(300), "b"),
            quake(Some(200), "c"),
        ];
        sort_newest_first(&mut events);
        let times: Vec<_> = events.iter().map(|e| e.occurred_at).collect();
        assert_eq!(times, vec![Some(300), Some(200), Some(100)]);
    }

    #[test]
    fn undated_records_sink_to_the_end() {
        let mut events = vec![quake(None, "undated"), quake(Some(1), "dated")];
        sort_newest_first(&mut events);
        assert_eq!(events.first().map(|e| e.place.as_str()), Some("dated"));
        assert_eq!(events.last().map(|e| e.place.as_str()), Some("undated"));
    }

    #[test]
    fn equal_timestamps_keep_concatenation_order() {
        let mut events = vec![
            quake(Some(100), "first"),
            quake(Some(100), "second"),
            quake(Some(100), "third"),
        ];
        sort_newest_first(&mut events);
        let places: Vec<_> = events.iter().map(|e| e.place.as_str()).collect();
        assert_eq!(places, vec!["first", "second", "third"]);
    }
}
