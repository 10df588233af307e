//! HTML-table-to-record extraction.
//!
//! The upstream pages carry one or more HTML tables whose data rows have a
//! fixed column order: date, latitude, longitude, depth, magnitude, place.
//! There is no header validation — if the upstream reorders columns this
//! silently produces wrong associations, a known fragility carried over
//! from the source format.
//!
//! Extraction is designed for partial success: malformed rows are skipped,
//! never escalated. The worst case on corrupt markup is an empty vec.

use chrono::NaiveDateTime;
use scraper::{Html, Selector};

use crate::domain::Earthquake;

/// Date formats the upstream has been observed to publish, tried in order.
const DATE_FORMATS: [&str; 4] = [
    "%d %B %Y - %I:%M %p",
    "%d %B %Y - %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Extracts every well-formed event record from raw page markup.
///
/// Walks all `table tr` elements; rows with fewer than 6 cells are header
/// or spacer rows and are skipped silently. Rows whose latitude, longitude,
/// or magnitude cells do not yield a finite number are dropped; unparseable
/// depth or date text is retained as `None` on the record.
#[must_use]
pub fn extract_events(markup: &str) -> Vec<Earthquake> {
    let (Ok(row_selector), Ok(cell_selector)) =
        (Selector::parse("table tr"), Selector::parse("td"))
    else {
        return Vec::new();
    };

    let document = Html::parse_document(markup);
    let mut events = Vec::new();

    for row in document.select(&row_selector) {
        let cells: Vec<String> = row
            .select(&cell_selector)
            .map(|cell| cell.text().collect::<String>().trim().to_string())
            .collect();
        if cells.len() < 6 {
            continue;
        }
        if let Some(event) = event_from_cells(&cells) {
            events.push(event);
        } else {
            tracing::debug!(row = ?cells.first(), "dropped unparseable listing row");
        }
    }

    events
}

/// Builds a record from positional cell texts, or `None` if a gating
/// field (latitude, longitude, magnitude) is not a finite number.
fn event_from_cells(cells: &[String]) -> Option<Earthquake> {
    let date_text = cells.first()?.clone();
    let latitude = finite_cell(cells.get(1)?)?;
    let longitude = finite_cell(cells.get(2)?)?;
    let depth_km = cells.get(3).and_then(|s| parse_float_prefix(s)).filter(|d| d.is_finite());
    let magnitude = finite_cell(cells.get(4)?)?;
    let place = cells.get(5)?.clone();
    let occurred_at = parse_event_time(&date_text);

    Some(Earthquake {
        date_text,
        occurred_at,
        latitude,
        longitude,
        depth_km,
        magnitude,
        place,
    })
}

/// Parses a cell as a finite float, or `None`.
fn finite_cell(text: &str) -> Option<f64> {
    parse_float_prefix(text).filter(|v| v.is_finite())
}

/// Parses the leading numeric prefix of a string, `parseFloat`-style:
/// leading whitespace is skipped and trailing non-numeric content (units,
/// footnote markers) is ignored.
fn parse_float_prefix(text: &str) -> Option<f64> {
    let mut prefix: String = text
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        .collect();
    // Longest parseable prefix wins; "3.4e" backs off to "3.4".
    while !prefix.is_empty() {
        if let Ok(value) = prefix.parse::<f64>() {
            return Some(value);
        }
        prefix.pop();
    }
    None
}

/// Parses the published date text into epoch milliseconds.
///
/// The upstream prints local civil time with no zone designator; the value
/// is interpreted as UTC, which keeps ordering consistent across both
/// scraped pages. Unparseable text yields `None` and the record is kept.
fn parse_event_time(date_text: &str) -> Option<i64> {
    let trimmed = date_text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|naive| naive.and_utc().timestamp_millis())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn table(rows: &[&[&str]]) -> String {
        let mut html = String::from("<html><body><table>");
        for row in rows {
            html.push_str("<tr>");
            for cell in *row {
                html.push_str(&format!("<td>{cell}</td>"));
            }
            html.push_str("</tr>");
        }
        html.push_str("</table></body></html>");
        html
    }

    #[test]
    fn two_row_fixture_drops_the_bad_latitude_row() {
        let html = table(&[
            &["2024-01-05 10:00", "14.5", "121.0", "10", "4.2", "Quezon City"],
            &["bad", "x", "121.0", "10", "4.2", "Place"],
        ]);
        let events = extract_events(&html);
        assert_eq!(events.len(), 1);
        let Some(event) = events.first() else {
            panic!("expected one record");
        };
        assert_eq!(event.latitude, 14.5);
        assert_eq!(event.longitude, 121.0);
        assert_eq!(event.magnitude, 4.2);
        assert_eq!(event.place, "Quezon City");
        assert_eq!(event.date_text, "2024-01-05 10:00");
        assert!(event.occurred_at.is_some());
    }

    #[test]
    fn rows_with_fewer_than_six_cells_are_skipped() {
        let html = table(&[&["2024-01-05 10:00", "14.5", "121.0", "10", "4.2"]]);
        assert!(extract_events(&html).is_empty());
    }

    #[test]
    fn header_rows_with_th_cells_are_skipped() {
        let html = "<table><tr><th>Date</th><th>Lat</th><th>Lon</th>\
                    <th>Depth</th><th>Mag</th><th>Location</th></tr></table>";
        assert!(extract_events(html).is_empty());
    }

    #[test]
    fn unparseable_depth_keeps_the_row() {
        let html = table(&[&["2024-01-05 10:00", "14.5", "121.0", "shallow", "4.2", "Place"]]);
        let events = extract_events(&html);
        assert_eq!(events.len(), 1);
        assert_eq!(events.first().and_then(|e| e.depth_km), None);
    }

    #[test]
    fn unparseable_date_keeps_the_row_without_a_timestamp() {
        let html = table(&[&["sometime soon", "14.5", "121.0", "10", "4.2", "Place"]]);
        let events = extract_events(&html);
        assert_eq!(events.len(), 1);
        let Some(event) = events.first() else {
            panic!("expected one record");
        };
        assert_eq!(event.occurred_at, None);
        assert_eq!(event.date_text, "sometime soon");
    }

    #[test]
    fn nested_markup_in_cells_is_stripped() {
        let html = table(&[&[
            "<a href=\"/detail\">05 January 2024 - 10:00 AM</a>",
            "<span>14.5</span>",
            "121.0",
            "010",
            "4.2",
            "<b>Quezon City</b> (Metro Manila)",
        ]]);
        let events = extract_events(&html);
        assert_eq!(events.len(), 1);
        let Some(event) = events.first() else {
            panic!("expected one record");
        };
        assert_eq!(event.date_text, "05 January 2024 - 10:00 AM");
        assert!(event.occurred_at.is_some());
        assert_eq!(event.place, "Quezon City (Metro Manila)");
    }

    #[test]
    fn every_retained_record_has_finite_gating_fields() {
        let html = table(&[
            &["a", "14.5", "121.0", "10", "4.2", "ok"],
            &["b", "", "121.0", "10", "4.2", "no lat"],
            &["c", "14.5", "east", "10", "4.2", "no lon"],
            &["d", "14.5", "121.0", "10", "strong", "no mag"],
            &["e", "1e999", "121.0", "10", "4.2", "infinite lat"],
        ]);
        let events = extract_events(&html);
        assert_eq!(events.len(), 1);
        for event in &events {
            assert!(event.latitude.is_finite());
            assert!(event.longitude.is_finite());
            assert!(event.magnitude.is_finite());
        }
    }

    #[test]
    fn corrupt_markup_yields_empty_not_error() {
        assert!(extract_events("<<<<>>>garbage&&&").is_empty());
        assert!(extract_events("").is_empty());
    }

    #[test]
    fn float_prefix_parsing_is_permissive() {
        assert_eq!(parse_float_prefix("10 km"), Some(10.0));
        assert_eq!(parse_float_prefix("  -3.4e2x"), Some(-340.0));
        assert_eq!(parse_float_prefix("014.52°N"), Some(14.52));
        assert_eq!(parse_float_prefix("3.4e"), Some(3.4));
        assert_eq!(parse_float_prefix("km 10"), None);
        assert_eq!(parse_float_prefix(""), None);
        assert_eq!(parse_float_prefix("..."), None);
    }

    #[test]
    fn phivolcs_date_format_parses() {
        assert!(parse_event_time("05 November 2024 - 10:32 AM").is_some());
        assert!(parse_event_time("2024-01-05 10:00").is_some());
        assert_eq!(parse_event_time("bad"), None);
    }
}
