//! Calendar month names and previous-month arithmetic.
//!
//! The upstream archive pages are addressed by numeric year and English
//! month name, so the month table is fixed and indexed 0–11.

/// English month names indexed 0 (January) through 11 (December), matching
/// the upstream archive URL scheme.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns the English name for a zero-based month index.
///
/// Out-of-range indices fall back to `"January"`; callers only produce
/// indices from [`previous_month`] or `chrono::Datelike::month0`, both of
/// which stay in 0–11.
#[must_use]
pub fn month_name(month0: u32) -> &'static str {
    MONTH_NAMES.get(month0 as usize).copied().unwrap_or("January")
}

/// Computes the calendar month immediately preceding `(year, month0)`.
///
/// January wraps to December of the previous year.
#[must_use]
pub const fn previous_month(year: i32, month0: u32) -> (i32, u32) {
    if month0 == 0 {
        (year - 1, 11)
    } else {
        (year, month0 - 1)
    }
}
