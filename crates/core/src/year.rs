//! Calendar-year stamping for the footer.

use chrono::{Datelike, Local};

/// The current calendar year in the host's local time zone.
///
/// Read once at mount; a page left open across a year boundary keeps the
/// stale year.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Decimal rendering of a year as displayed in the footer.
pub fn format_year(year: i32) -> String {
    year.to_string()
}
