//! Footer year stamping.

use waypoint_core::{SpyError, year};

use crate::dom::Page;

/// Stamp the current calendar year into the first element matching
/// `selector`.
///
/// A page without a year placeholder is a normal condition; the stamp is
/// skipped and `false` returned. Runs once per mount and never refreshes: a
/// page left open across a year boundary shows the stale year.
pub fn stamp_year(page: &Page, selector: &str) -> Result<bool, SpyError> {
    let Some(element) = page.query_first(selector)? else {
        return Ok(false);
    };
    element.set_text_content(Some(&year::format_year(year::current_year())));
    Ok(true)
}
