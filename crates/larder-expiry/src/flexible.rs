//! Tolerant date parsing for the scheduled expiry check.
//!
//! Hand-entered dates arrive with mixed separators and stray spaces.
//! Whitespace is stripped and `-` is folded into `/` before matching, so
//! `10 - 09 - 2026`, `10/09/26`, and `10.09.2026` all parse. Day-first
//! only; ISO dates are the strict classifier's territory.

use chrono::NaiveDate;

const FULL_YEAR_PATTERNS: [&str; 2] = ["%d/%m/%Y", "%d.%m.%Y"];
const SHORT_YEAR_PATTERNS: [&str; 1] = ["%d/%m/%y"];

/// Parse a date leniently, or `None` when nothing fits.
pub fn parse_flexible(raw: &str) -> Option<NaiveDate> {
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let cleaned = cleaned.replace('-', "/");
    if cleaned.is_empty() {
        return None;
    }
    // chrono's %Y happily reads "26" as year 26, so the year token's
    // length decides which pattern set applies.
    let short_year = cleaned
        .rsplit(['/', '.'])
        .next()
        .is_some_and(|year| year.len() == 2);
    let patterns: &[&str] = if short_year {
        &SHORT_YEAR_PATTERNS
    } else {
        &FULL_YEAR_PATTERNS
    };
    patterns
        .iter()
        .find_map(|pattern| NaiveDate::parse_from_str(&cleaned, pattern).ok())
}
