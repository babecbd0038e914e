//! Date fragments and year suffixes

use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

use crate::error::{ForgeError, Result};

static DATE_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Compiled `YYYY-MM-DD` shape, built on first use
fn date_pattern() -> Result<&'static Regex> {
    if let Some(pattern) = DATE_PATTERN.get() {
        return Ok(pattern);
    }
    let pattern = Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$")
        .map_err(|e| ForgeError::internal(e.to_string()))?;
    Ok(DATE_PATTERN.get_or_init(|| pattern))
}

/// Parse `YYYY-MM-DD` strictly.
///
/// Empty text means no date. Anything else must be exactly four, two and two
/// ASCII digits separated by dashes and name a real calendar day.
pub fn parse_date(text: &str) -> Result<Option<NaiveDate>> {
    if text.is_empty() {
        return Ok(None);
    }

    if !date_pattern()?.is_match(text) {
        return Err(ForgeError::invalid_date(text));
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ForgeError::invalid_date(text))
}

/// Derive the common date fragments used as password suffixes
pub fn date_parts(date: NaiveDate) -> BTreeSet<String> {
    let year = format!("{:04}", date.year());
    let yy = year[year.len() - 2..].to_string();
    let month = format!("{:02}", date.month());
    let day = format!("{:02}", date.day());

    BTreeSet::from([
        format!("{}{}", month, day),
        format!("{}{}", day, month),
        format!("{}{}{}", month, day, yy),
        format!("{}{}{}", day, month, yy),
        format!("{}{}{}", year, month, day),
        year,
        yy,
        month,
        day,
    ])
}

/// Year strings from `current_year - window` through `current_year + 2`
pub fn year_range(window: u32, current_year: i32) -> Vec<String> {
    let current = i64::from(current_year);
    let start = current - i64::from(window);
    (start..=current + 2).map(|year| year.to_string()).collect()
}

/// Current calendar year in local time
pub fn current_year() -> i32 {
    Local::now().year()
}
