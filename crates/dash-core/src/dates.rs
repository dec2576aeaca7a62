//! Calendar-date parsing and period-end helpers for the trend views.

use chrono::{Datelike, Duration, NaiveDate};

/// Date formats accepted for text-typed date cells, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y", "%Y/%m/%d"];

/// Parse a calendar date from a workbook text cell.
///
/// Accepts ISO (`2022-01-15`) and US (`01/15/2022`) spellings; a trailing
/// time component separated by `T` or a space is ignored.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    let date_part = trimmed
        .split(['T', ' '])
        .next()
        .unwrap_or(trimmed);

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
}

/// Last calendar day of the given month, e.g. `(2022, 2)` → `2022-02-28`.
pub fn month_end(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = next_month(year, month);
    NaiveDate::from_ymd_opt(next_year, next_month, 1).map(|d| d - Duration::days(1))
}

/// December 31st of the given year.
pub fn year_end(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 12, 31)
}

/// The `(year, month)` pair following the given one.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Month-end date for the month containing `date`.
pub fn month_end_of(date: NaiveDate) -> Option<NaiveDate> {
    month_end(date.year(), date.month())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
