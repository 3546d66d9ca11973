use chrono::{DateTime, Datelike, Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Month key of a timestamp, as used by the month filter ("YYYY-MM").
pub fn month_key(ts: &DateTime<Local>) -> String {
    format!("{:04}-{:02}", ts.year(), ts.month())
}

/// Validate a "YYYY-MM" filter value.
pub fn parse_month(s: &str) -> Option<(i32, u32)> {
    let (y, m) = s.split_once('-')?;
    if y.len() != 4 || m.len() != 2 {
        return None;
    }
    let year: i32 = y.parse().ok()?;
    let month: u32 = m.parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    // reject things like "2025-00" that parse but name no month
    NaiveDate::from_ymd_opt(year, month, 1)?;
    Some((year, month))
}

/// Display date of a timestamp (day/month/year, as the printed records use).
pub fn display_date(ts: &DateTime<Local>) -> String {
    ts.format("%d/%m/%Y").to_string()
}

/// Display time of a timestamp.
pub fn display_time(ts: &DateTime<Local>) -> String {
    ts.format("%H:%M:%S").to_string()
}
