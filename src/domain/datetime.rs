//! Date and timestamp formatting for front matter and filenames

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

/// Front matter timestamp layout, e.g. `2025-01-17 09:30:00 +0200`
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Current local time with its UTC offset, as written into `date:` fields
pub fn get_date_time() -> String {
    format_date_time(&Local::now())
}

/// Current UTC date, as used for filename prefixes
pub fn get_date() -> String {
    format_date(today_utc())
}

/// Today's date in UTC
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Format a timestamp as `YYYY-MM-DD HH:MM:SS ±HHMM`
pub fn format_date_time<Tz: TimeZone>(moment: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    moment.format(DATE_TIME_FORMAT).to_string()
}

/// Format a date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
