//! Front matter rewriting for draft promotion

use regex::Regex;
use std::sync::OnceLock;

/// `date: YYYY-MM-DD HH:MM:SS ±HHMM`
fn full_date_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"date:\s*\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} [+-]\d{4}").unwrap()
    })
}

/// `date: YYYY-MM-DD`
fn bare_date_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"date:\s*\d{4}-\d{2}-\d{2}").unwrap())
}

/// Opening `---` delimiter on the first line
fn opening_delimiter_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^---\r?\n").unwrap())
}

/// First double-quoted `title:` value
fn title_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r#"title:\s*"(.+?)""#).unwrap())
}

/// Which form of `date:` field a document carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    /// `YYYY-MM-DD HH:MM:SS ±HHMM`
    Timestamp,
    /// `YYYY-MM-DD`
    Date,
    Missing,
}

impl DateField {
    /// Detect the date form used in `content`
    pub fn detect(content: &str) -> Self {
        if full_date_regex().is_match(content) {
            DateField::Timestamp
        } else if bare_date_regex().is_match(content) {
            DateField::Date
        } else {
            DateField::Missing
        }
    }
}

/// Set the front matter date to `now`.
///
/// An existing timestamp or bare date is replaced (a bare date is upgraded
/// to the full timestamp). Without any `date:` field, one is inserted right
/// after the opening `---` line. Only the first match is rewritten.
pub fn update_date(content: &str, now: &str) -> String {
    let replacement = format!("date: {}", now);

    match DateField::detect(content) {
        DateField::Timestamp => full_date_regex()
            .replace(content, regex::NoExpand(&replacement))
            .into_owned(),
        DateField::Date => bare_date_regex()
            .replace(content, regex::NoExpand(&replacement))
            .into_owned(),
        DateField::Missing => opening_delimiter_regex()
            .replace(content, |caps: &regex::Captures| {
                format!("{}{}\n", &caps[0], replacement)
            })
            .into_owned(),
    }
}

/// Extract the first double-quoted `title:` value
pub fn extract_title(content: &str) -> Option<String> {
    title_regex()
        .captures(content)
        .map(|caps| caps[1].to_string())
}
