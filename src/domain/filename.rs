//! Date-prefixed slug filenames for posts and drafts

use crate::domain::datetime::{format_date, today_utc};
use chrono::NaiveDate;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Regex matching every run of characters that cannot appear in a slug
fn non_slug_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap())
}

/// Lowercase the title and collapse everything outside `[a-z0-9]` into single hyphens
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let hyphenated = non_slug_regex().replace_all(&lowered, "-");

    let slug = hyphenated.strip_prefix('-').unwrap_or(&hyphenated);
    let slug = slug.strip_suffix('-').unwrap_or(slug);
    slug.to_string()
}

/// Build `YYYY-MM-DD-<slug>.md` using today's date
pub fn format_filename(title: &str) -> String {
    format_filename_on(title, today_utc())
}

/// Build `YYYY-MM-DD-<slug>.md` for an explicit date
pub fn format_filename_on(title: &str, date: NaiveDate) -> String {
    format!("{}-{}.md", format_date(date), slugify(title))
}

/// Insert a collision counter before the extension: `name.md` -> `name-2.md`
pub fn numbered_filename(file_name: &str, counter: u32) -> String {
    let path = Path::new(file_name);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    match path.extension() {
        Some(ext) => format!("{}-{}.{}", stem, counter, ext.to_string_lossy()),
        None => format!("{}-{}", stem, counter),
    }
}
