//! Front-matter splitting and date parsing

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Marker line opening and closing the YAML header
pub const DELIMITER: &str = "---";

/// Split a post into its YAML header and markdown body.
///
/// A single leading `---\n` line is dropped, then the rest is split on the
/// first `---`. The body is returned verbatim, including the newline that
/// follows the closing delimiter. Returns `None` when there is no closing
/// delimiter.
pub fn split(content: &str) -> Option<(&str, &str)> {
    let content = content.strip_prefix("---\n").unwrap_or(content);
    content.split_once(DELIMITER)
}

/// Parse a date string in the formats accepted in front matter
pub fn parse_date_string(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    None
}

/// Deserialize a front-matter date from any of the accepted formats
pub fn deserialize_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let s = String::deserialize(deserializer)?;
    parse_date_string(&s).ok_or_else(|| D::Error::custom(format!("invalid date: {:?}", s)))
}
