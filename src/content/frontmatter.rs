//! Front-matter parsing

use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone};
use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

lazy_static! {
    /// A `key:` line, where the key is a plain identifier and the colon is
    /// followed by a space or the end of the line
    static ref YAML_KEY: Regex = Regex::new(r"^[A-Za-z0-9_-]+:(\s|$)").unwrap();
}

/// Accepts a single string or a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrVec {
        One(String),
        Many(Vec<String>),
        Empty(()),
    }

    Ok(match StringOrVec::deserialize(deserializer)? {
        StringOrVec::One(s) => vec![s],
        StringOrVec::Many(v) => v,
        StringOrVec::Empty(()) => Vec::new(),
    })
}

/// Front-matter data from a Markdown document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        deserialize_with = "string_or_vec",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<String>,

    /// Additional custom fields, in document order
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Split a document into front-matter and body
    ///
    /// Documents without a `---` fenced block, or whose block does not look
    /// like YAML, return default front-matter and the whole content. A block
    /// that looks like YAML but fails to parse is logged and skipped.
    pub fn parse(content: &str) -> (Self, &str) {
        let trimmed = content.trim_start();

        let Some(rest) = trimmed.strip_prefix("---") else {
            return (FrontMatter::default(), content);
        };
        let rest = rest.trim_start_matches(['\n', '\r']);

        let Some(end_pos) = rest.find("\n---") else {
            return (FrontMatter::default(), content);
        };

        let yaml_content = &rest[..end_pos];
        let body = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return (FrontMatter::default(), body);
        }

        if !looks_like_yaml(yaml_content) {
            return (FrontMatter::default(), content);
        }

        match serde_yaml::from_str::<FrontMatter>(yaml_content) {
            Ok(fm) => (fm, body),
            Err(e) => {
                tracing::warn!("Failed to parse YAML front-matter, ignoring it: {}", e);
                (FrontMatter::default(), body)
            }
        }
    }

    /// Parse the date field
    pub fn parse_date(&self) -> Option<DateTime<Local>> {
        self.date.as_deref().and_then(parse_date_string)
    }
}

/// At least one line must be a `key: value` pair. Markdown that merely uses
/// `---` as a thematic break does not qualify, and neither do bare URLs.
fn looks_like_yaml(block: &str) -> bool {
    block
        .lines()
        .map(str::trim)
        .any(|line| YAML_KEY.is_match(line))
}

/// Parse a date string in the formats front-matter commonly uses
pub fn parse_date_string(s: &str) -> Option<DateTime<Local>> {
    parse_date_in(s, &Local)
}

/// Parse a date string, reading zone-less values as wall-clock time in `tz`
pub fn parse_date_in<Tz: TimeZone>(s: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(tz));
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];

    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(resolve_wall_clock(tz, dt));
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(resolve_wall_clock(tz, d.and_hms_opt(0, 0, 0)?));
        }
    }

    None
}

/// Map a wall-clock time onto `tz`
///
/// Repeated times take the earlier instant. Times skipped by a forward
/// transition are read with the offset in force before it, which lands
/// them just past the gap.
fn resolve_wall_clock<Tz: TimeZone>(tz: &Tz, dt: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&dt) {
        LocalResult::Single(resolved) => resolved,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            let before = tz
                .offset_from_utc_datetime(&(dt - chrono::Duration::days(1)))
                .fix();
            tz.from_utc_datetime(&(dt - before))
        }
    }
}
