use chrono::{DateTime, NaiveDate};
use folio_protocol::SharedStr;
use serde::{Deserialize, Serialize};

use super::content::RecordId;

/// Start or end of a career entry as the sort logic sees it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JourneyDate {
    /// Text that is neither a date nor the "present" sentinel. Kept verbatim
    /// for display.
    Unknown(String),
    On(NaiveDate),
    /// Still ongoing. Later than every concrete date.
    Present,
}

impl JourneyDate {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if is_present_sentinel(trimmed) {
            return JourneyDate::Present;
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return JourneyDate::On(date);
        }
        if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
            return JourneyDate::On(ts.date_naive());
        }
        JourneyDate::Unknown(trimmed.to_string())
    }

    /// Total order used for sorting: unknown < any date < present.
    pub fn sort_key(&self) -> (u8, Option<NaiveDate>) {
        match self {
            JourneyDate::Unknown(_) => (0, None),
            JourneyDate::On(date) => (1, Some(*date)),
            JourneyDate::Present => (2, None),
        }
    }
}

fn is_present_sentinel(s: &str) -> bool {
    ["present", "current", "ongoing"]
        .iter()
        .any(|sentinel| s.eq_ignore_ascii_case(sentinel))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CareerKind {
    #[default]
    #[serde(alias = "job")]
    Job,
    #[serde(alias = "education")]
    Education,
    #[serde(other)]
    Other,
}

/// One entry of the career journey. Everything except `started_at` is
/// display-only and passes through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerEntry {
    #[serde(default)]
    pub id: RecordId,
    #[serde(alias = "startedAt")]
    pub started_at: SharedStr,
    #[serde(default, alias = "endedAt")]
    pub ended_at: SharedStr,
    pub title: SharedStr,
    #[serde(default)]
    pub affiliation: SharedStr,
    #[serde(default)]
    pub description: SharedStr,
    #[serde(default)]
    pub location: SharedStr,
    #[serde(default, rename = "type")]
    pub kind: CareerKind,
}

impl CareerEntry {
    pub fn start(&self) -> JourneyDate {
        JourneyDate::parse(&self.started_at)
    }

    pub fn end(&self) -> JourneyDate {
        JourneyDate::parse(&self.ended_at)
    }

    pub fn is_ongoing(&self) -> bool {
        self.end() == JourneyDate::Present
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> JourneyDate {
        NaiveDate::from_ymd_opt(y, m, d).map_or(JourneyDate::Present, JourneyDate::On)
    }

    #[test]
    fn parses_calendar_dates_and_timestamps() {
        assert_eq!(JourneyDate::parse("2024-08-04"), date(2024, 8, 4));
        assert_eq!(
            JourneyDate::parse("2023-03-01T00:00:00Z"),
            date(2023, 3, 1)
        );
        assert_eq!(JourneyDate::parse(" 2022-09-23 "), date(2022, 9, 23));
    }

    #[test]
    fn present_sentinels_are_case_insensitive() {
        for raw in ["Present", "present", "CURRENT", "ongoing"] {
            assert_eq!(JourneyDate::parse(raw), JourneyDate::Present, "{raw}");
        }
    }

    #[test]
    fn sort_key_orders_unknown_dates_present() {
        let unknown = JourneyDate::parse("sometime");
        let early = JourneyDate::parse("2020-06-01");
        let late = JourneyDate::parse("2024-08-04");
        let present = JourneyDate::parse("Present");
        assert!(unknown.sort_key() < early.sort_key());
        assert!(early.sort_key() < late.sort_key());
        assert!(late.sort_key() < present.sort_key());
    }

    #[test]
    fn entry_accepts_both_field_spellings() {
        let snake: CareerEntry = serde_json::from_str(
            r#"{"started_at":"2024-08-04","ended_at":"Present","title":"Software Engineer","type":"Job"}"#,
        )
        .unwrap_or_else(|e| panic!("{e}"));
        let camel: CareerEntry = serde_json::from_str(
            r#"{"startedAt":"2024-08-04","endedAt":"Present","title":"Software Engineer","type":"Job"}"#,
        )
        .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(snake, camel);
        assert!(snake.is_ongoing());
        assert_eq!(snake.kind, CareerKind::Job);
    }

    #[test]
    fn unknown_kind_falls_back() {
        let entry: CareerEntry = serde_json::from_str(
            r#"{"started_at":"2021-01-01","title":"Volunteer","type":"Volunteering"}"#,
        )
        .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(entry.kind, CareerKind::Other);
        assert_eq!(entry.ended_at, "");
    }
}
