//! Display strings for content records.

use chrono::{Datelike, NaiveDate};
use folio_protocol::ThemeToken;

use crate::model::{CareerEntry, JourneyDate, SkillLevel};

/// `4th August 2024`, `Present` for the sentinel, the raw text when it
/// isn't a date at all.
pub fn format_journey_date(raw: &str) -> String {
    match JourneyDate::parse(raw) {
        JourneyDate::Present => "Present".to_string(),
        JourneyDate::On(date) => long_date(date),
        JourneyDate::Unknown(text) => text,
    }
}

fn long_date(date: NaiveDate) -> String {
    let day = date.day();
    format!("{day}{} {}", ordinal_suffix(day), date.format("%B %Y"))
}

fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

pub fn date_range(entry: &CareerEntry) -> String {
    format!(
        "{} - {}",
        format_journey_date(&entry.started_at),
        format_journey_date(&entry.ended_at)
    )
}

pub fn skill_level_token(level: SkillLevel) -> ThemeToken {
    match level {
        SkillLevel::Beginner => ThemeToken::BadgeBeginner,
        SkillLevel::Intermediate => ThemeToken::BadgeIntermediate,
        SkillLevel::Advanced => ThemeToken::BadgeAdvanced,
        SkillLevel::Expert => ThemeToken::BadgeExpert,
    }
}

/// `★★★★☆` for a 0..=5 rating; out-of-range ratings saturate.
pub fn rating_stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_dates_use_ordinals() {
        assert_eq!(format_journey_date("2024-08-04"), "4th August 2024");
        assert_eq!(format_journey_date("2023-03-01"), "1st March 2023");
        assert_eq!(format_journey_date("2022-09-22"), "22nd September 2022");
        assert_eq!(format_journey_date("2021-05-23"), "23rd May 2021");
    }

    #[test]
    fn teens_always_take_th() {
        assert_eq!(format_journey_date("2020-01-11"), "11th January 2020");
        assert_eq!(format_journey_date("2020-01-12"), "12th January 2020");
        assert_eq!(format_journey_date("2020-01-13"), "13th January 2020");
    }

    #[test]
    fn sentinel_and_garbage() {
        assert_eq!(format_journey_date("ongoing"), "Present");
        assert_eq!(format_journey_date("  circa 2019 "), "circa 2019");
        assert_eq!(format_journey_date(""), "");
    }

    #[test]
    fn range_joins_both_ends() {
        let entry = CareerEntry {
            id: Default::default(),
            started_at: "2024-08-04T00:00:00Z".into(),
            ended_at: "Present".into(),
            title: "Software Engineer".into(),
            affiliation: "".into(),
            description: "".into(),
            location: "".into(),
            kind: Default::default(),
        };
        assert_eq!(date_range(&entry), "4th August 2024 - Present");
    }

    #[test]
    fn stars_saturate() {
        assert_eq!(rating_stars(3), "★★★☆☆");
        assert_eq!(rating_stars(9), "★★★★★");
        assert_eq!(rating_stars(0), "☆☆☆☆☆");
    }
}
