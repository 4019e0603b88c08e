use folio_protocol::SharedStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{
    CareerEntry, CareerKind, JourneyDate, RecordId, Skill, SkillCategory, SkillLevel, Stat,
    Testimonial,
};

const PRESENT: &str = "Present";
const AVATAR_BASE: &str = "https://api.dicebear.com/7.x/adventurer/svg?seed=";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{field}: `{value}` is not a date")]
    InvalidDate { field: &'static str, value: String },
    #[error("end date is before start date")]
    EndBeforeStart,
    #[error("rating must be between 1 and 5, got {0}")]
    Rating(u8),
}

fn required(field: &'static str, value: &str) -> Result<SharedStr, DraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DraftError::Missing(field));
    }
    Ok(trimmed.into())
}

/// Career form state. While `present` is set the end date input is locked
/// and the entry is saved as ongoing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CareerDraft {
    pub title: String,
    pub affiliation: String,
    pub description: String,
    pub location: String,
    pub kind: CareerKind,
    pub started_at: String,
    pub ended_at: String,
    pub present: bool,
}

impl CareerDraft {
    pub fn from_entry(entry: &CareerEntry) -> Self {
        let present = entry.is_ongoing();
        Self {
            title: entry.title.to_string(),
            affiliation: entry.affiliation.to_string(),
            description: entry.description.to_string(),
            location: entry.location.to_string(),
            kind: entry.kind,
            started_at: entry.started_at.to_string(),
            ended_at: if present {
                String::new()
            } else {
                entry.ended_at.to_string()
            },
            present,
        }
    }

    /// What the end date input shows.
    pub fn ended_at_display(&self) -> &str {
        if self.present { PRESENT } else { self.ended_at.as_str() }
    }

    pub fn to_entry(&self, id: RecordId) -> Result<CareerEntry, DraftError> {
        let title = required("title", &self.title)?;
        let started_at = required("started_at", &self.started_at)?;
        let start = calendar_date("started_at", &started_at)?;

        let ended_at: SharedStr = if self.present {
            PRESENT.into()
        } else {
            let ended_at = required("ended_at", &self.ended_at)?;
            let end = calendar_date("ended_at", &ended_at)?;
            if end.sort_key() < start.sort_key() {
                return Err(DraftError::EndBeforeStart);
            }
            ended_at
        };

        Ok(CareerEntry {
            id,
            started_at,
            ended_at,
            title,
            affiliation: self.affiliation.trim().into(),
            description: self.description.trim().into(),
            location: self.location.trim().into(),
            kind: self.kind,
        })
    }
}

fn calendar_date(field: &'static str, value: &str) -> Result<JourneyDate, DraftError> {
    match JourneyDate::parse(value) {
        date @ JourneyDate::On(_) => Ok(date),
        _ => Err(DraftError::InvalidDate {
            field,
            value: value.to_string(),
        }),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillDraft {
    pub name: String,
    pub description: String,
    pub level: SkillLevel,
    pub category: SkillCategory,
    /// One entry per input row; blank rows are allowed while editing.
    pub specialities: Vec<String>,
    pub stats: Vec<(String, String)>,
}

impl SkillDraft {
    pub fn from_skill(skill: &Skill) -> Self {
        Self {
            name: skill.name.to_string(),
            description: skill.description.to_string(),
            level: skill.level,
            category: skill.category,
            specialities: skill.specialities.iter().map(ToString::to_string).collect(),
            stats: skill
                .stats
                .iter()
                .map(|s| (s.label.to_string(), s.value.to_string()))
                .collect(),
        }
    }

    pub fn add_speciality(&mut self) {
        self.specialities.push(String::new());
    }

    pub fn remove_speciality(&mut self, index: usize) {
        if index < self.specialities.len() {
            self.specialities.remove(index);
        }
    }

    pub fn to_skill(&self, id: RecordId) -> Result<Skill, DraftError> {
        let name = required("name", &self.name)?;

        let mut specialities: Vec<SharedStr> = Vec::with_capacity(self.specialities.len());
        for raw in &self.specialities {
            let trimmed = raw.trim();
            if trimmed.is_empty()
                || specialities
                    .iter()
                    .any(|s| s.eq_ignore_ascii_case(trimmed))
            {
                continue;
            }
            specialities.push(trimmed.into());
        }

        let stats = self
            .stats
            .iter()
            .filter(|(label, _)| !label.trim().is_empty())
            .map(|(label, value)| Stat {
                label: label.trim().into(),
                value: value.trim().into(),
            })
            .collect();

        Ok(Skill {
            id,
            name,
            description: self.description.trim().into(),
            specialities,
            level: self.level,
            category: self.category,
            stats,
        })
    }
}

/// A visitor's testimony. Submissions start unapproved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestimonyDraft {
    pub name: String,
    pub affiliation: String,
    pub description: String,
    pub rating: u8,
    pub profile_url: String,
}

impl TestimonyDraft {
    pub fn to_testimonial(&self) -> Result<Testimonial, DraftError> {
        let name = required("name", &self.name)?;
        let description = required("description", &self.description)?;
        if !(1..=5).contains(&self.rating) {
            return Err(DraftError::Rating(self.rating));
        }
        let profile_url = match self.profile_url.trim() {
            "" => default_avatar(&name),
            url => url.into(),
        };
        Ok(Testimonial {
            id: RecordId::default(),
            name,
            profile_url,
            affiliation: self.affiliation.trim().into(),
            rating: self.rating,
            description,
            ai_summary: SharedStr::default(),
            approved: false,
        })
    }
}

pub fn default_avatar(name: &str) -> SharedStr {
    format!("{AVATAR_BASE}{}", urlencoding::encode(name.trim())).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn career_draft() -> CareerDraft {
        CareerDraft {
            title: " Software Engineer ".into(),
            affiliation: "Zellify".into(),
            started_at: "2024-08-04".into(),
            ended_at: "2025-01-31".into(),
            ..CareerDraft::default()
        }
    }

    #[test]
    fn present_toggle_saves_sentinel() {
        let mut draft = career_draft();
        draft.present = true;
        assert_eq!(draft.ended_at_display(), "Present");
        let entry = draft.to_entry(RecordId::Num(4)).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(entry.ended_at, "Present");
        assert!(entry.is_ongoing());
        assert_eq!(entry.title, "Software Engineer");
    }

    #[test]
    fn editing_an_ongoing_entry_clears_the_end_date() {
        let mut draft = career_draft();
        draft.present = true;
        let entry = draft.to_entry(RecordId::Num(4)).unwrap_or_else(|e| panic!("{e}"));
        let reopened = CareerDraft::from_entry(&entry);
        assert!(reopened.present);
        assert_eq!(reopened.ended_at, "");
        assert_eq!(
            reopened.to_entry(RecordId::Num(4)).unwrap_or_else(|e| panic!("{e}")),
            entry
        );
    }

    #[test]
    fn career_validation() {
        let mut draft = career_draft();
        draft.ended_at = "2020-01-01".into();
        assert_eq!(draft.to_entry(RecordId::default()), Err(DraftError::EndBeforeStart));

        draft.ended_at = String::new();
        assert_eq!(
            draft.to_entry(RecordId::default()),
            Err(DraftError::Missing("ended_at"))
        );

        draft.started_at = "soon".into();
        assert!(matches!(
            draft.to_entry(RecordId::default()),
            Err(DraftError::InvalidDate { field: "started_at", .. })
        ));

        draft.title = "  ".into();
        assert_eq!(draft.to_entry(RecordId::default()), Err(DraftError::Missing("title")));
    }

    #[test]
    fn specialities_are_trimmed_and_deduplicated() {
        let mut draft = SkillDraft {
            name: "Golang".into(),
            specialities: vec![" REST ".into(), "gRPC".into(), "rest".into()],
            stats: vec![("Years".into(), "3".into()), ("".into(), "ignored".into())],
            ..SkillDraft::default()
        };
        draft.add_speciality();
        let skill = draft.to_skill(RecordId::Num(1)).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(skill.specialities, vec![SharedStr::from("REST"), SharedStr::from("gRPC")]);
        assert_eq!(skill.stats.len(), 1);

        draft.remove_speciality(0);
        draft.remove_speciality(99);
        assert_eq!(draft.specialities.len(), 3);

        draft.name.clear();
        assert_eq!(draft.to_skill(RecordId::Num(1)), Err(DraftError::Missing("name")));
    }

    #[test]
    fn skill_round_trips_through_draft() {
        let skill = Skill {
            name: "Rust".into(),
            level: SkillLevel::Intermediate,
            category: SkillCategory::Backend,
            specialities: vec!["Tokio".into()],
            ..Skill::default()
        };
        let draft = SkillDraft::from_skill(&skill);
        assert_eq!(draft.to_skill(RecordId::default()), Ok(skill));
    }

    #[test]
    fn testimony_defaults_avatar_and_checks_rating() {
        let draft = TestimonyDraft {
            name: "Mary Jane".into(),
            description: "Reliable and quick.".into(),
            rating: 5,
            ..TestimonyDraft::default()
        };
        let t = draft.to_testimonial().unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(
            t.profile_url,
            "https://api.dicebear.com/7.x/adventurer/svg?seed=Mary%20Jane"
        );
        assert!(!t.approved);

        let zero = TestimonyDraft { rating: 0, ..draft.clone() };
        assert_eq!(zero.to_testimonial(), Err(DraftError::Rating(0)));
        let six = TestimonyDraft { rating: 6, ..draft };
        assert_eq!(six.to_testimonial(), Err(DraftError::Rating(6)));
    }
}
