pub mod listing;

pub use listing::{ListResource, parse_listing};

use serde_json::{Map, Value};
use thiserror::Error;

use crate::model::{AboutPage, CareerEntry, HeroPage, Portfolio, Project, Skill, Testimonial};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unable to detect content shape")]
    UnknownShape,
    #[error("{resource}: {source}")]
    Listing {
        resource: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Whatever document `parse_auto` was handed.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Portfolio(Box<Portfolio>),
    Hero(HeroPage),
    About(AboutPage),
    Careers(Vec<CareerEntry>),
    Skills(Vec<Skill>),
    Projects(Vec<Project>),
    Testimonials(Vec<Testimonial>),
}

impl Content {
    pub fn kind(&self) -> &'static str {
        match self {
            Content::Portfolio(_) => "portfolio",
            Content::Hero(_) => "hero",
            Content::About(_) => "about",
            Content::Careers(_) => "careers",
            Content::Skills(_) => "skills",
            Content::Projects(_) => "projects",
            Content::Testimonials(_) => "testimonials",
        }
    }

    /// Fold this document into a snapshot, replacing the part it covers.
    pub fn merge_into(self, portfolio: &mut Portfolio) {
        match self {
            Content::Portfolio(snapshot) => *portfolio = *snapshot,
            Content::Hero(hero) => portfolio.hero = Some(hero),
            Content::About(about) => portfolio.about = Some(about),
            Content::Careers(careers) => portfolio.careers = careers,
            Content::Skills(skills) => portfolio.skills = skills,
            Content::Projects(projects) => portfolio.projects = projects,
            Content::Testimonials(testimonials) => portfolio.testimonials = testimonials,
        }
    }

    pub fn into_portfolio(self) -> Portfolio {
        let mut portfolio = Portfolio::default();
        self.merge_into(&mut portfolio);
        portfolio
    }
}

const SNAPSHOT_KEYS: [&str; 8] = [
    "hero",
    "about",
    "skills",
    "careers",
    "project_page",
    "projects",
    "testimony_page",
    "testimonials",
];

pub fn parse_portfolio(data: &[u8]) -> Result<Portfolio, ContentError> {
    Ok(serde_json::from_slice(data)?)
}

/// Auto-detect which document this is and parse it.
///
/// Detection strategy:
/// 1. Snapshot: any of the aggregate section keys at the top level.
/// 2. List response (`{data: [...]}`) or bare array: classify by the keys of
///    the first record.
/// 3. Single page: hero and about are told apart by their fields.
pub fn parse_auto(data: &[u8]) -> Result<Content, ContentError> {
    let value: Value = serde_json::from_slice(data)?;

    let content = match value {
        Value::Object(obj) if SNAPSHOT_KEYS.iter().any(|k| obj.contains_key(*k)) => {
            Content::Portfolio(Box::new(serde_json::from_value(Value::Object(obj))?))
        }
        Value::Object(obj) if obj.get("data").is_some_and(Value::is_array) => {
            let first = obj
                .get("data")
                .and_then(Value::as_array)
                .and_then(|records| records.first())
                .and_then(Value::as_object)
                .cloned();
            match first {
                Some(record) => records_from(&record, Value::Object(obj))?,
                None => {
                    tracing::debug!("empty listing, nothing to classify");
                    Content::Portfolio(Box::default())
                }
            }
        }
        Value::Array(records) => {
            let first = records.first().and_then(Value::as_object).cloned();
            match first {
                Some(record) => {
                    let mut envelope = Map::new();
                    envelope.insert("data".into(), Value::Array(records));
                    records_from(&record, Value::Object(envelope))?
                }
                None => Content::Portfolio(Box::default()),
            }
        }
        Value::Object(obj) if is_hero(&obj) => {
            Content::Hero(serde_json::from_value(Value::Object(obj))?)
        }
        Value::Object(obj) if is_about(&obj) => {
            Content::About(serde_json::from_value(Value::Object(obj))?)
        }
        _ => return Err(ContentError::UnknownShape),
    };

    tracing::debug!(kind = content.kind(), "detected content");
    Ok(content)
}

fn records_from(record: &Map<String, Value>, envelope: Value) -> Result<Content, ContentError> {
    let has = |keys: &[&str]| keys.iter().any(|k| record.contains_key(*k));

    if has(&["started_at", "startedAt"]) {
        return Ok(Content::Careers(listing::listing_from_value(envelope)?));
    }
    if has(&["level", "specialities", "category"]) {
        return Ok(Content::Skills(listing::listing_from_value(envelope)?));
    }
    if has(&["tech_stack", "techStack", "image_urls", "imageUrls"]) {
        return Ok(Content::Projects(listing::listing_from_value(envelope)?));
    }
    if has(&["rating", "approved", "profile_url", "ai_summary"]) {
        return Ok(Content::Testimonials(listing::listing_from_value(envelope)?));
    }
    Err(ContentError::UnknownShape)
}

fn is_hero(obj: &Map<String, Value>) -> bool {
    ["rank", "resume_link", "image_url_1", "hobbies"]
        .iter()
        .any(|k| obj.contains_key(*k))
}

fn is_about(obj: &Map<String, Value>) -> bool {
    ["cards", "github_link", "linkedin_link", "available"]
        .iter()
        .any(|k| obj.contains_key(*k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_each_shape() {
        let cases: [(&[u8], &str); 7] = [
            (br#"{"hero":{"name":"Stanley"}}"#, "portfolio"),
            (br#"{"name":"Stanley","rank":"Software Engineer"}"#, "hero"),
            (br#"{"description":"hi","cards":[],"available":true}"#, "about"),
            (br#"{"data":[{"startedAt":"2024-08-04","title":"SE"}],"length":1}"#, "careers"),
            (br#"[{"name":"Rust","level":"Expert"}]"#, "skills"),
            (br#"{"data":[{"name":"Atlas","techStack":["Go"]}]}"#, "projects"),
            (br#"{"data":[{"name":"Gary","rating":5}]}"#, "testimonials"),
        ];
        for (input, expected) in cases {
            let content = parse_auto(input).unwrap_or_else(|e| panic!("{expected}: {e}"));
            assert_eq!(content.kind(), expected);
        }
    }

    #[test]
    fn unknown_shapes_are_rejected() {
        assert!(matches!(
            parse_auto(br#"{"foo":1}"#),
            Err(ContentError::UnknownShape)
        ));
        assert!(matches!(
            parse_auto(br#"{"data":[{"foo":1}]}"#),
            Err(ContentError::UnknownShape)
        ));
        assert!(matches!(parse_auto(b"not json"), Err(ContentError::Json(_))));
    }

    #[test]
    fn empty_listing_is_an_empty_snapshot() {
        let content = parse_auto(br#"{"data":[],"length":0}"#).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(content.into_portfolio(), Portfolio::default());
    }

    #[test]
    fn merging_replaces_only_the_covered_section() {
        let mut portfolio = parse_portfolio(
            br#"{"hero":{"name":"Stanley"},"skills":[{"name":"Go"}]}"#,
        )
        .unwrap_or_default();
        let careers = parse_auto(br#"[{"started_at":"2020-01-01","title":"Intern"}]"#)
            .unwrap_or_else(|e| panic!("{e}"));
        careers.merge_into(&mut portfolio);
        assert_eq!(portfolio.careers.len(), 1);
        assert_eq!(portfolio.skills.len(), 1);
        assert!(portfolio.hero.is_some());
    }
}
