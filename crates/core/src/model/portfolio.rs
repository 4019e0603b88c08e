use serde::{Deserialize, Deserializer, Serialize};

use super::career::CareerEntry;
use super::content::{AboutPage, HeroPage, Listing, Project, SectionHeader, Testimonial};
use super::skill::Skill;

/// Everything the public site renders, in one document.
///
/// List fields accept either a bare array or the API's `{data, length}`
/// envelope so a snapshot can be assembled straight from endpoint responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    pub hero: Option<HeroPage>,
    pub about: Option<AboutPage>,
    #[serde(deserialize_with = "listing_or_vec")]
    pub skills: Vec<Skill>,
    #[serde(deserialize_with = "listing_or_vec")]
    pub careers: Vec<CareerEntry>,
    pub project_page: Option<SectionHeader>,
    #[serde(deserialize_with = "listing_or_vec")]
    pub projects: Vec<Project>,
    pub testimony_page: Option<SectionHeader>,
    #[serde(deserialize_with = "listing_or_vec")]
    pub testimonials: Vec<Testimonial>,
}

impl Portfolio {
    /// Testimonials the public site may show.
    pub fn approved_testimonials(&self) -> Vec<Testimonial> {
        self.testimonials
            .iter()
            .filter(|t| t.approved)
            .cloned()
            .collect()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListOrEnvelope<T> {
    Envelope(Listing<T>),
    Bare(Vec<T>),
}

fn listing_or_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match ListOrEnvelope::<T>::deserialize(deserializer)? {
        ListOrEnvelope::Envelope(listing) => listing.data,
        ListOrEnvelope::Bare(items) => items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_accept_envelope_or_bare_array() {
        let portfolio: Portfolio = serde_json::from_str(
            r#"{
                "careers": {"data": [{"started_at":"2024-08-04","title":"Engineer"}], "length": 1},
                "skills": [{"name":"Rust","category":"Backend","level":"Intermediate"}]
            }"#,
        )
        .unwrap_or_default();
        assert_eq!(portfolio.careers.len(), 1);
        assert_eq!(portfolio.skills.len(), 1);
        assert!(portfolio.hero.is_none());
    }

    #[test]
    fn only_approved_testimonials_are_public() {
        let portfolio: Portfolio = serde_json::from_str(
            r#"{"testimonials":[
                {"name":"Sweepy","approved":true},
                {"name":"Spam","approved":false},
                {"name":"Karen"}
            ]}"#,
        )
        .unwrap_or_default();
        let names: Vec<_> = portfolio
            .approved_testimonials()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["Sweepy", "Karen"]);
    }
}
