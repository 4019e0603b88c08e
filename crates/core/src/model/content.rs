use std::fmt;

use folio_protocol::SharedStr;
use serde::{Deserialize, Serialize};

/// Record identifier. The API hands out numeric ids for most resources and
/// string ids for a few CMS views; both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Num(u64),
    Text(SharedStr),
}

impl Default for RecordId {
    fn default() -> Self {
        RecordId::Num(0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Num(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// `{ "data": [...], "length": n }` envelope returned by list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub length: Option<usize>,
}

/// Title + blurb shown above the project and testimonial sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionHeader {
    pub title: SharedStr,
    pub description: SharedStr,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroPage {
    pub name: SharedStr,
    pub rank: SharedStr,
    pub title: SharedStr,
    pub subtitle: SharedStr,
    pub resume_link: SharedStr,
    pub contact_link: SharedStr,
    pub image_url_1: SharedStr,
    pub image_url_2: SharedStr,
    pub image_url_3: SharedStr,
    pub image_url_4: SharedStr,
    pub hobbies: Vec<SharedStr>,
}

impl HeroPage {
    /// Gallery images in slot order, skipping empty slots.
    pub fn images(&self) -> Vec<&SharedStr> {
        [
            &self.image_url_1,
            &self.image_url_2,
            &self.image_url_3,
            &self.image_url_4,
        ]
        .into_iter()
        .filter(|url| !url.trim().is_empty())
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutCard {
    pub title: SharedStr,
    pub description: SharedStr,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutPage {
    pub description: SharedStr,
    pub cards: Vec<AboutCard>,
    pub github_link: SharedStr,
    pub linkedin_link: SharedStr,
    pub available: bool,
}

impl AboutPage {
    pub fn has_github(&self) -> bool {
        has_link(&self.github_link)
    }

    pub fn has_linkedin(&self) -> bool {
        has_link(&self.linkedin_link)
    }

    /// Headline and detail line for the availability card.
    pub fn availability_copy(&self) -> (&'static str, &'static str) {
        if self.available {
            (
                "Currently available",
                "Open to remote-friendly collaborations and roles.",
            )
        } else {
            (
                "Booked at the moment",
                "Reach out to discuss future availability.",
            )
        }
    }
}

fn has_link(link: &str) -> bool {
    !link.trim().is_empty()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: RecordId,
    pub name: SharedStr,
    #[serde(alias = "imageUrls")]
    pub image_urls: Vec<SharedStr>,
    pub description: SharedStr,
    #[serde(alias = "techStack")]
    pub tech_stack: Vec<SharedStr>,
    #[serde(alias = "githubLink")]
    pub github_link: SharedStr,
    #[serde(rename = "type")]
    pub kind: SharedStr,
    pub contribution: SharedStr,
    #[serde(alias = "projectLink")]
    pub project_link: SharedStr,
}

fn approved_by_default() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(default)]
    pub id: RecordId,
    pub name: SharedStr,
    #[serde(default)]
    pub profile_url: SharedStr,
    #[serde(default)]
    pub affiliation: SharedStr,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub description: SharedStr,
    #[serde(default)]
    pub ai_summary: SharedStr,
    /// The public `approved` endpoint omits the flag; anything it returns
    /// is approved.
    #[serde(default = "approved_by_default")]
    pub approved: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_accepts_numbers_and_strings() {
        let ids: Vec<RecordId> =
            serde_json::from_str(r#"[7, "a1b2"]"#).unwrap_or_default();
        assert_eq!(ids, vec![RecordId::Num(7), RecordId::Text("a1b2".into())]);
        assert_eq!(ids[1].to_string(), "a1b2");
    }

    #[test]
    fn hero_images_skip_empty_slots() {
        let hero = HeroPage {
            image_url_1: "https://cdn/1.png".into(),
            image_url_3: "https://cdn/3.png".into(),
            image_url_4: "  ".into(),
            ..HeroPage::default()
        };
        let images = hero.images();
        assert_eq!(images.len(), 2);
        assert_eq!(*images[1], "https://cdn/3.png");
    }

    #[test]
    fn project_reads_camel_case_payload() {
        let project: Project = serde_json::from_str(
            r#"{"id":3,"name":"Atlas","imageUrls":["a.png"],"techStack":["Go","Redis"],"githubLink":"gh","type":"Personal","projectLink":"https://atlas"}"#,
        )
        .unwrap_or_default();
        assert_eq!(project.name, "Atlas");
        assert_eq!(project.tech_stack.len(), 2);
        assert_eq!(project.kind, "Personal");
    }

    #[test]
    fn public_testimonials_default_to_approved() {
        let t: Testimonial =
            serde_json::from_str(r#"{"id":1,"name":"Gary","rating":5}"#)
                .unwrap_or_else(|_| Testimonial {
                    id: RecordId::default(),
                    name: "".into(),
                    profile_url: "".into(),
                    affiliation: "".into(),
                    rating: 0,
                    description: "".into(),
                    ai_summary: "".into(),
                    approved: false,
                });
        assert!(t.approved);
        assert_eq!(t.rating, 5);
    }

    #[test]
    fn availability_copy_follows_flag() {
        let mut about = AboutPage::default();
        assert_eq!(about.availability_copy().0, "Booked at the moment");
        about.available = true;
        assert_eq!(about.availability_copy().0, "Currently available");
        assert!(!about.has_github());
    }
}
