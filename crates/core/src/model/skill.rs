use folio_protocol::SharedStr;
use serde::{Deserialize, Serialize};

use super::content::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SkillLevel {
    #[default]
    #[serde(alias = "beginner")]
    Beginner,
    #[serde(alias = "intermediate")]
    Intermediate,
    #[serde(alias = "advanced")]
    Advanced,
    #[serde(alias = "expert")]
    Expert,
}

impl SkillLevel {
    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SkillCategory {
    #[serde(alias = "backend")]
    Backend,
    #[serde(alias = "frontend")]
    Frontend,
    #[default]
    #[serde(alias = "other")]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    pub label: SharedStr,
    pub value: SharedStr,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub id: RecordId,
    pub name: SharedStr,
    pub description: SharedStr,
    pub specialities: Vec<SharedStr>,
    pub level: SkillLevel,
    pub category: SkillCategory,
    pub stats: Vec<Stat>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_accept_api_and_filter_spellings() {
        let cats: Vec<SkillCategory> =
            serde_json::from_str(r#"["Backend","frontend","Other"]"#).unwrap_or_default();
        assert_eq!(
            cats,
            vec![
                SkillCategory::Backend,
                SkillCategory::Frontend,
                SkillCategory::Other
            ]
        );
    }

    #[test]
    fn skill_with_stats_and_specialities() {
        let skill: Skill = serde_json::from_str(
            r#"{"id":1,"name":"Golang","level":"Expert","category":"backend",
                "stats":[{"label":"Years","value":"2+"}],
                "specialities":["Authentication","APIs"]}"#,
        )
        .unwrap_or_default();
        assert_eq!(skill.name, "Golang");
        assert_eq!(skill.level, SkillLevel::Expert);
        assert_eq!(skill.level.label(), "Expert");
        assert_eq!(skill.stats[0].value, "2+");
        assert_eq!(skill.specialities.len(), 2);
    }
}
