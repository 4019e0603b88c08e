pub mod career;
pub mod content;
pub mod portfolio;
pub mod skill;

pub use career::{CareerEntry, CareerKind, JourneyDate};
pub use content::{
    AboutCard, AboutPage, HeroPage, Listing, Project, RecordId, SectionHeader, Testimonial,
};
pub use portfolio::Portfolio;
pub use skill::{Skill, SkillCategory, SkillLevel, Stat};
