//! Dashboard side: which endpoint each edit hits, which cached queries it
//! invalidates, what the user is told, and the form drafts that produce
//! the request bodies.
//!
//! Nothing in this workspace performs the requests. An editing client
//! builds a draft, validates it into a record, serializes it as the body
//! of [`Mutation::path`] with [`Mutation::method`], then refetches every
//! [`QueryKey`] in [`Mutation::invalidates`].

pub mod drafts;

pub use drafts::{CareerDraft, DraftError, SkillDraft, TestimonyDraft};

use serde::{Deserialize, Serialize};

use crate::model::RecordId;

/// Cached query a dashboard view reads from. Mutations invalidate these to
/// force a refetch, so the strings must match the keys the views register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueryKey {
    Hero,
    About,
    Skills,
    Career,
    Projects,
    ProjectPage,
    Testimonials,
    TestimonyPage,
}

impl QueryKey {
    pub fn as_str(self) -> &'static str {
        match self {
            QueryKey::Hero => "hero",
            QueryKey::About => "about",
            QueryKey::Skills => "skills",
            QueryKey::Career => "career",
            QueryKey::Projects => "project-items",
            QueryKey::ProjectPage => "project",
            QueryKey::Testimonials => "testimony-items",
            QueryKey::TestimonyPage => "testimony",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mutation {
    CreateCareer,
    UpdateCareer(RecordId),
    DeleteCareer(RecordId),
    CreateSkill,
    UpdateSkill(RecordId),
    DeleteSkill(RecordId),
    CreateProject,
    UpdateProject(RecordId),
    DeleteProject(RecordId),
    UpdateHero,
    UpdateAbout,
    UpdateProjectPage,
    UpdateTestimonyPage,
    ApproveTestimonial(RecordId),
    UnapproveTestimonial(RecordId),
    DeleteTestimonial(RecordId),
}

impl Mutation {
    pub fn method(&self) -> Method {
        use Mutation::*;
        match self {
            CreateCareer | CreateSkill | CreateProject => Method::Post,
            DeleteCareer(_) | DeleteSkill(_) | DeleteProject(_) | DeleteTestimonial(_) => {
                Method::Delete
            }
            _ => Method::Patch,
        }
    }

    /// Admin API path, relative to the API base url.
    pub fn path(&self) -> String {
        use Mutation::*;
        match self {
            CreateCareer => "/admin/about/careers".to_string(),
            UpdateCareer(id) | DeleteCareer(id) => format!("/admin/about/careers/{id}"),
            CreateSkill => "/admin/about/skills".to_string(),
            UpdateSkill(id) | DeleteSkill(id) => format!("/admin/about/skills/{id}"),
            CreateProject => "/admin/project/items".to_string(),
            UpdateProject(id) | DeleteProject(id) => format!("/admin/project/items/{id}"),
            UpdateHero => "/admin/hero".to_string(),
            UpdateAbout => "/admin/about".to_string(),
            UpdateProjectPage => "/admin/project".to_string(),
            UpdateTestimonyPage => "/admin/testimony".to_string(),
            ApproveTestimonial(id) | UnapproveTestimonial(id) => {
                format!("/admin/testimony/items/{id}/approve")
            }
            DeleteTestimonial(id) => format!("/admin/testimony/items/{id}"),
        }
    }

    /// Request body the mutation always sends, independent of any form.
    pub fn fixed_body(&self) -> Option<serde_json::Value> {
        match self {
            Mutation::ApproveTestimonial(_) => Some(serde_json::json!({ "approved": true })),
            Mutation::UnapproveTestimonial(_) => Some(serde_json::json!({ "approved": false })),
            _ => None,
        }
    }

    pub fn invalidates(&self) -> &'static [QueryKey] {
        use Mutation::*;
        match self {
            CreateCareer | UpdateCareer(_) | DeleteCareer(_) => &[QueryKey::Career],
            CreateSkill | UpdateSkill(_) | DeleteSkill(_) => &[QueryKey::Skills],
            CreateProject | UpdateProject(_) | DeleteProject(_) => &[QueryKey::Projects],
            UpdateHero => &[QueryKey::Hero],
            UpdateAbout => &[QueryKey::About],
            UpdateProjectPage => &[QueryKey::ProjectPage],
            UpdateTestimonyPage => &[QueryKey::TestimonyPage],
            ApproveTestimonial(_) | UnapproveTestimonial(_) | DeleteTestimonial(_) => {
                &[QueryKey::Testimonials]
            }
        }
    }

    pub fn success_message(&self) -> &'static str {
        use Mutation::*;
        match self {
            CreateCareer => "Career entry added!",
            UpdateCareer(_) => "Career entry updated!",
            DeleteCareer(_) => "Career entry removed.",
            CreateSkill => "Skill added successfully!",
            UpdateSkill(_) => "Skill updated successfully!",
            DeleteSkill(_) => "Skill deleted.",
            CreateProject => "Project created successfully!",
            UpdateProject(_) => "Project updated successfully!",
            DeleteProject(_) => "Project deleted.",
            UpdateHero => "Hero section updated successfully!",
            UpdateAbout => "About section updated successfully!",
            UpdateProjectPage => "Project settings updated!",
            UpdateTestimonyPage => "Testimonial settings updated!",
            ApproveTestimonial(_) => "Testimonial approved!",
            UnapproveTestimonial(_) => "Testimonial unapproved.",
            DeleteTestimonial(_) => "Testimonial deleted.",
        }
    }

    fn default_failure(&self) -> &'static str {
        use Mutation::*;
        match self {
            CreateCareer => "Failed to create entry.",
            UpdateCareer(_) => "Failed to update entry.",
            DeleteCareer(_) => "Failed to delete entry.",
            CreateSkill => "Failed to add skill.",
            UpdateSkill(_) => "Failed to update skill.",
            DeleteSkill(_) => "Failed to delete skill.",
            CreateProject => "Failed to create project.",
            UpdateProject(_) => "Failed to update project.",
            DeleteProject(_) => "Failed to delete project.",
            UpdateHero => "Failed to update hero section.",
            UpdateAbout => "Failed to update about section.",
            UpdateProjectPage => "Failed to update project settings.",
            UpdateTestimonyPage => "Failed to update settings.",
            ApproveTestimonial(_) => "Failed to approve.",
            UnapproveTestimonial(_) => "Failed to unapprove.",
            DeleteTestimonial(_) => "Failed to delete.",
        }
    }

    /// Whether the API's own error text is shown instead of the generic one.
    fn surfaces_server_error(&self) -> bool {
        use Mutation::*;
        matches!(
            self,
            CreateCareer
                | UpdateCareer(_)
                | DeleteCareer(_)
                | CreateSkill
                | UpdateSkill(_)
                | DeleteSkill(_)
                | UpdateAbout
        )
    }

    /// Notification text for a failed request. `server_error` is the
    /// `error` field of the response body, when there was one.
    pub fn failure_message(&self, server_error: Option<&str>) -> String {
        match server_error.map(str::trim) {
            Some(text) if self.surfaces_server_error() && !text.is_empty() => text.to_string(),
            _ => self.default_failure().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_follow_the_admin_api() {
        let id = RecordId::Num(7);
        assert_eq!(Mutation::CreateCareer.path(), "/admin/about/careers");
        assert_eq!(Mutation::UpdateSkill(id.clone()).path(), "/admin/about/skills/7");
        assert_eq!(Mutation::DeleteProject(id.clone()).method(), Method::Delete);
        assert_eq!(
            Mutation::ApproveTestimonial(RecordId::Text("t-1".into())).path(),
            "/admin/testimony/items/t-1/approve"
        );
        assert_eq!(Mutation::UpdateTestimonyPage.method().as_str(), "PATCH");
        assert_eq!(Mutation::CreateProject.method().as_str(), "POST");
    }

    #[test]
    fn approval_sends_flag() {
        let id = RecordId::Num(1);
        assert_eq!(
            Mutation::UnapproveTestimonial(id.clone()).fixed_body(),
            Some(serde_json::json!({ "approved": false }))
        );
        assert_eq!(Mutation::UpdateHero.fixed_body(), None);
        assert_eq!(
            Mutation::ApproveTestimonial(id).invalidates(),
            &[QueryKey::Testimonials]
        );
    }

    #[test]
    fn server_errors_only_surface_where_the_form_shows_them() {
        let career = Mutation::UpdateCareer(RecordId::Num(3));
        assert_eq!(career.failure_message(Some("started_at is required")), "started_at is required");
        assert_eq!(career.failure_message(Some("  ")), "Failed to update entry.");
        assert_eq!(career.failure_message(None), "Failed to update entry.");

        let hero = Mutation::UpdateHero;
        assert_eq!(hero.failure_message(Some("boom")), "Failed to update hero section.");
    }

    #[test]
    fn query_keys_match_the_dashboard_cache() {
        let keys: Vec<_> = [
            QueryKey::Hero,
            QueryKey::About,
            QueryKey::Skills,
            QueryKey::Career,
            QueryKey::Projects,
            QueryKey::ProjectPage,
            QueryKey::Testimonials,
            QueryKey::TestimonyPage,
        ]
        .into_iter()
        .map(QueryKey::as_str)
        .collect();
        assert_eq!(
            keys,
            [
                "hero",
                "about",
                "skills",
                "career",
                "project-items",
                "project",
                "testimony-items",
                "testimony",
            ]
        );
        assert_eq!(
            Mutation::DeleteProject(RecordId::Num(3)).invalidates(),
            &[QueryKey::Projects]
        );
        assert_eq!(
            Mutation::ApproveTestimonial(RecordId::Num(1)).invalidates()[0].as_str(),
            "testimony-items"
        );
    }

    #[test]
    fn every_mutation_invalidates_something() {
        let id = RecordId::default();
        let all = [
            Mutation::CreateCareer,
            Mutation::UpdateCareer(id.clone()),
            Mutation::DeleteCareer(id.clone()),
            Mutation::CreateSkill,
            Mutation::UpdateSkill(id.clone()),
            Mutation::DeleteSkill(id.clone()),
            Mutation::CreateProject,
            Mutation::UpdateProject(id.clone()),
            Mutation::DeleteProject(id.clone()),
            Mutation::UpdateHero,
            Mutation::UpdateAbout,
            Mutation::UpdateProjectPage,
            Mutation::UpdateTestimonyPage,
            Mutation::ApproveTestimonial(id.clone()),
            Mutation::UnapproveTestimonial(id.clone()),
            Mutation::DeleteTestimonial(id),
        ];
        for m in &all {
            assert!(!m.invalidates().is_empty(), "{m:?}");
            assert!(m.path().starts_with("/admin/"), "{m:?}");
            assert!(!m.success_message().is_empty());
        }
        assert_eq!(Mutation::UpdateProjectPage.invalidates()[0].as_str(), "project-page");
    }
}
