//! Category-filtered, paged skills browser.

use serde::{Deserialize, Serialize};

use crate::carousel::{CarouselState, Nav, WindowConfig};
use crate::model::{Skill, SkillCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Backend,
    Frontend,
    Other,
}

impl CategoryFilter {
    pub const ALL: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Backend,
        CategoryFilter::Frontend,
        CategoryFilter::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Backend => "Backend",
            CategoryFilter::Frontend => "Frontend",
            CategoryFilter::Other => "Other Technologies",
        }
    }

    pub fn matches(self, category: SkillCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Backend => category == SkillCategory::Backend,
            CategoryFilter::Frontend => category == SkillCategory::Frontend,
            CategoryFilter::Other => category == SkillCategory::Other,
        }
    }

    /// Position in [`CategoryFilter::ALL`], which is also the tab index.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The next tab, wrapping around.
    pub fn cycled(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillBrowser {
    skills: Vec<Skill>,
    filter: CategoryFilter,
    /// Indices into `skills` that pass `filter`, in input order.
    filtered: Vec<usize>,
    pager: CarouselState,
}

impl SkillBrowser {
    pub fn new(skills: Vec<Skill>) -> Self {
        let mut browser = Self {
            skills,
            filter: CategoryFilter::All,
            filtered: Vec::new(),
            pager: CarouselState::new(0, WindowConfig::SKILLS),
        };
        browser.refilter();
        browser.pager = browser.pager.reset(browser.filtered.len());
        browser
    }

    fn refilter(&mut self) {
        let filter = self.filter;
        self.filtered = self
            .skills
            .iter()
            .enumerate()
            .filter(|(_, skill)| filter.matches(skill.category))
            .map(|(i, _)| i)
            .collect();
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    /// Switch category. Changing the filter returns to the first page;
    /// re-selecting the active one is a no-op.
    pub fn set_filter(&mut self, filter: CategoryFilter) -> bool {
        if filter == self.filter {
            return false;
        }
        self.filter = filter;
        self.refilter();
        self.pager = self.pager.reset(self.filtered.len());
        tracing::debug!(filter = filter.label(), matches = self.filtered.len(), "skill filter changed");
        true
    }

    /// New skills from a refetch. The current page is kept when it still
    /// exists, otherwise the last page is shown.
    pub fn replace_skills(&mut self, skills: Vec<Skill>) {
        self.skills = skills;
        self.refilter();
        self.pager = self.pager.resized(self.filtered.len());
    }

    pub fn pager(&self) -> &CarouselState {
        &self.pager
    }

    pub fn navigate(&mut self, nav: Nav) -> bool {
        match self.pager.navigate(nav) {
            Some(next) => {
                self.pager = next;
                true
            }
            None => false,
        }
    }

    pub fn filtered(&self) -> impl Iterator<Item = &Skill> {
        self.filtered.iter().map(|&i| &self.skills[i])
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Skills on the current page.
    pub fn visible(&self) -> Vec<&Skill> {
        self.filtered[self.pager.visible_range()]
            .iter()
            .map(|&i| &self.skills[i])
            .collect()
    }

    /// Pager controls only appear when the filtered list spans more than
    /// one page.
    pub fn pager_visible(&self) -> bool {
        self.pager.navigation_enabled()
    }

    pub fn page_label(&self) -> String {
        format!("Page {} / {}", self.pager.page() + 1, self.pager.page_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SkillLevel;

    fn skill(name: &str, category: SkillCategory) -> Skill {
        Skill {
            name: name.into(),
            category,
            level: SkillLevel::Advanced,
            ..Skill::default()
        }
    }

    fn catalog() -> Vec<Skill> {
        let mut skills = Vec::new();
        for name in ["Golang", "Node.js", "NestJS", "Rust"] {
            skills.push(skill(name, SkillCategory::Backend));
        }
        for name in ["React", "Next.js", "TypeScript", "Tailwind CSS"] {
            skills.push(skill(name, SkillCategory::Frontend));
        }
        for name in ["Redis", "Docker", "PostgreSQL", "AWS"] {
            skills.push(skill(name, SkillCategory::Other));
        }
        skills
    }

    fn names(browser: &SkillBrowser) -> Vec<String> {
        browser.visible().iter().map(|s| s.name.to_string()).collect()
    }

    #[test]
    fn all_category_pages_through_twelve_skills() {
        let mut browser = SkillBrowser::new(catalog());
        assert!(browser.pager_visible());
        assert_eq!(browser.page_label(), "Page 1 / 2");
        assert_eq!(names(&browser)[0], "Golang");
        assert_eq!(browser.visible().len(), 6);

        assert!(browser.navigate(Nav::Next));
        assert_eq!(browser.page_label(), "Page 2 / 2");
        assert_eq!(names(&browser)[0], "Next.js");
        assert!(!browser.navigate(Nav::Next));
    }

    #[test]
    fn filter_change_resets_to_first_page() {
        let mut browser = SkillBrowser::new(catalog());
        browser.navigate(Nav::Next);
        assert!(browser.set_filter(CategoryFilter::Frontend));
        assert_eq!(browser.pager().active_start(), 0);
        assert_eq!(names(&browser), vec!["React", "Next.js", "TypeScript", "Tailwind CSS"]);
        assert!(!browser.pager_visible());
        assert_eq!(browser.page_label(), "Page 1 / 1");
    }

    #[test]
    fn reselecting_filter_keeps_page() {
        let mut browser = SkillBrowser::new(catalog());
        browser.navigate(Nav::Next);
        assert!(!browser.set_filter(CategoryFilter::All));
        assert_eq!(browser.pager().page(), 1);
    }

    #[test]
    fn refetch_with_fewer_skills_falls_back_to_last_page() {
        let mut browser = SkillBrowser::new(catalog());
        browser.navigate(Nav::Next);
        browser.replace_skills(catalog().into_iter().take(5).collect());
        assert_eq!(browser.pager().page(), 0);
        assert_eq!(browser.visible().len(), 5);
    }

    #[test]
    fn empty_category_shows_nothing() {
        let mut browser = SkillBrowser::new(vec![skill("Rust", SkillCategory::Backend)]);
        browser.set_filter(CategoryFilter::Other);
        assert!(browser.visible().is_empty());
        assert_eq!(browser.page_label(), "Page 1 / 1");
        assert!(!browser.navigate(Nav::Next));
    }

    #[test]
    fn tabs_cycle_in_order() {
        assert_eq!(CategoryFilter::All.cycled(), CategoryFilter::Backend);
        assert_eq!(CategoryFilter::Other.cycled(), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_index(3), Some(CategoryFilter::Other));
        assert_eq!(CategoryFilter::Frontend.index(), 2);
    }
}
