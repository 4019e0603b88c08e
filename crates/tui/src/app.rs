use crossterm::event::KeyCode;
use folio_core::carousel::{Carousel, Nav};
use folio_core::model::{CareerEntry, Portfolio, Testimonial};
use folio_core::rotator::Rotator;
use folio_core::skills::{CategoryFilter, SkillBrowser};
use folio_core::views::{self, Section};
use folio_protocol::{HitTarget, RenderCommand, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Career,
    Skills,
    Testimonials,
}

impl Pane {
    const ORDER: [Pane; 3] = [Pane::Career, Pane::Skills, Pane::Testimonials];

    pub fn title(self) -> &'static str {
        match self {
            Pane::Career => "Career Journey",
            Pane::Skills => "Technical Skills",
            Pane::Testimonials => "Testimonials",
        }
    }

    fn section(self) -> Section {
        match self {
            Pane::Career => Section::CareerJourney,
            Pane::Skills => Section::Skills,
            Pane::Testimonials => Section::Testimonials,
        }
    }

    fn shifted(self, by: usize) -> Self {
        let i = Self::ORDER.iter().position(|p| *p == self).unwrap_or(0);
        Self::ORDER[(i + by) % Self::ORDER.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Everything the terminal browser shows, plus which pane has focus.
pub struct App {
    pub name: String,
    pub career: Carousel<CareerEntry>,
    pub skills: SkillBrowser,
    pub testimonials: Vec<Testimonial>,
    pub rotator: Rotator,
    pub focus: Pane,
}

impl App {
    pub fn new(portfolio: Portfolio) -> Self {
        let testimonials = portfolio.approved_testimonials();
        let name = portfolio
            .hero
            .as_ref()
            .map(|h| h.name.to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "folio".to_string());
        Self {
            name,
            career: Carousel::career(portfolio.careers),
            skills: SkillBrowser::new(portfolio.skills),
            rotator: Rotator::new(testimonials.len()),
            testimonials,
            focus: Pane::Career,
        }
    }

    pub fn render(&self, pane: Pane, viewport: &Viewport) -> Vec<RenderCommand> {
        match pane.section() {
            Section::Skills => views::render_skills(&self.skills, viewport),
            Section::Testimonials => {
                views::render_testimonials(&self.rotator, &self.testimonials, viewport)
            }
            _ => views::render_career_journey(&self.career, viewport),
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Flow {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Tab => self.focus = self.focus.shifted(1),
            KeyCode::BackTab => self.focus = self.focus.shifted(Pane::ORDER.len() - 1),
            _ => match self.focus {
                Pane::Career => self.career_key(code),
                Pane::Skills => self.skills_key(code),
                Pane::Testimonials => self.testimonial_key(code),
            },
        }
        Flow::Continue
    }

    fn career_key(&mut self, code: KeyCode) {
        let nav = match code {
            KeyCode::Up | KeyCode::Char('k') => Nav::Previous,
            KeyCode::Down | KeyCode::Char('j') => Nav::Next,
            KeyCode::Home => Nav::GoTo(0),
            KeyCode::End => Nav::GoTo(isize::MAX),
            KeyCode::Char(c) => match digit_index(c) {
                Some(i) => Nav::JumpTo(i),
                None => return,
            },
            _ => return,
        };
        if self.career.navigate(nav) {
            tracing::debug!(?nav, start = self.career.state().active_start(), "career moved");
        }
    }

    fn skills_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Up => {
                self.skills.navigate(Nav::Previous);
            }
            KeyCode::Right | KeyCode::Down => {
                self.skills.navigate(Nav::Next);
            }
            KeyCode::Char('c') => {
                self.skills.set_filter(self.skills.filter().cycled());
            }
            KeyCode::Char(c) => {
                if let Some(filter) = digit_index(c).and_then(CategoryFilter::from_index) {
                    self.skills.set_filter(filter);
                }
            }
            _ => {}
        }
    }

    fn testimonial_key(&mut self, code: KeyCode) {
        self.rotator = match code {
            KeyCode::Left | KeyCode::Up => self.rotator.previous(),
            KeyCode::Right | KeyCode::Down => self.rotator.next(),
            KeyCode::Char(c) => match digit_index(c) {
                Some(i) => self.rotator.select(i),
                None => return,
            },
            _ => return,
        };
    }

    /// Route a click on a pane's hit target back into that pane's state.
    pub fn click(&mut self, pane: Pane, target: HitTarget) {
        self.focus = pane;
        match (pane, target) {
            (Pane::Career, HitTarget::StepPrevious) => {
                self.career.navigate(Nav::Previous);
            }
            (Pane::Career, HitTarget::StepNext) => {
                self.career.navigate(Nav::Next);
            }
            (Pane::Career, HitTarget::Dot(i)) => {
                self.career.navigate(Nav::JumpTo(i));
            }
            (Pane::Skills, HitTarget::Tab(i)) => {
                if let Some(filter) = CategoryFilter::from_index(i) {
                    self.skills.set_filter(filter);
                }
            }
            (Pane::Skills, HitTarget::StepPrevious) => {
                self.skills.navigate(Nav::Previous);
            }
            (Pane::Skills, HitTarget::StepNext) => {
                self.skills.navigate(Nav::Next);
            }
            (Pane::Testimonials, HitTarget::StepPrevious) => self.rotator = self.rotator.previous(),
            (Pane::Testimonials, HitTarget::StepNext) => self.rotator = self.rotator.next(),
            (Pane::Testimonials, HitTarget::Dot(i)) => self.rotator = self.rotator.select(i),
            _ => {}
        }
    }

    pub fn status_line(&self) -> String {
        let state = self.career.state();
        format!(
            " {} | career {}-{} of {} | skills: {} {} | Tab focus  ↑↓ step  1-9 jump  ←→ page  c category  q quit ",
            self.name,
            state.visible_range().start + usize::from(!state.is_empty()),
            state.visible_range().end,
            state.len(),
            self.skills.filter().label(),
            self.skills.page_label(),
        )
    }
}

/// `'1'..='9'` as a zero-based index.
fn digit_index(c: char) -> Option<usize> {
    let digit = c.to_digit(10)?;
    (1..=9).contains(&digit).then(|| digit as usize - 1)
}
