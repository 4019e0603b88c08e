use std::ops::Range;
use std::sync::{Mutex, MutexGuard, PoisonError};

use folio_core::carousel::{Carousel, Nav};
use folio_core::model::{CareerEntry, Portfolio, Testimonial};
use folio_core::parsers::{self, Content, ContentError};
use folio_core::rotator::Rotator;
use folio_core::skills::{CategoryFilter, SkillBrowser};
use folio_core::views::{self, Section};
use folio_protocol::{HitTarget, Point, RenderCommand, Viewport};
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;

static STATE: Mutex<Option<Sections>> = Mutex::new(None);

#[derive(Debug, Error)]
enum BridgeError {
    #[error("no content loaded")]
    NotLoaded,
    #[error("unknown {what}: {value}")]
    Unknown { what: &'static str, value: String },
    #[error("invalid index: {0}")]
    InvalidIndex(i32),
    #[error("{action} requires an index")]
    MissingIndex { action: &'static str },
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Per-section navigation state for the loaded snapshot.
struct Sections {
    portfolio: Portfolio,
    career: Carousel<CareerEntry>,
    skills: SkillBrowser,
    testimonials: Vec<Testimonial>,
    rotator: Rotator,
}

impl Sections {
    fn new(portfolio: Portfolio) -> Self {
        let testimonials = portfolio.approved_testimonials();
        Self {
            career: Carousel::career(portfolio.careers.clone()),
            skills: SkillBrowser::new(portfolio.skills.clone()),
            rotator: Rotator::new(testimonials.len()),
            testimonials,
            portfolio,
        }
    }

    /// Fold freshly loaded content in. A full snapshot rebuilds everything;
    /// a listing replaces its own section and leaves the others' navigation
    /// alone.
    fn apply(&mut self, content: Content) {
        match content {
            Content::Portfolio(snapshot) => *self = Self::new(*snapshot),
            Content::Careers(careers) => {
                self.career.replace_careers(careers.clone());
                self.portfolio.careers = careers;
            }
            Content::Skills(skills) => {
                self.skills.replace_skills(skills.clone());
                self.portfolio.skills = skills;
            }
            Content::Testimonials(testimonials) => {
                self.portfolio.testimonials = testimonials;
                self.testimonials = self.portfolio.approved_testimonials();
                self.rotator = self.rotator.resized(self.testimonials.len());
            }
            other => other.merge_into(&mut self.portfolio),
        }
    }

    fn render(&self, section: Section, viewport: &Viewport) -> Vec<RenderCommand> {
        match section {
            Section::Overview => views::render_overview(&self.portfolio, viewport),
            Section::Skills => views::render_skills(&self.skills, viewport),
            Section::CareerJourney => views::render_career_journey(&self.career, viewport),
            Section::Testimonials => {
                views::render_testimonials(&self.rotator, &self.testimonials, viewport)
            }
        }
    }
}

/// What the page needs to draw its own carousel chrome.
#[derive(Debug, Serialize)]
struct CareerSnapshot {
    len: usize,
    window: usize,
    start: usize,
    visible: Range<usize>,
    can_step_previous: bool,
    can_step_next: bool,
    navigation_enabled: bool,
    indicator: Vec<bool>,
}

fn state() -> MutexGuard<'static, Option<Sections>> {
    STATE.lock().unwrap_or_else(PoisonError::into_inner)
}

fn with_sections<R>(
    f: impl FnOnce(&mut Sections) -> Result<R, BridgeError>,
) -> Result<R, BridgeError> {
    let mut guard = state();
    let sections = guard.as_mut().ok_or(BridgeError::NotLoaded)?;
    f(sections)
}

fn load(data: &[u8]) -> Result<&'static str, BridgeError> {
    let content = parsers::parse_auto(data)?;
    let kind = content.kind();
    let mut guard = state();
    match guard.as_mut() {
        Some(sections) => sections.apply(content),
        None => *guard = Some(Sections::new(content.into_portfolio())),
    }
    tracing::debug!(kind, "content loaded");
    Ok(kind)
}

fn parse_nav(action: &str, index: Option<i32>) -> Result<Nav, BridgeError> {
    match action {
        "previous" | "prev" => Ok(Nav::Previous),
        "next" => Ok(Nav::Next),
        "goto" | "go-to" => index
            .map(|i| Nav::GoTo(i as isize))
            .ok_or(BridgeError::MissingIndex { action: "goto" }),
        "jump" | "jump-to" => {
            let index = index.ok_or(BridgeError::MissingIndex { action: "jump" })?;
            usize::try_from(index)
                .map(Nav::JumpTo)
                .map_err(|_| BridgeError::InvalidIndex(index))
        }
        other => Err(BridgeError::Unknown {
            what: "action",
            value: other.to_string(),
        }),
    }
}

fn parse_section(name: &str) -> Result<Section, BridgeError> {
    name.parse().map_err(|_| BridgeError::Unknown {
        what: "section",
        value: name.to_string(),
    })
}

fn parse_filter(name: &str) -> Result<CategoryFilter, BridgeError> {
    let filter = match name.to_ascii_lowercase().as_str() {
        "all" => Some(CategoryFilter::All),
        "backend" => Some(CategoryFilter::Backend),
        "frontend" => Some(CategoryFilter::Frontend),
        "other" | "other technologies" => Some(CategoryFilter::Other),
        digits => digits.parse().ok().and_then(CategoryFilter::from_index),
    };
    filter.ok_or_else(|| BridgeError::Unknown {
        what: "category",
        value: name.to_string(),
    })
}

fn career_snapshot(sections: &Sections) -> CareerSnapshot {
    let state = sections.career.state();
    CareerSnapshot {
        len: state.len(),
        window: state.window_size(),
        start: state.active_start(),
        visible: state.visible_range(),
        can_step_previous: state.can_step_previous(),
        can_step_next: state.can_step_next(),
        navigation_enabled: state.navigation_enabled(),
        indicator: state.indicator(),
    }
}

fn click(sections: &mut Sections, section: Section, target: HitTarget) -> bool {
    let rotated = match (section, target) {
        (Section::CareerJourney, HitTarget::StepPrevious) => {
            return sections.career.navigate(Nav::Previous);
        }
        (Section::CareerJourney, HitTarget::StepNext) => return sections.career.navigate(Nav::Next),
        (Section::CareerJourney, HitTarget::Dot(i)) => {
            return sections.career.navigate(Nav::JumpTo(i));
        }
        (Section::Skills, HitTarget::Tab(i)) => {
            return CategoryFilter::from_index(i).is_some_and(|f| sections.skills.set_filter(f));
        }
        (Section::Skills, HitTarget::StepPrevious) => return sections.skills.navigate(Nav::Previous),
        (Section::Skills, HitTarget::StepNext) => return sections.skills.navigate(Nav::Next),
        (Section::Testimonials, HitTarget::StepPrevious) => sections.rotator.previous(),
        (Section::Testimonials, HitTarget::StepNext) => sections.rotator.next(),
        (Section::Testimonials, HitTarget::Dot(i)) => sections.rotator.select(i),
        _ => return false,
    };
    rotate(sections, rotated)
}

fn rotate(sections: &mut Sections, next: Rotator) -> bool {
    let changed = next != sections.rotator;
    sections.rotator = next;
    changed
}

/// Parse a snapshot or a single listing and fold it into the loaded
/// content. Returns the detected content kind.
#[wasm_bindgen]
pub fn load_portfolio(data: &[u8]) -> Result<String, JsError> {
    Ok(load(data)?.to_string())
}

/// Step the career carousel. `action` is `previous`, `next`, `goto` or
/// `jump`; the last two take `index`. Returns whether the window moved.
#[wasm_bindgen]
pub fn career_navigate(action: &str, index: Option<i32>) -> Result<bool, JsError> {
    let nav = parse_nav(action, index)?;
    Ok(with_sections(|s| Ok(s.career.navigate(nav)))?)
}

/// Career carousel state as JSON.
#[wasm_bindgen]
pub fn career_state() -> Result<String, JsError> {
    Ok(with_sections(|s| Ok(serde_json::to_string(&career_snapshot(s))?))?)
}

/// Render a section, returning render commands as JSON.
#[wasm_bindgen]
pub fn render_section(name: &str, width: f64, height: f64) -> Result<String, JsError> {
    let section = parse_section(name)?;
    let viewport = Viewport::sized(width, height);
    Ok(with_sections(|s| Ok(serde_json::to_string(&s.render(section, &viewport))?))?)
}

/// Route a click at `(x, y)` inside a section rendered at `width`.
/// Returns whether any state changed.
#[wasm_bindgen]
pub fn section_click(name: &str, width: f64, x: f64, y: f64) -> Result<bool, JsError> {
    let section = parse_section(name)?;
    let viewport = Viewport::sized(width, f64::INFINITY);
    Ok(with_sections(|s| {
        let commands = s.render(section, &viewport);
        Ok(views::hit_test(&commands, Point::new(x, y))
            .is_some_and(|target| click(s, section, target)))
    })?)
}

/// Select a skills category tab by name or tab index. Returns whether the
/// filter changed.
#[wasm_bindgen]
pub fn skills_set_filter(name: &str) -> Result<bool, JsError> {
    let filter = parse_filter(name)?;
    Ok(with_sections(|s| Ok(s.skills.set_filter(filter)))?)
}

/// Page the skills grid. `direction` is `previous` or `next`.
#[wasm_bindgen]
pub fn skills_page(direction: &str) -> Result<String, JsError> {
    let nav = parse_nav(direction, None)?;
    Ok(with_sections(|s| {
        s.skills.navigate(nav);
        Ok(s.skills.page_label())
    })?)
}

/// Rotate the testimonial card. `direction` is `previous`, `next` or
/// `jump` with an index. Returns the current index.
#[wasm_bindgen]
pub fn testimonial_rotate(direction: &str, index: Option<i32>) -> Result<usize, JsError> {
    let nav = parse_nav(direction, index)?;
    Ok(with_sections(|s| {
        s.rotator = match nav {
            Nav::Previous => s.rotator.previous(),
            Nav::Next => s.rotator.next(),
            Nav::GoTo(i) => s.rotator.select(usize::try_from(i).unwrap_or(0)),
            Nav::JumpTo(i) => s.rotator.select(i),
        };
        Ok(s.rotator.current())
    })?)
}
