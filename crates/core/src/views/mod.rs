//! View transforms: state in, `Vec<RenderCommand>` out.
//!
//! Every view lays itself out from the viewport's origin (`x`, `y`) across
//! its `width`, so shells can stack sections vertically and ask
//! [`content_height`] how much room each one took.

pub mod career_journey;
pub mod overview;
pub mod skills;
pub mod testimonials;

use std::str::FromStr;

use folio_protocol::{HitTarget, Point, Rect, RenderCommand, TextAlign, ThemeToken};

pub use career_journey::render_career_journey;
pub use overview::render_overview;
pub use skills::render_skills;
pub use testimonials::render_testimonials;

pub(crate) const PAD: f64 = 16.0;
pub(crate) const HEADING_SIZE: f64 = 22.0;
pub(crate) const BODY_SIZE: f64 = 13.0;
pub(crate) const SMALL_SIZE: f64 = 12.0;
pub(crate) const LINE_GAP: f64 = 1.45;
pub(crate) const BUTTON_SIZE: f64 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Overview,
    Skills,
    CareerJourney,
    Testimonials,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Overview,
        Section::Skills,
        Section::CareerJourney,
        Section::Testimonials,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Skills => "skills",
            Section::CareerJourney => "career",
            Section::Testimonials => "testimonials",
        }
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "overview" | "about" => Ok(Section::Overview),
            "skills" => Ok(Section::Skills),
            "career" | "career-journey" | "journey" => Ok(Section::CareerJourney),
            "testimonials" | "testimony" => Ok(Section::Testimonials),
            other => Err(format!("unknown section: {other}")),
        }
    }
}

/// Topmost hit target under `point`. Later commands draw over earlier
/// ones, so the list is searched back to front.
pub fn hit_test(commands: &[RenderCommand], point: Point) -> Option<HitTarget> {
    commands
        .iter()
        .rev()
        .filter_map(RenderCommand::target)
        .find(|(rect, _)| rect.contains(point))
        .map(|(_, target)| target)
}

/// Lowest edge reached by any rect or text baseline, relative to `origin_y`.
pub fn content_height(commands: &[RenderCommand], origin_y: f64) -> f64 {
    commands
        .iter()
        .filter_map(|cmd| match cmd {
            RenderCommand::DrawRect { rect, .. } => Some(rect.bottom()),
            RenderCommand::DrawText {
                position,
                font_size,
                ..
            } => Some(position.y + font_size * 0.4),
            RenderCommand::DrawLine { from, to, .. } => Some(from.y.max(to.y)),
            _ => None,
        })
        .fold(0.0_f64, f64::max)
        .max(origin_y)
        - origin_y
        + PAD
}

/// Greedy word wrap for a column `width` pixels wide. Glyphs are assumed to
/// average 0.55em.
pub(crate) fn wrap(text: &str, width: f64, font_size: f64) -> Vec<String> {
    let max_chars = ((width / (font_size * 0.55)).floor() as usize).max(8);
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

pub(crate) fn line_height(font_size: f64) -> f64 {
    font_size * LINE_GAP
}

/// Push wrapped text and return the y just below the last line.
pub(crate) fn push_paragraph(
    commands: &mut Vec<RenderCommand>,
    text: &str,
    x: f64,
    y: f64,
    width: f64,
    color: ThemeToken,
    font_size: f64,
) -> f64 {
    let mut baseline = y + font_size;
    for line in wrap(text, width, font_size) {
        commands.push(RenderCommand::text(Point::new(x, baseline), line, color, font_size));
        baseline += line_height(font_size);
    }
    baseline - font_size + 4.0
}

pub(crate) fn push_heading(commands: &mut Vec<RenderCommand>, text: &str, x: f64, y: f64) -> f64 {
    commands.push(RenderCommand::text(
        Point::new(x, y + HEADING_SIZE),
        text,
        ThemeToken::TextStrong,
        HEADING_SIZE,
    ));
    y + HEADING_SIZE + PAD
}

/// A square control button. Disabled buttons carry no hit target.
pub(crate) fn button(rect: Rect, glyph: &str, target: HitTarget, enabled: bool) -> RenderCommand {
    RenderCommand::DrawRect {
        rect,
        color: if enabled {
            ThemeToken::ControlEnabled
        } else {
            ThemeToken::ControlDisabled
        },
        border_color: None,
        label: Some(glyph.into()),
        target: enabled.then_some(target),
    }
}

pub(crate) fn centered_text(center_x: f64, y: f64, text: &str, color: ThemeToken, size: f64) -> RenderCommand {
    RenderCommand::DrawText {
        position: Point::new(center_x, y),
        text: text.into(),
        color,
        font_size: size,
        align: TextAlign::Center,
    }
}
