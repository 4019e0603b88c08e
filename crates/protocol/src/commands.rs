use serde::{Deserialize, Serialize};

use crate::shared_str::SharedStr;
use crate::theme::ThemeToken;
use crate::types::{Point, Rect};

/// What a clickable rectangle stands for.
///
/// Indices are positions in the list the emitting view was rendering
/// (sorted career entries, filtered skills, category tabs, testimonials).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HitTarget {
    StepPrevious,
    StepNext,
    /// A position-indicator dot.
    Dot(usize),
    Card(usize),
    Tab(usize),
}

/// A single, stateless render instruction.
///
/// The core emits a `Vec<RenderCommand>` for each section. Renderers consume
/// this list sequentially; each command carries all the data it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Draw a filled rectangle, optionally with a text label and a hit
    /// target (for click routing).
    DrawRect {
        rect: Rect,
        color: ThemeToken,
        border_color: Option<ThemeToken>,
        label: Option<SharedStr>,
        target: Option<HitTarget>,
    },

    /// Draw a text string at a position.
    DrawText {
        position: Point,
        text: SharedStr,
        color: ThemeToken,
        font_size: f64,
        align: TextAlign,
    },

    /// Draw a line segment.
    DrawLine {
        from: Point,
        to: Point,
        color: ThemeToken,
        width: f64,
    },

    /// Restrict subsequent drawing to a rectangular region.
    SetClip { rect: Rect },

    /// Remove the active clip region.
    ClearClip,

    /// Push an affine transform (applied to all subsequent commands until
    /// the matching `PopTransform`).
    PushTransform { translate: Point, scale: Point },

    /// Pop the most recent transform.
    PopTransform,

    /// Begin a logical group (a section or a card).
    BeginGroup {
        id: SharedStr,
        label: Option<SharedStr>,
    },

    /// End the current group.
    EndGroup,
}

impl RenderCommand {
    pub fn fill(rect: Rect, color: ThemeToken) -> Self {
        RenderCommand::DrawRect {
            rect,
            color,
            border_color: None,
            label: None,
            target: None,
        }
    }

    pub fn text(position: Point, text: impl Into<SharedStr>, color: ThemeToken, font_size: f64) -> Self {
        RenderCommand::DrawText {
            position,
            text: text.into(),
            color,
            font_size,
            align: TextAlign::Left,
        }
    }

    /// The hit target of a `DrawRect`, if any.
    pub fn target(&self) -> Option<(Rect, HitTarget)> {
        match self {
            RenderCommand::DrawRect {
                rect,
                target: Some(target),
                ..
            } => Some((*rect, *target)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_target_serializes_with_index() {
        let json = serde_json::to_string(&HitTarget::Dot(3)).unwrap_or_default();
        assert_eq!(json, r#"{"Dot":3}"#);
        let json = serde_json::to_string(&HitTarget::StepNext).unwrap_or_default();
        assert_eq!(json, r#""StepNext""#);
    }

    #[test]
    fn only_targeted_rects_report_targets() {
        let plain = RenderCommand::fill(Rect::new(0.0, 0.0, 1.0, 1.0), ThemeToken::Surface);
        assert!(plain.target().is_none());

        let button = RenderCommand::DrawRect {
            rect: Rect::new(0.0, 0.0, 40.0, 40.0),
            color: ThemeToken::ControlEnabled,
            border_color: None,
            label: None,
            target: Some(HitTarget::StepPrevious),
        };
        assert_eq!(
            button.target().map(|(_, t)| t),
            Some(HitTarget::StepPrevious)
        );
    }
}
