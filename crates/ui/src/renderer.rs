use egui::{Align2, CornerRadius, FontId, Pos2, Rect, Stroke, StrokeKind};
use folio_protocol::{HitTarget, RenderCommand, TextAlign};

use crate::theme::{self, ThemeMode};

/// Transform state for PushTransform/PopTransform.
#[derive(Debug, Clone, Copy)]
struct Transform {
    tx: f64,
    ty: f64,
    sx: f64,
    sy: f64,
}

impl Transform {
    fn identity() -> Self {
        Self {
            tx: 0.0,
            ty: 0.0,
            sx: 1.0,
            sy: 1.0,
        }
    }

    fn apply(&self, x: f64, y: f64, offset: Pos2) -> Pos2 {
        Pos2::new(
            (x * self.sx + self.tx) as f32 + offset.x,
            (y * self.sy + self.ty) as f32 + offset.y,
        )
    }

    fn rect(&self, rect: &folio_protocol::Rect, offset: Pos2) -> Rect {
        Rect::from_min_size(
            self.apply(rect.x, rect.y, offset),
            egui::vec2((rect.w * self.sx) as f32, (rect.h * self.sy) as f32),
        )
    }
}

/// A painted rect that stands for something clickable.
pub struct HitRegion {
    pub rect: Rect,
    pub target: HitTarget,
}

/// Result of rendering a command list: includes hit regions for interaction.
pub struct RenderResult {
    pub hit_regions: Vec<HitRegion>,
}

impl RenderResult {
    /// Topmost region under `pos`.
    pub fn hit(&self, pos: Pos2) -> Option<HitTarget> {
        self.hit_regions
            .iter()
            .rev()
            .find(|region| region.rect.contains(pos))
            .map(|region| region.target)
    }
}

/// Render a list of `RenderCommand` into an egui `Painter`.
///
/// `offset` is the top-left pixel position of the rendering area.
pub fn render_commands(
    painter: &mut egui::Painter,
    commands: &[RenderCommand],
    offset: Pos2,
    mode: ThemeMode,
) -> RenderResult {
    let mut transform_stack: Vec<Transform> = vec![Transform::identity()];
    let mut clip_stack: Vec<Rect> = Vec::new();
    let mut hit_regions: Vec<HitRegion> = Vec::new();

    for cmd in commands {
        let tf = transform_stack
            .last()
            .copied()
            .unwrap_or(Transform::identity());
        match cmd {
            RenderCommand::DrawRect {
                rect,
                color,
                border_color,
                label,
                target,
            } => {
                let egui_rect = tf.rect(rect, offset);
                if egui_rect.width() < 0.5 || egui_rect.height() < 0.5 {
                    continue;
                }
                if !painter.clip_rect().intersects(egui_rect) {
                    continue;
                }

                let radius = CornerRadius::same(4);
                painter.rect_filled(egui_rect, radius, theme::resolve(*color, mode));
                if let Some(bc) = border_color {
                    painter.rect_stroke(
                        egui_rect,
                        radius,
                        Stroke::new(1.0, theme::resolve(*bc, mode)),
                        StrokeKind::Inside,
                    );
                }

                // Labelled rects are buttons, tabs and badges.
                if let Some(label) = label.as_deref().filter(|l| !l.is_empty()) {
                    let font_size = (egui_rect.height() * 0.45).clamp(8.0, 14.0);
                    painter.text(
                        egui_rect.center(),
                        Align2::CENTER_CENTER,
                        label,
                        FontId::proportional(font_size),
                        theme::resolve(folio_core::svg::label_token(*color), mode),
                    );
                }

                if let Some(target) = target {
                    hit_regions.push(HitRegion {
                        rect: egui_rect.intersect(painter.clip_rect()),
                        target: *target,
                    });
                }
            }

            RenderCommand::DrawText {
                position,
                text,
                color,
                font_size,
                align,
            } => {
                let size = *font_size as f32;
                if size < 1.0 {
                    continue;
                }
                // Positions are baselines.
                let anchor = match align {
                    TextAlign::Left => Align2::LEFT_BOTTOM,
                    TextAlign::Center => Align2::CENTER_BOTTOM,
                    TextAlign::Right => Align2::RIGHT_BOTTOM,
                };
                painter.text(
                    tf.apply(position.x, position.y, offset) + egui::vec2(0.0, size * 0.25),
                    anchor,
                    text.as_str(),
                    FontId::proportional(size),
                    theme::resolve(*color, mode),
                );
            }

            RenderCommand::DrawLine {
                from,
                to,
                color,
                width,
            } => {
                painter.line_segment(
                    [tf.apply(from.x, from.y, offset), tf.apply(to.x, to.y, offset)],
                    Stroke::new(*width as f32, theme::resolve(*color, mode)),
                );
            }

            RenderCommand::SetClip { rect } => {
                clip_stack.push(painter.clip_rect());
                let intersected = painter.clip_rect().intersect(tf.rect(rect, offset));
                painter.set_clip_rect(intersected);
            }

            RenderCommand::ClearClip => {
                if let Some(prev) = clip_stack.pop() {
                    painter.set_clip_rect(prev);
                }
            }

            RenderCommand::PushTransform { translate, scale } => {
                let parent = tf;
                transform_stack.push(Transform {
                    tx: parent.tx + translate.x * parent.sx,
                    ty: parent.ty + translate.y * parent.sy,
                    sx: parent.sx * scale.x,
                    sy: parent.sy * scale.y,
                });
            }

            RenderCommand::PopTransform => {
                if transform_stack.len() > 1 {
                    transform_stack.pop();
                }
            }

            RenderCommand::BeginGroup { .. } | RenderCommand::EndGroup => {}
        }
    }

    RenderResult { hit_regions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_protocol::{Point, ThemeToken};

    fn painter(ctx: &egui::Context) -> egui::Painter {
        egui::Painter::new(
            ctx.clone(),
            egui::LayerId::background(),
            Rect::from_min_size(Pos2::ZERO, egui::vec2(800.0, 600.0)),
        )
    }

    fn target_rect(x: f64, target: HitTarget) -> RenderCommand {
        RenderCommand::DrawRect {
            rect: folio_protocol::Rect::new(x, 10.0, 20.0, 20.0),
            color: ThemeToken::ControlEnabled,
            border_color: None,
            label: Some("›".into()),
            target: Some(target),
        }
    }

    #[test]
    fn hit_regions_are_offset_and_clipped() {
        let ctx = egui::Context::default();
        let commands = vec![
            target_rect(0.0, HitTarget::StepPrevious),
            RenderCommand::SetClip {
                rect: folio_protocol::Rect::new(0.0, 0.0, 50.0, 100.0),
            },
            target_rect(40.0, HitTarget::StepNext),
            RenderCommand::ClearClip,
            RenderCommand::text(Point::new(0.0, 50.0), "hello", ThemeToken::TextNormal, 13.0),
        ];

        let mut regions = None;
        let mut clip_after = 0.0;
        // Text layout needs the fonts a frame sets up.
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            let mut painter = painter(ctx);
            regions = Some(render_commands(
                &mut painter,
                &commands,
                Pos2::new(100.0, 0.0),
                ThemeMode::Dark,
            ));
            clip_after = painter.clip_rect().width();
        });

        let Some(result) = regions else {
            panic!("frame did not run");
        };
        assert_eq!(result.hit_regions.len(), 2);
        assert_eq!(result.hit(Pos2::new(105.0, 15.0)), Some(HitTarget::StepPrevious));
        assert_eq!(result.hit(Pos2::new(145.0, 15.0)), Some(HitTarget::StepNext));
        // Clipped away at x = 150.
        assert_eq!(result.hit(Pos2::new(155.0, 15.0)), None);
        assert_eq!(clip_after, 800.0);
    }
}
