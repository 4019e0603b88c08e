use folio_protocol::{HitTarget, Point, Rect, RenderCommand, ThemeToken, Viewport};

use super::{BODY_SIZE, BUTTON_SIZE, PAD, button, line_height, push_heading, push_paragraph};
use crate::format::rating_stars;
use crate::model::Testimonial;
use crate::rotator::Rotator;

const STAR_SIZE: f64 = 18.0;
const NAME_SIZE: f64 = 15.0;
const CARD_PAD: f64 = 16.0;
const DOT_SIZE: f64 = 8.0;
const DOT_GAP: f64 = 10.0;

/// One testimonial at a time with wrap-around arrows and a dot per entry.
pub fn render_testimonials(
    rotator: &Rotator,
    testimonials: &[Testimonial],
    viewport: &Viewport,
) -> Vec<RenderCommand> {
    let mut commands = Vec::with_capacity(16 + testimonials.len());
    commands.push(RenderCommand::BeginGroup {
        id: "testimonials".into(),
        label: Some("Testimonials".into()),
    });

    let left = viewport.x + PAD;
    let width = viewport.width - 2.0 * PAD;
    let top = push_heading(&mut commands, "Testimonials", left, viewport.y + PAD);

    let Some(current) = testimonials.get(rotator.current()) else {
        commands.push(RenderCommand::text(
            Point::new(left, top + BODY_SIZE),
            "No testimonials yet.",
            ThemeToken::TextMuted,
            BODY_SIZE,
        ));
        commands.push(RenderCommand::EndGroup);
        return commands;
    };

    // Body first so the card can be sized to it; the card rect is inserted
    // underneath afterwards.
    let card_index = commands.len();
    let x = left + CARD_PAD;
    let mut y = top + CARD_PAD + STAR_SIZE;
    commands.push(RenderCommand::text(
        Point::new(x, y),
        rating_stars(current.rating),
        ThemeToken::RatingStar,
        STAR_SIZE,
    ));
    y = push_paragraph(
        &mut commands,
        &format!("“{}”", current.description),
        x,
        y + PAD / 2.0,
        width - 2.0 * CARD_PAD,
        ThemeToken::TextNormal,
        BODY_SIZE,
    );
    y += NAME_SIZE + PAD / 2.0;
    commands.push(RenderCommand::text(
        Point::new(x, y),
        current.name.clone(),
        ThemeToken::TextStrong,
        NAME_SIZE,
    ));
    if !current.affiliation.is_empty() {
        y += line_height(BODY_SIZE);
        commands.push(RenderCommand::text(
            Point::new(x, y),
            current.affiliation.clone(),
            ThemeToken::TextMuted,
            BODY_SIZE,
        ));
    }
    let card = Rect::new(left, top, width, y - top + CARD_PAD);
    commands.insert(
        card_index,
        RenderCommand::DrawRect {
            rect: card,
            color: ThemeToken::SurfaceRaised,
            border_color: Some(ThemeToken::Border),
            label: None,
            target: Some(HitTarget::Card(rotator.current())),
        },
    );

    let cycling = testimonials.len() > 1;
    let row_y = card.bottom() + PAD;
    commands.push(button(
        Rect::new(left, row_y, BUTTON_SIZE, BUTTON_SIZE),
        "‹",
        HitTarget::StepPrevious,
        cycling,
    ));
    let dots_width = testimonials.len() as f64 * (DOT_SIZE + DOT_GAP) - DOT_GAP;
    let mut dot_x = left + (width - dots_width) / 2.0;
    let dot_y = row_y + (BUTTON_SIZE - DOT_SIZE) / 2.0;
    for i in 0..testimonials.len() {
        commands.push(RenderCommand::DrawRect {
            rect: Rect::new(dot_x, dot_y, DOT_SIZE, DOT_SIZE),
            color: if i == rotator.current() {
                ThemeToken::DotInWindow
            } else {
                ThemeToken::DotOutOfWindow
            },
            border_color: None,
            label: None,
            target: Some(HitTarget::Dot(i)),
        });
        dot_x += DOT_SIZE + DOT_GAP;
    }
    commands.push(button(
        Rect::new(left + width - BUTTON_SIZE, row_y, BUTTON_SIZE, BUTTON_SIZE),
        "›",
        HitTarget::StepNext,
        cycling,
    ));

    commands.push(RenderCommand::EndGroup);
    commands
}
