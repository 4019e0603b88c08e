use folio_protocol::{HitTarget, Point, Rect, RenderCommand, ThemeToken, Viewport};

use super::{
    BODY_SIZE, BUTTON_SIZE, PAD, SMALL_SIZE, button, line_height, push_heading, push_paragraph,
    wrap,
};
use crate::carousel::{
    Carousel, LIST_HEIGHT_PADDING, MarkLayout, highlight_span, window_extent,
};
use crate::format::date_range;
use crate::model::CareerEntry;

const TITLE_SIZE: f64 = 16.0;
const CARD_PAD: f64 = 12.0;
const CARD_GAP: f64 = 24.0;
const DOT_SIZE: f64 = 10.0;
const DOT_SPACING: f64 = 22.0;
const BAND_WIDTH: f64 = 18.0;

/// Render the career journey: a clipped list showing the current window of
/// cards, and beside it the indicator rail with step buttons.
///
/// The rail is left out entirely when every entry already fits.
pub fn render_career_journey(
    carousel: &Carousel<CareerEntry>,
    viewport: &Viewport,
) -> Vec<RenderCommand> {
    let state = carousel.state();
    let mut commands = Vec::with_capacity(carousel.visible().len() * 8 + state.len() + 8);

    commands.push(RenderCommand::BeginGroup {
        id: "career-journey".into(),
        label: Some("Career Journey".into()),
    });

    let left = viewport.x + PAD;
    let top = push_heading(&mut commands, "Career Journey", left, viewport.y + PAD);

    if state.is_empty() {
        commands.push(RenderCommand::text(
            Point::new(left, top + BODY_SIZE),
            "No career entries yet.",
            ThemeToken::TextMuted,
            BODY_SIZE,
        ));
        commands.push(RenderCommand::EndGroup);
        return commands;
    }

    let rail_width = if state.navigation_enabled() {
        BUTTON_SIZE + PAD
    } else {
        0.0
    };
    let card_width = (viewport.width - 2.0 * PAD - rail_width).max(120.0);

    let cards = layout_cards(carousel.items(), card_width);
    let list_height =
        window_extent(&cards, state.window_size()).unwrap_or(0.0) + LIST_HEIGHT_PADDING;
    let scroll = cards
        .get(state.active_start())
        .map_or(0.0, |card| card.top);

    let list = Rect::new(left, top, card_width, list_height);
    commands.push(RenderCommand::SetClip { rect: list });
    for index in state.visible_range() {
        let (Some(entry), Some(layout)) = (carousel.items().get(index), cards.get(index)) else {
            continue;
        };
        let rect = Rect::new(left, top + layout.top - scroll, card_width, layout.height);
        push_card(&mut commands, index, entry, rect);
    }
    commands.push(RenderCommand::ClearClip);

    if state.navigation_enabled() {
        let rail_x = list.right() + PAD;
        push_rail(&mut commands, carousel, rail_x, top, list_height);
    }

    commands.push(RenderCommand::EndGroup);
    commands
}

/// Stacked card placements for every entry, relative to the list top.
fn layout_cards(entries: &[CareerEntry], card_width: f64) -> Vec<MarkLayout> {
    let text_width = card_width - 2.0 * CARD_PAD;
    let mut y = 0.0;
    entries
        .iter()
        .map(|entry| {
            let description_lines = wrap(&entry.description, text_width, BODY_SIZE).len();
            let height = CARD_PAD
                + line_height(SMALL_SIZE)
                + line_height(TITLE_SIZE)
                + line_height(BODY_SIZE)
                + description_lines as f64 * line_height(BODY_SIZE)
                + CARD_PAD;
            let layout = MarkLayout { top: y, height };
            y += height + CARD_GAP;
            layout
        })
        .collect()
}

fn push_card(commands: &mut Vec<RenderCommand>, index: usize, entry: &CareerEntry, rect: Rect) {
    commands.push(RenderCommand::BeginGroup {
        id: format!("career-{index}").into(),
        label: Some(entry.title.clone()),
    });
    commands.push(RenderCommand::DrawRect {
        rect,
        color: ThemeToken::SurfaceRaised,
        border_color: Some(ThemeToken::Border),
        label: None,
        target: Some(HitTarget::Card(index)),
    });

    let x = rect.x + CARD_PAD;
    let mut y = rect.y + CARD_PAD + SMALL_SIZE;
    commands.push(RenderCommand::text(
        Point::new(x, y),
        date_range(entry),
        ThemeToken::TextMuted,
        SMALL_SIZE,
    ));
    y += line_height(TITLE_SIZE);
    commands.push(RenderCommand::text(
        Point::new(x, y),
        entry.title.clone(),
        ThemeToken::TextStrong,
        TITLE_SIZE,
    ));
    y += line_height(BODY_SIZE);
    let place = [entry.affiliation.as_str(), entry.location.as_str()]
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" · ");
    commands.push(RenderCommand::text(
        Point::new(x, y),
        place,
        ThemeToken::TextNormal,
        BODY_SIZE,
    ));
    push_paragraph(
        commands,
        &entry.description,
        x,
        y + line_height(BODY_SIZE) - BODY_SIZE,
        rect.w - 2.0 * CARD_PAD,
        ThemeToken::TextMuted,
        BODY_SIZE,
    );
    commands.push(RenderCommand::EndGroup);
}

fn push_rail(
    commands: &mut Vec<RenderCommand>,
    carousel: &Carousel<CareerEntry>,
    x: f64,
    top: f64,
    height: f64,
) {
    let state = carousel.state();
    let center_x = x + BUTTON_SIZE / 2.0;

    commands.push(button(
        Rect::new(x, top, BUTTON_SIZE, BUTTON_SIZE),
        "▲",
        HitTarget::StepPrevious,
        state.can_step_previous(),
    ));

    let dots_top = top + BUTTON_SIZE + PAD;
    let marks: Vec<MarkLayout> = (0..state.len())
        .map(|i| MarkLayout {
            top: i as f64 * DOT_SPACING,
            height: DOT_SIZE,
        })
        .collect();

    if let (Some(first), Some(last)) = (marks.first(), marks.last()) {
        commands.push(RenderCommand::DrawLine {
            from: Point::new(center_x, dots_top + first.top),
            to: Point::new(center_x, dots_top + last.bottom()),
            color: ThemeToken::Border,
            width: 2.0,
        });
    }
    if let Some(span) = highlight_span(state, &marks) {
        commands.push(RenderCommand::fill(
            Rect::new(center_x - BAND_WIDTH / 2.0, dots_top + span.top, BAND_WIDTH, span.height),
            ThemeToken::HighlightBand,
        ));
    }
    for (i, mark) in marks.iter().enumerate() {
        commands.push(RenderCommand::DrawRect {
            rect: Rect::new(center_x - DOT_SIZE / 2.0, dots_top + mark.top, DOT_SIZE, DOT_SIZE),
            color: if state.in_window(i) {
                ThemeToken::DotInWindow
            } else {
                ThemeToken::DotOutOfWindow
            },
            border_color: None,
            label: None,
            target: Some(HitTarget::Dot(i)),
        });
    }

    // The rail grows with the dot count; keep the down button below both.
    let dots_bottom = marks.last().map_or(dots_top, |m| dots_top + m.bottom());
    let down_y = (top + height - BUTTON_SIZE).max(dots_bottom + PAD);
    commands.push(button(
        Rect::new(x, down_y, BUTTON_SIZE, BUTTON_SIZE),
        "▼",
        HitTarget::StepNext,
        state.can_step_next(),
    ));
}
