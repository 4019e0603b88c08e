use folio_protocol::{HitTarget, Point, Rect, RenderCommand, SharedStr, ThemeToken, Viewport};

use super::{
    BODY_SIZE, BUTTON_SIZE, PAD, SMALL_SIZE, button, centered_text, line_height, push_heading,
    wrap,
};
use crate::format::skill_level_token;
use crate::model::Skill;
use crate::skills::{CategoryFilter, SkillBrowser};

const TAB_HEIGHT: f64 = 32.0;
const TAB_GAP: f64 = 8.0;
const NAME_SIZE: f64 = 16.0;
const CARD_PAD: f64 = 12.0;
const CARD_GAP: f64 = 12.0;
const BADGE_WIDTH: f64 = 96.0;
const BADGE_HEIGHT: f64 = 20.0;
const DESCRIPTION_LINES: usize = 2;
/// Below this width the grid collapses to a single column.
const TWO_COLUMN_MIN_WIDTH: f64 = 560.0;

/// Render the skills browser: category tabs, the current page of cards and
/// the pager row.
pub fn render_skills(browser: &SkillBrowser, viewport: &Viewport) -> Vec<RenderCommand> {
    let mut commands = Vec::with_capacity(64);
    commands.push(RenderCommand::BeginGroup {
        id: "skills".into(),
        label: Some("Technical Skills".into()),
    });

    let left = viewport.x + PAD;
    let inner_width = viewport.width - 2.0 * PAD;
    let mut y = push_heading(&mut commands, "Technical Skills", left, viewport.y + PAD);

    let tab_width = (inner_width - TAB_GAP * (CategoryFilter::ALL.len() - 1) as f64)
        / CategoryFilter::ALL.len() as f64;
    for (i, filter) in CategoryFilter::ALL.iter().enumerate() {
        let active = *filter == browser.filter();
        commands.push(RenderCommand::DrawRect {
            rect: Rect::new(left + i as f64 * (tab_width + TAB_GAP), y, tab_width, TAB_HEIGHT),
            color: if active {
                ThemeToken::TabActive
            } else {
                ThemeToken::TabInactive
            },
            border_color: None,
            label: Some(filter.label().into()),
            target: Some(HitTarget::Tab(i)),
        });
    }
    y += TAB_HEIGHT + PAD;

    let visible = browser.visible();
    if visible.is_empty() {
        commands.push(RenderCommand::text(
            Point::new(left, y + BODY_SIZE),
            "No skills in this category yet.",
            ThemeToken::TextMuted,
            BODY_SIZE,
        ));
        commands.push(RenderCommand::EndGroup);
        return commands;
    }

    let columns = if viewport.width >= TWO_COLUMN_MIN_WIDTH { 2 } else { 1 };
    let card_width = (inner_width - CARD_GAP * (columns - 1) as f64) / columns as f64;
    let card_height = card_height();
    let first = browser.pager().active_start();

    for (k, skill) in visible.iter().enumerate() {
        let row = (k / columns) as f64;
        let col = (k % columns) as f64;
        let rect = Rect::new(
            left + col * (card_width + CARD_GAP),
            y + row * (card_height + CARD_GAP),
            card_width,
            card_height,
        );
        push_card(&mut commands, first + k, skill, rect);
    }
    let rows = visible.len().div_ceil(columns) as f64;
    y += rows * (card_height + CARD_GAP);

    if browser.pager_visible() {
        let pager = browser.pager();
        commands.push(button(
            Rect::new(left, y, BUTTON_SIZE, BUTTON_SIZE),
            "‹",
            HitTarget::StepPrevious,
            pager.can_step_previous(),
        ));
        commands.push(centered_text(
            left + inner_width / 2.0,
            y + BUTTON_SIZE / 2.0 + SMALL_SIZE * 0.35,
            &browser.page_label(),
            ThemeToken::TextMuted,
            SMALL_SIZE,
        ));
        commands.push(button(
            Rect::new(left + inner_width - BUTTON_SIZE, y, BUTTON_SIZE, BUTTON_SIZE),
            "›",
            HitTarget::StepNext,
            pager.can_step_next(),
        ));
    }

    commands.push(RenderCommand::EndGroup);
    commands
}

fn card_height() -> f64 {
    CARD_PAD
        + line_height(NAME_SIZE)
        + DESCRIPTION_LINES as f64 * line_height(BODY_SIZE)
        + 2.0 * line_height(SMALL_SIZE)
        + CARD_PAD
}

fn push_card(commands: &mut Vec<RenderCommand>, index: usize, skill: &Skill, rect: Rect) {
    commands.push(RenderCommand::DrawRect {
        rect,
        color: ThemeToken::SurfaceRaised,
        border_color: Some(ThemeToken::Border),
        label: None,
        target: Some(HitTarget::Card(index)),
    });

    let x = rect.x + CARD_PAD;
    let text_width = rect.w - 2.0 * CARD_PAD;
    let mut y = rect.y + CARD_PAD + NAME_SIZE;
    commands.push(RenderCommand::text(
        Point::new(x, y),
        skill.name.clone(),
        ThemeToken::TextStrong,
        NAME_SIZE,
    ));
    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(
            rect.right() - CARD_PAD - BADGE_WIDTH,
            rect.y + CARD_PAD,
            BADGE_WIDTH,
            BADGE_HEIGHT,
        ),
        color: skill_level_token(skill.level),
        border_color: None,
        label: Some(skill.level.label().into()),
        target: None,
    });

    let mut lines = wrap(&skill.description, text_width, BODY_SIZE);
    if lines.len() > DESCRIPTION_LINES {
        lines.truncate(DESCRIPTION_LINES);
        if let Some(last) = lines.last_mut() {
            last.push('…');
        }
    }
    for line in lines {
        y += line_height(BODY_SIZE);
        commands.push(RenderCommand::text(
            Point::new(x, y),
            line,
            ThemeToken::TextNormal,
            BODY_SIZE,
        ));
    }

    let rows = [
        skill
            .specialities
            .iter()
            .map(SharedStr::as_str)
            .collect::<Vec<_>>()
            .join(" · "),
        skill
            .stats
            .iter()
            .map(|s| format!("{} {}", s.value, s.label))
            .collect::<Vec<_>>()
            .join("   "),
    ];
    let mut footer_y = rect.bottom() - CARD_PAD - line_height(SMALL_SIZE);
    for row in rows.into_iter().filter(|r| !r.is_empty()) {
        commands.push(RenderCommand::text(
            Point::new(x, footer_y),
            row,
            ThemeToken::TextMuted,
            SMALL_SIZE,
        ));
        footer_y += line_height(SMALL_SIZE);
    }
}
