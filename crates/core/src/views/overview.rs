use folio_protocol::{Point, Rect, RenderCommand, SharedStr, ThemeToken, Viewport};

use super::{BODY_SIZE, HEADING_SIZE, PAD, SMALL_SIZE, line_height, push_heading, push_paragraph};
use crate::model::{AboutPage, HeroPage, Portfolio, Project, SectionHeader};

const NAME_SIZE: f64 = 34.0;
const CARD_TITLE_SIZE: f64 = 15.0;
const CARD_PAD: f64 = 12.0;
const BADGE_HEIGHT: f64 = 24.0;

/// Hero, about and project list, top to bottom. Sections missing from the
/// snapshot are skipped.
pub fn render_overview(portfolio: &Portfolio, viewport: &Viewport) -> Vec<RenderCommand> {
    let mut commands = Vec::with_capacity(64);
    commands.push(RenderCommand::BeginGroup {
        id: "overview".into(),
        label: None,
    });

    let left = viewport.x + PAD;
    let width = viewport.width - 2.0 * PAD;
    let mut y = viewport.y + PAD;

    if let Some(hero) = &portfolio.hero {
        y = push_hero(&mut commands, hero, left, y, width);
    }
    if let Some(about) = &portfolio.about {
        y = push_about(&mut commands, about, left, y, width);
    }
    if portfolio.project_page.is_some() || !portfolio.projects.is_empty() {
        push_projects(
            &mut commands,
            portfolio.project_page.as_ref(),
            &portfolio.projects,
            left,
            y,
            width,
        );
    }

    commands.push(RenderCommand::EndGroup);
    commands
}

fn push_hero(commands: &mut Vec<RenderCommand>, hero: &HeroPage, x: f64, y: f64, width: f64) -> f64 {
    let mut y = y + NAME_SIZE;
    commands.push(RenderCommand::text(
        Point::new(x, y),
        hero.name.clone(),
        ThemeToken::TextStrong,
        NAME_SIZE,
    ));
    for (text, color, size) in [
        (&hero.rank, ThemeToken::Primary, HEADING_SIZE * 0.8),
        (&hero.title, ThemeToken::TextNormal, BODY_SIZE + 2.0),
    ] {
        if !text.is_empty() {
            y += line_height(size);
            commands.push(RenderCommand::text(Point::new(x, y), text.clone(), color, size));
        }
    }
    if !hero.subtitle.is_empty() {
        y = push_paragraph(commands, &hero.subtitle, x, y + PAD / 2.0, width, ThemeToken::TextMuted, BODY_SIZE);
    }
    if !hero.hobbies.is_empty() {
        let hobbies = hero
            .hobbies
            .iter()
            .map(SharedStr::as_str)
            .collect::<Vec<_>>()
            .join(" · ");
        y += line_height(SMALL_SIZE);
        commands.push(RenderCommand::text(
            Point::new(x, y),
            hobbies,
            ThemeToken::TextMuted,
            SMALL_SIZE,
        ));
    }
    y + 2.0 * PAD
}

fn push_about(commands: &mut Vec<RenderCommand>, about: &AboutPage, x: f64, y: f64, width: f64) -> f64 {
    let mut y = push_heading(commands, "About Me", x, y);
    y = push_paragraph(commands, &about.description, x, y, width, ThemeToken::TextNormal, BODY_SIZE);

    let (headline, detail) = about.availability_copy();
    let badge = Rect::new(x, y + PAD / 2.0, width.min(220.0), BADGE_HEIGHT);
    commands.push(RenderCommand::DrawRect {
        rect: badge,
        color: if about.available {
            ThemeToken::Available
        } else {
            ThemeToken::Busy
        },
        border_color: None,
        label: Some(headline.into()),
        target: None,
    });
    y = badge.bottom() + line_height(SMALL_SIZE);
    commands.push(RenderCommand::text(Point::new(x, y), detail, ThemeToken::TextMuted, SMALL_SIZE));

    let links: Vec<String> = [
        ("GitHub", about.has_github(), &about.github_link),
        ("LinkedIn", about.has_linkedin(), &about.linkedin_link),
    ]
    .into_iter()
    .filter(|(_, present, _)| *present)
    .map(|(name, _, link)| format!("{name}: {link}"))
    .collect();
    for link in links {
        y += line_height(SMALL_SIZE);
        commands.push(RenderCommand::text(Point::new(x, y), link, ThemeToken::Primary, SMALL_SIZE));
    }
    y += PAD;

    for card in &about.cards {
        let text_width = width - 2.0 * CARD_PAD;
        let body_top = y + CARD_PAD + line_height(CARD_TITLE_SIZE);
        let card_index = commands.len();
        commands.push(RenderCommand::text(
            Point::new(x + CARD_PAD, y + CARD_PAD + CARD_TITLE_SIZE),
            card.title.clone(),
            ThemeToken::TextStrong,
            CARD_TITLE_SIZE,
        ));
        let body_bottom = push_paragraph(
            commands,
            &card.description,
            x + CARD_PAD,
            body_top,
            text_width,
            ThemeToken::TextMuted,
            BODY_SIZE,
        );
        let rect = Rect::new(x, y, width, body_bottom - y + CARD_PAD);
        commands.insert(
            card_index,
            RenderCommand::DrawRect {
                rect,
                color: ThemeToken::Surface,
                border_color: Some(ThemeToken::Border),
                label: None,
                target: None,
            },
        );
        y = rect.bottom() + PAD / 2.0;
    }
    y + 2.0 * PAD
}

fn push_projects(
    commands: &mut Vec<RenderCommand>,
    header: Option<&SectionHeader>,
    projects: &[Project],
    x: f64,
    y: f64,
    width: f64,
) -> f64 {
    let title = header
        .map(|h| h.title.as_str())
        .filter(|t| !t.is_empty())
        .unwrap_or("Projects");
    let mut y = push_heading(commands, title, x, y);
    if let Some(header) = header
        && !header.description.is_empty()
    {
        y = push_paragraph(commands, &header.description, x, y, width, ThemeToken::TextMuted, BODY_SIZE);
        y += PAD / 2.0;
    }

    for project in projects {
        y += CARD_TITLE_SIZE;
        let heading = if project.kind.is_empty() {
            project.name.to_string()
        } else {
            format!("{} · {}", project.name, project.kind)
        };
        commands.push(RenderCommand::text(Point::new(x, y), heading, ThemeToken::TextStrong, CARD_TITLE_SIZE));
        y = push_paragraph(commands, &project.description, x, y + 4.0, width, ThemeToken::TextNormal, BODY_SIZE);
        if !project.tech_stack.is_empty() {
            let stack = project
                .tech_stack
                .iter()
                .map(SharedStr::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            y += SMALL_SIZE;
            commands.push(RenderCommand::text(Point::new(x, y), stack, ThemeToken::TextMuted, SMALL_SIZE));
        }
        y += PAD;
    }
    y
}
