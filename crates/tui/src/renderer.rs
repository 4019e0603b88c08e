use std::io::stdout;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_core::views::hit_test;
use folio_protocol::{Point, RenderCommand, TextAlign, ThemeToken, Viewport};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

use crate::app::{App, Flow, Pane};

/// Viewport pixels per terminal cell.
const COL_PX: f64 = 8.0;
const ROW_PX: f64 = 18.0;

fn theme_to_color(token: ThemeToken, dark: bool) -> Color {
    match token {
        ThemeToken::Background | ThemeToken::Surface => {
            if dark {
                Color::Black
            } else {
                Color::White
            }
        }
        ThemeToken::SurfaceRaised => {
            if dark {
                Color::Rgb(28, 32, 44)
            } else {
                Color::Rgb(243, 244, 246)
            }
        }
        ThemeToken::Border | ThemeToken::DotOutOfWindow | ThemeToken::ControlDisabled => {
            Color::DarkGray
        }
        ThemeToken::TextStrong => {
            if dark {
                Color::White
            } else {
                Color::Black
            }
        }
        ThemeToken::TextNormal => Color::Gray,
        ThemeToken::TextMuted => Color::DarkGray,
        ThemeToken::Primary | ThemeToken::ControlEnabled | ThemeToken::TabActive => {
            Color::Rgb(99, 102, 241)
        }
        ThemeToken::HighlightBand => Color::Rgb(49, 46, 129),
        ThemeToken::DotInWindow => Color::LightBlue,
        ThemeToken::TabInactive => Color::Rgb(55, 65, 81),
        ThemeToken::TabActiveText => Color::White,
        ThemeToken::BadgeBeginner => Color::Green,
        ThemeToken::BadgeIntermediate => Color::Blue,
        ThemeToken::BadgeAdvanced => Color::Magenta,
        ThemeToken::BadgeExpert => Color::Red,
        ThemeToken::RatingStar => Color::Yellow,
        ThemeToken::Available => Color::LightGreen,
        ThemeToken::Busy => Color::LightRed,
    }
}

pub fn pane_viewport(area: Rect) -> Viewport {
    Viewport::sized(f64::from(area.width) * COL_PX, f64::from(area.height) * ROW_PX)
}

/// Centre of a cell in the pane's viewport coordinates.
pub fn cell_to_point(area: Rect, column: u16, row: u16) -> Option<Point> {
    let inside = column >= area.x
        && column < area.x + area.width
        && row >= area.y
        && row < area.y + area.height;
    inside.then(|| {
        Point::new(
            (f64::from(column - area.x) + 0.5) * COL_PX,
            (f64::from(row - area.y) + 0.5) * ROW_PX,
        )
    })
}

/// Cells covered by a viewport-space span, clipped to the pane.
fn cells(area: Rect, clip: Rect, x: f64, y: f64, w: f64, h: f64) -> Option<Rect> {
    let col = (x / COL_PX).floor().max(0.0) as u16;
    let row = (y / ROW_PX).floor().max(0.0) as u16;
    let width = ((w / COL_PX).round() as u16).max(1);
    let height = ((h / ROW_PX).round() as u16).max(1);
    let rect = Rect::new(area.x.saturating_add(col), area.y.saturating_add(row), width, height);
    let visible = rect.intersection(clip);
    (visible.width > 0 && visible.height > 0).then_some(visible)
}

fn put_str(buf: &mut Buffer, clip: Rect, col: u16, row: u16, text: &str, style: Style) {
    if row < clip.y || row >= clip.y + clip.height {
        return;
    }
    for (i, ch) in text.chars().enumerate() {
        let x = col.saturating_add(i as u16);
        if x < clip.x {
            continue;
        }
        if x >= clip.x + clip.width {
            break;
        }
        let cell = &mut buf[(x, row)];
        cell.set_char(ch);
        if let Some(fg) = style.fg {
            cell.set_fg(fg);
        }
        if let Some(bg) = style.bg {
            cell.set_bg(bg);
        }
        cell.modifier.insert(style.add_modifier);
    }
}

/// Paint render commands into the cells of `area`.
pub fn paint(buf: &mut Buffer, area: Rect, commands: &[RenderCommand], dark: bool) {
    let mut clip = area;

    for cmd in commands {
        match cmd {
            RenderCommand::SetClip { rect } => {
                clip = cells(area, area, rect.x, rect.y, rect.w, rect.h).unwrap_or(area);
            }
            RenderCommand::ClearClip => clip = area,
            RenderCommand::DrawRect {
                rect, color, label, ..
            } => {
                let Some(cells) = cells(area, clip, rect.x, rect.y, rect.w, rect.h) else {
                    continue;
                };
                let color = theme_to_color(*color, dark);
                // Dots and other marks narrower than two cells become a glyph.
                if rect.w < 2.0 * COL_PX && label.is_none() {
                    put_str(buf, clip, cells.x, cells.y, "●", Style::default().fg(color));
                    continue;
                }
                for y in cells.y..cells.y + cells.height {
                    for x in cells.x..cells.x + cells.width {
                        buf[(x, y)].set_bg(color);
                    }
                }
                if let Some(label) = label {
                    let len = label.chars().count() as u16;
                    let col = cells.x + cells.width.saturating_sub(len) / 2;
                    let row = cells.y + cells.height / 2;
                    let fg = if dark { Color::White } else { Color::Black };
                    put_str(buf, clip, col, row, label, Style::default().fg(fg).bg(color));
                }
            }
            RenderCommand::DrawText {
                position,
                text,
                color,
                font_size,
                align,
            } => {
                let top = position.y - font_size * 0.8;
                let row = area.y.saturating_add((top / ROW_PX).round().max(0.0) as u16);
                let len = text.chars().count() as f64;
                let start = match align {
                    TextAlign::Left => position.x / COL_PX,
                    TextAlign::Center => position.x / COL_PX - len / 2.0,
                    TextAlign::Right => position.x / COL_PX - len,
                };
                let col = area.x.saturating_add(start.max(0.0) as u16);
                let mut style = Style::default().fg(theme_to_color(*color, dark));
                if *color == ThemeToken::TextStrong {
                    style = style.add_modifier(Modifier::BOLD);
                }
                put_str(buf, clip, col, row, text, style);
            }
            RenderCommand::DrawLine { from, to, color, .. } => {
                let vertical = (from.x - to.x).abs() < COL_PX;
                let glyph = if vertical { "│" } else { "─" };
                let style = Style::default().fg(theme_to_color(*color, dark));
                let Some(span) = cells(
                    area,
                    clip,
                    from.x.min(to.x),
                    from.y.min(to.y),
                    (to.x - from.x).abs(),
                    (to.y - from.y).abs(),
                ) else {
                    continue;
                };
                for y in span.y..span.y + span.height {
                    for x in span.x..span.x + span.width {
                        if buf[(x, y)].symbol() == " " {
                            put_str(buf, clip, x, y, glyph, style);
                        }
                    }
                }
            }
            _ => {}
        }
    }
}

/// Where each pane was drawn last frame and what it drew, for mouse routing.
struct Drawn {
    pane: Pane,
    area: Rect,
    commands: Vec<RenderCommand>,
}

fn draw(frame: &mut Frame<'_>, app: &App, dark: bool) -> Vec<Drawn> {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(root[0]);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(columns[1]);

    let mut drawn = Vec::with_capacity(3);
    for (pane, outer) in [
        (Pane::Career, columns[0]),
        (Pane::Skills, right[0]),
        (Pane::Testimonials, right[1]),
    ] {
        let border = if pane == app.focus {
            Color::Rgb(99, 102, 241)
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", pane.title()))
            .border_style(Style::default().fg(border));
        let inner = block.inner(outer);
        frame.render_widget(block, outer);

        let commands = app.render(pane, &pane_viewport(inner));
        paint(frame.buffer_mut(), inner, &commands, dark);
        drawn.push(Drawn {
            pane,
            area: inner,
            commands,
        });
    }

    let status = Block::default()
        .title(app.status_line())
        .style(Style::default().fg(Color::White).bg(Color::DarkGray));
    frame.render_widget(status, root[1]);
    drawn
}

pub fn run_tui(app: &mut App, dark: bool, tick: Duration) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, app, dark, tick);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    dark: bool,
    tick: Duration,
) -> Result<()> {
    let mut drawn = Vec::new();
    loop {
        terminal.draw(|frame| drawn = draw(frame, app, dark))?;

        if !event::poll(tick)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key.code) == Flow::Quit {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let hit = drawn.iter().find_map(|d| {
                    let point = cell_to_point(d.area, mouse.column, mouse.row)?;
                    Some((d.pane, hit_test(&d.commands, point)))
                });
                if let Some((pane, target)) = hit {
                    match target {
                        Some(target) => app.click(pane, target),
                        None => app.focus = pane,
                    }
                }
            }
            _ => {}
        }
    }
}
