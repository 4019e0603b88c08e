//! SVG renderer: converts `RenderCommand` lists into standalone SVG strings.

use std::fmt::Write as _;

use folio_protocol::{RenderCommand, TextAlign, ThemeToken};

/// Render a list of commands as an SVG document string.
///
/// `width` and `height` define the SVG viewBox dimensions.
/// `dark` selects the color palette.
pub fn render_svg(commands: &[RenderCommand], width: f64, height: f64, dark: bool) -> String {
    let mut svg = String::with_capacity(commands.len() * 160);
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" style="font-family:system-ui,-apple-system,sans-serif;font-size:13px">"#,
    );
    let _ = write!(
        svg,
        r#"<rect width="{width}" height="{height}" fill="{}"/>"#,
        resolve_color(ThemeToken::Background, dark),
    );

    for cmd in commands {
        match cmd {
            RenderCommand::DrawRect {
                rect,
                color,
                border_color,
                label,
                ..
            } => {
                let fill = resolve_color(*color, dark);
                let stroke = border_color
                    .map(|b| format!(r#" stroke="{}""#, resolve_color(b, dark)))
                    .unwrap_or_default();
                let _ = write!(
                    svg,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{fill}"{stroke} rx="4"/>"#,
                    rect.x, rect.y, rect.w, rect.h,
                );

                // Labelled rects are buttons and tabs: centre the label.
                if let Some(label) = label {
                    let center = rect.center();
                    let _ = write!(
                        svg,
                        r#"<text x="{}" y="{}" fill="{}" text-anchor="middle" dominant-baseline="middle" style="pointer-events:none">{}</text>"#,
                        center.x,
                        center.y,
                        resolve_color(label_token(*color), dark),
                        escape_xml(label),
                    );
                }
            }
            RenderCommand::DrawLine {
                from,
                to,
                color,
                width: line_width,
            } => {
                let stroke = resolve_color(*color, dark);
                let _ = write!(
                    svg,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}" stroke-width="{line_width}"/>"#,
                    from.x, from.y, to.x, to.y,
                );
            }
            RenderCommand::DrawText {
                text,
                position,
                color,
                font_size,
                align,
            } => {
                let anchor = match align {
                    TextAlign::Left => "start",
                    TextAlign::Center => "middle",
                    TextAlign::Right => "end",
                };
                let _ = write!(
                    svg,
                    r#"<text x="{}" y="{}" fill="{}" font-size="{font_size}" text-anchor="{anchor}">{}</text>"#,
                    position.x,
                    position.y,
                    resolve_color(*color, dark),
                    escape_xml(text),
                );
            }
            RenderCommand::BeginGroup { id, .. } => {
                let _ = write!(svg, r#"<g id="{}">"#, escape_xml(id));
            }
            RenderCommand::EndGroup => svg.push_str("</g>"),
            // Transforms and clips don't affect static SVG output
            _ => {}
        }
    }

    svg.push_str("</svg>");
    svg
}

/// Text color for a label drawn on top of a `fill` rect.
pub fn label_token(fill: ThemeToken) -> ThemeToken {
    match fill {
        ThemeToken::TabActive | ThemeToken::ControlEnabled | ThemeToken::Primary => {
            ThemeToken::TabActiveText
        }
        ThemeToken::ControlDisabled => ThemeToken::TextMuted,
        _ => ThemeToken::TextNormal,
    }
}

/// Hex color for a token in the given mode.
pub fn resolve_color(token: ThemeToken, dark: bool) -> &'static str {
    if dark {
        match token {
            ThemeToken::Background => "#0b1120",
            ThemeToken::Surface => "#111827",
            ThemeToken::SurfaceRaised => "#1f2937",
            ThemeToken::Border => "#374151",
            ThemeToken::TextStrong => "#f9fafb",
            ThemeToken::TextNormal => "#d1d5db",
            ThemeToken::TextMuted => "#9ca3af",
            ThemeToken::Primary | ThemeToken::ControlEnabled | ThemeToken::TabActive => "#6366f1",
            ThemeToken::HighlightBand => "#312e81",
            ThemeToken::ControlDisabled | ThemeToken::TabInactive => "#374151",
            ThemeToken::DotInWindow => "#a5b4fc",
            ThemeToken::DotOutOfWindow => "#4b5563",
            ThemeToken::TabActiveText => "#ffffff",
            ThemeToken::BadgeBeginner => "#15803d",
            ThemeToken::BadgeIntermediate => "#1d4ed8",
            ThemeToken::BadgeAdvanced => "#7e22ce",
            ThemeToken::BadgeExpert => "#b91c1c",
            ThemeToken::RatingStar => "#facc15",
            ThemeToken::Available => "#22c55e",
            ThemeToken::Busy => "#f97316",
        }
    } else {
        match token {
            ThemeToken::Background => "#ffffff",
            ThemeToken::Surface => "#f9fafb",
            ThemeToken::SurfaceRaised => "#ffffff",
            ThemeToken::Border => "#e5e7eb",
            ThemeToken::TextStrong => "#111827",
            ThemeToken::TextNormal => "#374151",
            ThemeToken::TextMuted => "#6b7280",
            ThemeToken::Primary | ThemeToken::ControlEnabled | ThemeToken::TabActive => "#4f46e5",
            ThemeToken::HighlightBand => "#e0e7ff",
            ThemeToken::ControlDisabled | ThemeToken::TabInactive => "#e5e7eb",
            ThemeToken::DotInWindow => "#4f46e5",
            ThemeToken::DotOutOfWindow => "#d1d5db",
            ThemeToken::TabActiveText => "#ffffff",
            ThemeToken::BadgeBeginner => "#bbf7d0",
            ThemeToken::BadgeIntermediate => "#bfdbfe",
            ThemeToken::BadgeAdvanced => "#e9d5ff",
            ThemeToken::BadgeExpert => "#fecaca",
            ThemeToken::RatingStar => "#eab308",
            ThemeToken::Available => "#16a34a",
            ThemeToken::Busy => "#ea580c",
        }
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
