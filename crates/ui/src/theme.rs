use egui::Color32;
use folio_protocol::ThemeToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            ThemeMode::Dark => dark_visuals(),
            ThemeMode::Light => light_visuals(),
        }
    }
}

/// Same palette the SVG export uses, so both surfaces agree.
pub fn resolve(token: ThemeToken, mode: ThemeMode) -> Color32 {
    let hex = folio_core::svg::resolve_color(token, mode.is_dark());
    Color32::from_hex(hex).unwrap_or(Color32::MAGENTA)
}

// ── Typography scale ───────────────────────────────────────────────────────

pub const FONT_TITLE: f32 = 18.0;
pub const FONT_BODY: f32 = 13.0;
pub const FONT_CAPTION: f32 = 11.0;

// ── egui visual presets ────────────────────────────────────────────────────

fn dark_visuals() -> egui::Visuals {
    let mut v = egui::Visuals::dark();
    v.panel_fill = Color32::from_rgb(0x11, 0x18, 0x27);
    v.window_fill = Color32::from_rgb(0x1f, 0x29, 0x37);
    v.extreme_bg_color = Color32::from_rgb(0x0b, 0x11, 0x20);
    v.faint_bg_color = Color32::from_rgb(0x1f, 0x29, 0x37);
    v.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Color32::from_rgb(0x37, 0x41, 0x51));
    v.widgets.inactive.bg_fill = Color32::from_rgb(0x37, 0x41, 0x51);
    v.widgets.hovered.bg_fill = Color32::from_rgb(0x4b, 0x55, 0x63);
    v.widgets.active.bg_fill = Color32::from_rgb(0x63, 0x66, 0xf1);
    v.selection.bg_fill = Color32::from_rgba_unmultiplied(0x63, 0x66, 0xf1, 60);
    v.selection.stroke = egui::Stroke::new(1.0, Color32::from_rgb(0xa5, 0xb4, 0xfc));
    v.hyperlink_color = Color32::from_rgb(0xa5, 0xb4, 0xfc);
    v.error_fg_color = Color32::from_rgb(0xf8, 0x71, 0x71);
    rounded(v)
}

fn light_visuals() -> egui::Visuals {
    let mut v = egui::Visuals::light();
    v.panel_fill = Color32::from_rgb(0xf9, 0xfa, 0xfb);
    v.window_fill = Color32::WHITE;
    v.extreme_bg_color = Color32::WHITE;
    v.faint_bg_color = Color32::from_rgb(0xf3, 0xf4, 0xf6);
    v.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Color32::from_rgb(0xe5, 0xe7, 0xeb));
    v.widgets.inactive.bg_fill = Color32::from_rgb(0xe5, 0xe7, 0xeb);
    v.widgets.hovered.bg_fill = Color32::from_rgb(0xd1, 0xd5, 0xdb);
    v.widgets.active.bg_fill = Color32::from_rgb(0x4f, 0x46, 0xe5);
    v.widgets.active.fg_stroke = egui::Stroke::new(1.0, Color32::WHITE);
    v.selection.bg_fill = Color32::from_rgba_unmultiplied(0x4f, 0x46, 0xe5, 50);
    v.selection.stroke = egui::Stroke::new(1.0, Color32::from_rgb(0x4f, 0x46, 0xe5));
    v.hyperlink_color = Color32::from_rgb(0x4f, 0x46, 0xe5);
    v.error_fg_color = Color32::from_rgb(0xdc, 0x26, 0x26);
    rounded(v)
}

fn rounded(mut v: egui::Visuals) -> egui::Visuals {
    v.window_corner_radius = egui::CornerRadius::same(6);
    v.menu_corner_radius = egui::CornerRadius::same(6);
    v.widgets.noninteractive.corner_radius = egui::CornerRadius::same(5);
    v.widgets.inactive.corner_radius = egui::CornerRadius::same(5);
    v.widgets.hovered.corner_radius = egui::CornerRadius::same(5);
    v.widgets.active.corner_radius = egui::CornerRadius::same(5);
    v.widgets.open.corner_radius = egui::CornerRadius::same(5);
    v
}

/// Apply the app's typography scale to egui styles.
pub fn apply_typography(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style
        .text_styles
        .insert(egui::TextStyle::Heading, egui::FontId::proportional(FONT_TITLE));
    style
        .text_styles
        .insert(egui::TextStyle::Body, egui::FontId::proportional(FONT_BODY));
    style
        .text_styles
        .insert(egui::TextStyle::Button, egui::FontId::proportional(FONT_BODY));
    style
        .text_styles
        .insert(egui::TextStyle::Small, egui::FontId::proportional(FONT_CAPTION));
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_token_parses_in_both_modes() {
        use ThemeToken::*;
        let tokens = [
            Background, Surface, SurfaceRaised, Border, TextStrong, TextNormal, TextMuted,
            Primary, HighlightBand, ControlEnabled, ControlDisabled, DotInWindow,
            DotOutOfWindow, TabActive, TabInactive, TabActiveText, BadgeBeginner,
            BadgeIntermediate, BadgeAdvanced, BadgeExpert, RatingStar, Available, Busy,
        ];
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            for token in tokens {
                assert_ne!(resolve(token, mode), Color32::MAGENTA, "{token:?} in {mode:?}");
            }
        }
    }

    #[test]
    fn toggling_flips_the_mode() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert!(!ThemeMode::Dark.toggled().is_dark());
    }
}
