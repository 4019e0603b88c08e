use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    Background,
    Surface,
    SurfaceRaised,
    Border,

    TextStrong,
    TextNormal,
    TextMuted,

    Primary,
    /// Translucent band behind the in-window indicator dots.
    HighlightBand,

    ControlEnabled,
    ControlDisabled,

    DotInWindow,
    DotOutOfWindow,

    TabActive,
    TabInactive,
    TabActiveText,

    // Skill level badges
    BadgeBeginner,
    BadgeIntermediate,
    BadgeAdvanced,
    BadgeExpert,

    RatingStar,
    Available,
    Busy,
}
