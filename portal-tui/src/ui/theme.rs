use ratatui::style::Color;

/// All colors used by the portal, grouped by purpose.
/// Swap between presets (Dark / Light) to adapt to the terminal background.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Panel chrome ──────────────────────────────────────────────
    pub panel_border: Color,
    pub panel_border_focus: Color,
    pub panel_border_dimmed: Color,

    // ── List ──────────────────────────────────────────────────────
    pub list_highlight: Color,
    pub list_highlight_bg: Color,
    pub schematic_marker: Color,

    // ── Semantic status ───────────────────────────────────────────
    pub positive: Color,
    pub warning: Color,
    pub info: Color,
    pub muted: Color,

    // ── Text ──────────────────────────────────────────────────────
    pub text_primary: Color,
    pub text_secondary: Color,
    pub title: Color,

    // ── Overlay ───────────────────────────────────────────────────
    pub overlay_bg: Color,
    pub overlay_hint: Color,
}

impl Theme {
    /// Dark theme, for terminals with a dark background.
    pub fn dark() -> Self {
        Self {
            panel_border: Color::Cyan,
            panel_border_focus: Color::Yellow,
            panel_border_dimmed: Color::DarkGray,

            list_highlight: Color::Yellow,
            list_highlight_bg: Color::DarkGray,
            schematic_marker: Color::Yellow,

            positive: Color::Green,
            warning: Color::Yellow,
            info: Color::Cyan,
            muted: Color::DarkGray,

            text_primary: Color::White,
            text_secondary: Color::Gray,
            title: Color::LightCyan,

            overlay_bg: Color::Black,
            overlay_hint: Color::Gray,
        }
    }

    /// Light theme. Uses explicit RGB to avoid ANSI color remapping in light
    /// terminals.
    pub fn light() -> Self {
        Self {
            panel_border: Color::Rgb(60, 120, 140),
            panel_border_focus: Color::Rgb(160, 130, 30),
            panel_border_dimmed: Color::Rgb(180, 180, 180),

            list_highlight: Color::Rgb(160, 130, 30),
            list_highlight_bg: Color::Rgb(220, 220, 210),
            schematic_marker: Color::Rgb(180, 140, 0),

            positive: Color::Rgb(30, 140, 30),
            warning: Color::Rgb(180, 140, 0),
            info: Color::Rgb(30, 120, 150),
            muted: Color::Rgb(150, 150, 150),

            text_primary: Color::Rgb(30, 30, 30),
            text_secondary: Color::Rgb(100, 100, 100),
            title: Color::Rgb(30, 90, 120),

            overlay_bg: Color::Rgb(245, 245, 240),
            overlay_hint: Color::Rgb(100, 100, 100),
        }
    }

    /// Create a theme from a preference string ("light" or "dark").
    /// Returns dark for any unrecognized or `None` value.
    pub fn from_preference(pref: Option<&str>) -> Self {
        match pref {
            Some("light") => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Toggle between dark and light theme in place.
    pub fn toggle(&mut self) {
        *self = if self.is_dark() {
            Self::light()
        } else {
            Self::dark()
        };
    }

    /// Returns true if this is the dark theme variant.
    pub fn is_dark(&self) -> bool {
        // Dark theme uses ANSI Color::White for text_primary;
        // light theme uses Rgb(30,30,30).
        self.text_primary == Color::White
    }

    pub fn name(&self) -> &'static str {
        if self.is_dark() {
            "dark"
        } else {
            "light"
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
