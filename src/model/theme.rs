use crate::model::color::Color;

/// A named palette of semantic color roles.
///
/// A theme is constructed once per generation run and shared by reference
/// across every builder call; nothing in this crate mutates it. Builders
/// never reach for ambient color state — the theme is always an explicit
/// argument.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Theme {
    /// Slide background fill; also the light half of the stripe pattern.
    pub background: Color,
    /// Near-black panel fill used by code blocks and inset panels.
    pub surface: Color,
    /// Dark row fill; the dark half of the stripe pattern.
    pub stripe: Color,
    /// Structural fill for title bars, table headers, and flow nodes.
    pub accent: Color,
    /// Highlight color for labels, rules, and flow-node side bars.
    pub primary: Color,
    /// High-contrast body text.
    pub text: Color,
    /// De-emphasized body text.
    pub text_muted: Color,
    /// Role color for errors and critical callouts.
    pub danger: Color,
    /// Role color for positive or secondary-source callouts.
    pub success: Color,
    /// Role color for annotations and caveats.
    pub warning: Color,
}

impl Theme {
    /// The dark midnight palette used by the built-in demo deck.
    pub fn midnight() -> Self {
        Self {
            background: Color::rgb(0x1A, 0x1A, 0x2E),
            surface: Color::rgb(0x06, 0x0B, 0x1A),
            stripe: Color::rgb(0x10, 0x10, 0x25),
            accent: Color::rgb(0x0F, 0x3A, 0x60),
            primary: Color::rgb(0x00, 0xB4, 0xD8),
            text: Color::rgb(0xFF, 0xFF, 0xFF),
            text_muted: Color::rgb(0xB0, 0xC4, 0xDE),
            danger: Color::rgb(0xE7, 0x4C, 0x3C),
            success: Color::rgb(0x27, 0xAE, 0x60),
            warning: Color::rgb(0xF5, 0xA6, 0x23),
        }
    }
}
