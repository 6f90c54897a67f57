//! Theming for calpane.
//!
//! [`ThemeMode`] is a closed two-variant type flipped by the in-app toggle.
//! [`ThemePalette`] is the single source of truth for styling: it resolves
//! every color from the mode plus config overrides and generates the
//! `:root` CSS variable block the GTK layer installs.

use crate::config::Config;

// Foreground opacity factors for text hierarchy.
const FOREGROUND_MUTED_OPACITY: f64 = 0.6;
const FOREGROUND_SUBTLE_OPACITY: f64 = 0.4;

// Card overlay opacities. Dark mode uses a lower value since white overlays
// on dark read stronger than black overlays on light.
const CARD_OPACITY_DARK: f64 = 0.06;
const CARD_OPACITY_LIGHT: f64 = 0.05;
const HOVER_MULTIPLIER: f64 = 2.2;

// Border and shadow opacities.
const BORDER_OPACITY_DARK: f64 = 0.10;
const BORDER_OPACITY_LIGHT: f64 = 0.12;
const SHADOW_OPACITY_DARK: f64 = 0.40;
const SHADOW_OPACITY_LIGHT: f64 = 0.22;

// Weight of the accent when blended over the surface for the today cell.
const TODAY_BACKGROUND_WEIGHT: f64 = 0.18;

// Per-mode base colors.
const WINDOW_BG_LIGHT: &str = "#f3f4f6";
const WINDOW_BG_DARK: &str = "#111217";
const SURFACE_BG_LIGHT: &str = "#ffffff";
const SURFACE_BG_DARK: &str = "#1a1a1f";
const FOREGROUND_LIGHT_MODE: &str = "#1f2937";
const FOREGROUND_DARK_MODE: &str = "#ffffff";
const WEEKEND_LIGHT_MODE: &str = "#ef4444";
const WEEKEND_DARK_MODE: &str = "#f87171";

/// Parse a hex color string to an RGB tuple. Returns None if invalid.
pub fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let color = color.trim().trim_start_matches('#');

    // Expand shorthand (e.g., "fff" -> "ffffff")
    let color = if color.len() == 3 {
        color.chars().flat_map(|c| [c, c]).collect::<String>()
    } else {
        color.to_string()
    };

    if color.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&color[0..2], 16).ok()?;
    let g = u8::from_str_radix(&color[2..4], 16).ok()?;
    let b = u8::from_str_radix(&color[4..6], 16).ok()?;

    Some((r, g, b))
}

/// Blend two hex colors; `weight1` is the share of `color1` (0.0 to 1.0).
pub fn blend_colors(color1: &str, color2: &str, weight1: f64) -> Option<(u8, u8, u8)> {
    let rgb1 = parse_hex_color(color1)?;
    let rgb2 = parse_hex_color(color2)?;

    let weight2 = 1.0 - weight1;
    let r = (rgb1.0 as f64 * weight1 + rgb2.0 as f64 * weight2) as u8;
    let g = (rgb1.1 as f64 * weight1 + rgb2.1 as f64 * weight2) as u8;
    let b = (rgb1.2 as f64 * weight1 + rgb2.2 as f64 * weight2) as u8;

    Some((r, g, b))
}

/// Convert an RGB tuple to a hex color string.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Format an RGBA color string.
pub fn rgba_str(r: u8, g: u8, b: u8, a: f64) -> String {
    format!("rgba({}, {}, {}, {:.2})", r, g, b, a)
}

/// The closed theme variant pair. No "auto", no third state: the toggle
/// flips between exactly these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other variant.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a config value ("light" / "dark").
    pub fn from_config_value(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }
}

/// Where the accent color comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccentSource {
    /// Monochrome mode - no colored accents.
    None,
    /// Use a specific custom color.
    Custom(String),
}

/// Single source of truth for all theme values.
///
/// Constructed via `ThemePalette::from_config(&config, mode)`; the mode is
/// passed separately because the runtime toggle overrides the configured
/// starting mode.
#[derive(Debug, Clone)]
pub struct ThemePalette {
    pub mode: ThemeMode,

    // Backgrounds
    pub window_background: String,
    pub surface_background: String,
    pub card_background: String,
    pub card_background_hover: String,

    // Foregrounds
    pub foreground_primary: String,
    pub foreground_muted: String,
    pub foreground_subtle: String,

    // Accent
    pub accent_source: AccentSource,
    pub accent_primary: String,
    pub accent_subtle: String,
    pub accent_text: String,

    // Calendar-specific
    pub weekend_color: String,
    pub today_background: String,
    pub today_border: String,

    // Chrome
    pub border_subtle: String,
    pub shadow_soft: String,

    // Typography and radii
    pub font_family: String,
    pub surface_radius: u32,
    pub cell_radius: u32,
}

impl ThemePalette {
    /// Create a palette for `mode` from configuration.
    pub fn from_config(config: &Config, mode: ThemeMode) -> Self {
        let is_dark = mode.is_dark();

        let window_background = if is_dark { WINDOW_BG_DARK } else { WINDOW_BG_LIGHT };
        let surface_background = if is_dark { SURFACE_BG_DARK } else { SURFACE_BG_LIGHT };

        let ((or, og, ob), card_opacity) = if is_dark {
            ((255u8, 255u8, 255u8), CARD_OPACITY_DARK)
        } else {
            ((30u8, 30u8, 30u8), CARD_OPACITY_LIGHT)
        };
        let card_background = rgba_str(or, og, ob, card_opacity);
        let card_background_hover = rgba_str(or, og, ob, card_opacity * HOVER_MULTIPLIER);

        let foreground_primary = if is_dark {
            FOREGROUND_DARK_MODE
        } else {
            FOREGROUND_LIGHT_MODE
        };
        let (foreground_muted, foreground_subtle) = if is_dark {
            (
                rgba_str(255, 255, 255, FOREGROUND_MUTED_OPACITY),
                rgba_str(255, 255, 255, FOREGROUND_SUBTLE_OPACITY),
            )
        } else {
            (
                rgba_str(0, 0, 0, FOREGROUND_MUTED_OPACITY),
                rgba_str(0, 0, 0, FOREGROUND_SUBTLE_OPACITY),
            )
        };

        let accent_source = match config.theme.accent.as_str() {
            "none" => AccentSource::None,
            color => AccentSource::Custom(color.to_string()),
        };
        let (accent_primary, accent_subtle) = match &accent_source {
            AccentSource::Custom(color) => (
                color.clone(),
                format!("color-mix(in srgb, {} 20%, transparent)", color),
            ),
            AccentSource::None => {
                if is_dark {
                    ("rgba(255, 255, 255, 0.25)".to_string(), "rgba(255, 255, 255, 0.08)".to_string())
                } else {
                    ("rgba(0, 0, 0, 0.20)".to_string(), "rgba(0, 0, 0, 0.06)".to_string())
                }
            }
        };
        let accent_text = foreground_primary.to_string();

        // Today cell: accent blended over the surface, with the accent
        // itself as the ring. Monochrome mode falls back to the hover
        // overlay so the cell still stands out.
        let (today_background, today_border) = match &accent_source {
            AccentSource::Custom(color) => {
                let background = blend_colors(color, surface_background, TODAY_BACKGROUND_WEIGHT)
                    .map(|(r, g, b)| rgb_to_hex(r, g, b))
                    .unwrap_or_else(|| accent_subtle.clone());
                (background, color.clone())
            }
            AccentSource::None => (card_background_hover.clone(), accent_primary.clone()),
        };

        let (border_subtle, shadow_opacity) = if is_dark {
            (rgba_str(255, 255, 255, BORDER_OPACITY_DARK), SHADOW_OPACITY_DARK)
        } else {
            (rgba_str(0, 0, 0, BORDER_OPACITY_LIGHT), SHADOW_OPACITY_LIGHT)
        };
        let shadow_soft = format!(
            "0 1px 2px rgba(0, 0, 0, {:.2}), 0 1px 3px rgba(0, 0, 0, {:.2})",
            shadow_opacity * 0.5,
            shadow_opacity * 0.6
        );

        Self {
            mode,
            window_background: window_background.to_string(),
            surface_background: surface_background.to_string(),
            card_background,
            card_background_hover,
            foreground_primary: foreground_primary.to_string(),
            foreground_muted,
            foreground_subtle,
            accent_source,
            accent_primary,
            accent_subtle,
            accent_text,
            weekend_color: if is_dark { WEEKEND_DARK_MODE } else { WEEKEND_LIGHT_MODE }.to_string(),
            today_background,
            today_border,
            border_subtle,
            shadow_soft,
            font_family: config.theme.font_family.clone(),
            surface_radius: 16,
            cell_radius: 10,
        }
    }

    /// Generate the `:root` CSS variable block.
    pub fn css_vars_block(&self) -> String {
        format!(
            r#"
:root {{
    /* ===== Backgrounds ===== */
    --color-background-window: {window_bg};
    --color-background-surface: {surface_bg};
    --color-background-card: {card_bg};
    --color-background-card-hover: {card_hover};

    /* ===== Foregrounds ===== */
    --color-foreground-primary: {fg_primary};
    --color-foreground-muted: {fg_muted};
    --color-foreground-subtle: {fg_subtle};

    /* ===== Accent ===== */
    --color-accent-primary: {accent_primary};
    --color-accent-subtle: {accent_subtle};
    --color-accent-text: {accent_text};

    /* ===== Calendar ===== */
    --color-weekend: {weekend};
    --color-today-background: {today_bg};
    --color-today-border: {today_border};

    /* ===== Borders & Shadows ===== */
    --color-border-subtle: {border_subtle};
    --shadow-soft: {shadow_soft};

    /* ===== Radii ===== */
    --radius-surface: {radius_surface}px;
    --radius-cell: {radius_cell}px;
    --radius-pill: 999px;

    /* ===== Typography ===== */
    --font-family: {font_family};
    --font-size-xl: 28px;
    --font-size-lg: 20px;
    --font-size-base: 14px;
    --font-size-sm: 12px;

    /* ===== Spacing ===== */
    --spacing-xs: 4px;
    --spacing-sm: 8px;
    --spacing-md: 12px;
    --spacing-lg: 16px;
    --spacing-xl: 24px;
}}
"#,
            window_bg = self.window_background,
            surface_bg = self.surface_background,
            card_bg = self.card_background,
            card_hover = self.card_background_hover,
            fg_primary = self.foreground_primary,
            fg_muted = self.foreground_muted,
            fg_subtle = self.foreground_subtle,
            accent_primary = self.accent_primary,
            accent_subtle = self.accent_subtle,
            accent_text = self.accent_text,
            weekend = self.weekend_color,
            today_bg = self.today_background,
            today_border = self.today_border,
            border_subtle = self.border_subtle,
            shadow_soft = self.shadow_soft,
            radius_surface = self.surface_radius,
            radius_cell = self.cell_radius,
            font_family = self.font_family,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_valid() {
        assert_eq!(parse_hex_color("#ff0000"), Some((255, 0, 0)));
        assert_eq!(parse_hex_color("00ff00"), Some((0, 255, 0)));
        assert_eq!(parse_hex_color("#fff"), Some((255, 255, 255)));
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert_eq!(parse_hex_color("not a color"), None);
        assert_eq!(parse_hex_color("#gggggg"), None);
        assert_eq!(parse_hex_color("#ff"), None);
    }

    #[test]
    fn test_blend_colors_midpoint_is_gray() {
        let (r, g, b) = blend_colors("#000000", "#ffffff", 0.5).unwrap();
        assert!(r > 120 && r < 135);
        assert!(g > 120 && g < 135);
        assert!(b > 120 && b < 135);
    }

    #[test]
    fn toggled_flips_between_exactly_two_variants() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn from_config_value_accepts_only_the_two_modes() {
        assert_eq!(ThemeMode::from_config_value("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::from_config_value("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_config_value("auto"), None);
    }

    #[test]
    fn light_and_dark_palettes_differ_where_it_matters() {
        let config = Config::default();
        let light = ThemePalette::from_config(&config, ThemeMode::Light);
        let dark = ThemePalette::from_config(&config, ThemeMode::Dark);

        assert!(!light.mode.is_dark());
        assert!(dark.mode.is_dark());
        assert_ne!(light.window_background, dark.window_background);
        assert_ne!(light.foreground_primary, dark.foreground_primary);
        // The accent follows config, not the mode.
        assert_eq!(light.accent_primary, dark.accent_primary);
    }

    #[test]
    fn monochrome_accent_adapts_to_mode() {
        let mut config = Config::default();
        config.theme.accent = "none".to_string();

        let light = ThemePalette::from_config(&config, ThemeMode::Light);
        assert_eq!(light.accent_source, AccentSource::None);
        assert!(light.accent_primary.contains("rgba(0, 0, 0"));

        let dark = ThemePalette::from_config(&config, ThemeMode::Dark);
        assert!(dark.accent_primary.contains("rgba(255, 255, 255"));
    }

    #[test]
    fn css_vars_contain_expected_variables() {
        let config = Config::default();
        let css = ThemePalette::from_config(&config, ThemeMode::Dark).css_vars_block();

        assert!(css.contains("--color-background-window:"));
        assert!(css.contains("--color-foreground-primary:"));
        assert!(css.contains("--color-accent-primary:"));
        assert!(css.contains("--color-weekend:"));
        assert!(css.contains("--color-today-background:"));
        assert!(css.contains("--radius-surface:"));
        assert!(css.contains("--font-family:"));
    }

    #[test]
    fn custom_accent_lands_in_css() {
        let mut config = Config::default();
        config.theme.accent = "#ff0000".to_string();
        let palette = ThemePalette::from_config(&config, ThemeMode::Light);

        assert_eq!(
            palette.accent_source,
            AccentSource::Custom("#ff0000".to_string())
        );
        assert!(palette.css_vars_block().contains("--color-accent-primary: #ff0000"));
        // Today ring uses the accent directly.
        assert_eq!(palette.today_border, "#ff0000");
    }
}
