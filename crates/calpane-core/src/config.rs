//! Configuration types and parsing.
//!
//! The schema is deliberately small and serialization-friendly: a window
//! section, a theme section, and a calendar section. Derived values (the
//! computed palette) live in the `theme` module.

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use toml::Table;

use crate::error::{Error, Result};
use crate::theme::parse_hex_color;

/// Known valid values for theme.mode.
const VALID_THEME_MODES: &[&str] = &["light", "dark"];

/// Embedded default configuration TOML, compiled into the binary.
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Result of loading a configuration file.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Path where config was found, if any.
    pub source: Option<PathBuf>,
    /// Whether defaults were used (no config file found).
    pub used_defaults: bool,
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Window geometry.
    pub window: WindowConfig,

    /// Theme configuration (mode, accent, typography).
    pub theme: ThemeConfig,

    /// Calendar view configuration.
    pub calendar: CalendarConfig,
}

impl Config {
    /// Load configuration from the embedded default TOML string.
    pub fn from_default_toml() -> Result<Self> {
        let config: Config = toml::from_str(DEFAULT_CONFIG_TOML)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, merging with embedded defaults.
    ///
    /// User-provided values override defaults; any missing section or field
    /// falls back to the embedded default config.
    ///
    /// Returns an error if the file doesn't exist or can't be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::load_with_defaults(&content)
    }

    /// Parse a TOML string layered over the embedded defaults.
    fn load_with_defaults(user_toml: &str) -> Result<Self> {
        // This should never fail since it's embedded and tested
        let mut base: Table = toml::from_str(DEFAULT_CONFIG_TOML)
            .expect("embedded DEFAULT_CONFIG_TOML should always be valid");

        let user: Table = toml::from_str(user_toml)?;

        deep_merge_toml(&mut base, user);

        let config: Config = base.try_into()?;
        Ok(config)
    }

    /// Find and load configuration using the XDG lookup chain.
    ///
    /// If `explicit_path` is `Some`, that path is used directly and an error
    /// is returned if it doesn't exist or can't be parsed (no fallback).
    ///
    /// If `explicit_path` is `None`, searches in order:
    /// 1. `$XDG_CONFIG_HOME/calpane/config.toml`
    /// 2. `~/.config/calpane/config.toml`
    /// 3. `./config.toml` (current working directory)
    ///
    /// If no config file is found anywhere, returns the embedded defaults.
    pub fn find_and_load(explicit_path: Option<&Path>) -> Result<ConfigLoadResult> {
        if let Some(path) = explicit_path {
            let config = Self::load(path)?;
            return Ok(ConfigLoadResult {
                config,
                source: Some(path.to_path_buf()),
                used_defaults: false,
            });
        }

        // A config file that exists but fails to load is an error, never a
        // silent fallback to defaults.
        let search_paths = Self::config_search_paths();
        let mut first_error: Option<Error> = None;

        for path in &search_paths {
            if path.exists() {
                match Self::load(path) {
                    Ok(config) => {
                        return Ok(ConfigLoadResult {
                            config,
                            source: Some(path.clone()),
                            used_defaults: false,
                        });
                    }
                    Err(e) => {
                        tracing::error!("config file {:?} exists but failed to load: {}", path, e);
                        if first_error.is_none() {
                            first_error = Some(e);
                        }
                    }
                }
            }
        }

        if let Some(error) = first_error {
            return Err(error);
        }

        tracing::info!("no config file found, using built-in default config");
        let config = Self::from_default_toml()?;

        Ok(ConfigLoadResult {
            config,
            source: None,
            used_defaults: true,
        })
    }

    /// Get the list of paths to search for config files.
    pub fn config_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. $XDG_CONFIG_HOME/calpane/config.toml
        if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg_config).join("calpane/config.toml"));
        }

        // 2. ~/.config/calpane/config.toml
        if let Ok(home) = env::var("HOME") {
            paths.push(PathBuf::from(home).join(".config/calpane/config.toml"));
        }

        // 3. ./config.toml (cwd)
        paths.push(PathBuf::from("config.toml"));

        paths
    }

    /// Validate the configuration, collecting every invalid value.
    ///
    /// Note that `calendar.start_month` is deliberately not validated: an
    /// unknown month name falls back to the current month at runtime.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if !VALID_THEME_MODES.contains(&self.theme.mode.as_str()) {
            errors.push(format!(
                "theme.mode: invalid value '{}', expected one of: {}",
                self.theme.mode,
                VALID_THEME_MODES.join(", ")
            ));
        }

        // theme.accent: "none" or a hex color.
        let accent = self.theme.accent.as_str();
        if accent != "none" && parse_hex_color(accent).is_none() {
            errors.push(format!(
                "theme.accent: invalid value '{}', expected 'none' or a hex color like '#3b82f6'",
                accent
            ));
        }

        if self.theme.font_family.trim().is_empty() {
            errors.push("theme.font_family: must not be empty".to_string());
        }

        if self.window.width == 0 {
            errors.push("window.width: must be greater than 0".to_string());
        }
        if self.window.height == 0 {
            errors.push("window.height: must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::ConfigValidation(errors))
        }
    }

    /// Check for potential configuration issues and return warnings.
    ///
    /// Unlike `validate()`, these are non-fatal issues that might indicate
    /// typos or surprising combinations.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.window.width < 640 || self.window.height < 480 {
            warnings.push(format!(
                "window: {}x{} is small; the month grid may clip below 640x480",
                self.window.width, self.window.height
            ));
        }

        if !self.calendar.show_month_picker && !self.calendar.start_month.is_empty() {
            warnings.push(
                "calendar.start_month is set but the month picker is hidden; \
                 month navigation is limited to the header arrows"
                    .to_string(),
            );
        }

        warnings
    }

    /// Print a human-readable summary of the configuration.
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();

        lines.push("Window:".to_string());
        lines.push(format!(
            "  size: {}x{} ({})",
            self.window.width,
            self.window.height,
            if self.window.resizable {
                "resizable"
            } else {
                "fixed"
            }
        ));

        lines.push("\nTheme:".to_string());
        lines.push(format!("  mode: {}", self.theme.mode));
        lines.push(format!("  accent: {}", self.theme.accent));
        lines.push(format!("  font_family: {}", self.theme.font_family));

        lines.push("\nCalendar:".to_string());
        lines.push(format!(
            "  start_month: {}",
            if self.calendar.start_month.is_empty() {
                "(current month)"
            } else {
                &self.calendar.start_month
            }
        ));
        lines.push(format!("  show_stats: {}", self.calendar.show_stats));
        lines.push(format!(
            "  show_month_picker: {}",
            self.calendar.show_month_picker
        ));
        lines.push(format!("  show_legend: {}", self.calendar.show_legend));

        lines.join("\n")
    }
}

/// Deep merge two TOML tables, with `overlay` values taking precedence.
///
/// For nested tables, recursively merges. For arrays and other values,
/// the overlay value completely replaces the base value.
fn deep_merge_toml(base: &mut Table, overlay: Table) {
    for (key, overlay_value) in overlay {
        match (base.get_mut(&key), overlay_value) {
            // Both are tables: recursively merge
            (Some(toml::Value::Table(base_table)), toml::Value::Table(overlay_table)) => {
                deep_merge_toml(base_table, overlay_table);
            }
            // Otherwise: overlay value wins (insert or replace)
            (_, overlay_value) => {
                base.insert(key, overlay_value);
            }
        }
    }
}

/// Window geometry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    /// Initial window width in pixels.
    pub width: u32,

    /// Initial window height in pixels.
    pub height: u32,

    /// Whether the window can be resized.
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 980,
            height: 760,
            resizable: true,
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Theme mode at startup: "light" or "dark".
    /// The in-app toggle flips the mode at runtime without touching config.
    pub mode: String,

    /// Accent color: "none" for monochrome, or a hex color like "#3b82f6".
    pub accent: String,

    /// Base font family for all text.
    pub font_family: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: "light".to_string(),
            accent: "#3b82f6".to_string(),
            font_family: "Cantarell, sans-serif".to_string(),
        }
    }
}

/// Calendar view configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    /// Month shown at startup, as a lowercase month name ("january" ..
    /// "december"). Empty or unknown names open on the current month.
    pub start_month: String,

    /// Show the four year-statistics cards.
    pub show_stats: bool,

    /// Show the 12-tile month picker.
    pub show_month_picker: bool,

    /// Show the today/weekend legend beneath the day grid.
    pub show_legend: bool,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            start_month: String::new(),
            show_stats: true,
            show_month_picker: true,
            show_legend: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.window.width, 980);
        assert_eq!(config.window.height, 760);
        assert_eq!(config.theme.mode, "light");
        assert_eq!(config.theme.accent, "#3b82f6");
        assert!(config.calendar.start_month.is_empty());
        assert!(config.calendar.show_stats);
    }

    #[test]
    fn test_default_config_validates() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_embedded_default_config_parses_and_validates() {
        let config = Config::from_default_toml().expect("embedded default config should parse");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_embedded_default_matches_struct_defaults() {
        let from_toml = Config::from_default_toml().expect("embedded default config should parse");
        let from_struct = Config::default();

        assert_eq!(from_toml.window.width, from_struct.window.width);
        assert_eq!(from_toml.theme.mode, from_struct.theme.mode);
        assert_eq!(from_toml.theme.accent, from_struct.theme.accent);
        assert_eq!(
            from_toml.calendar.start_month,
            from_struct.calendar.start_month
        );
    }

    #[test]
    fn test_parse_minimal_toml() {
        // Direct TOML parsing (without merge) uses struct defaults
        let toml = r#"
            [window]
            width = 640
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.window.width, 640);
        // Struct defaults fill the rest
        assert_eq!(config.window.height, 760);
        assert_eq!(config.theme.mode, "light");
    }

    #[test]
    fn test_load_with_defaults_merges_sections() {
        let config = Config::load_with_defaults(
            r#"
            [theme]
            mode = "dark"
        "#,
        )
        .unwrap();

        assert_eq!(config.theme.mode, "dark");
        // Untouched keys come from the embedded defaults, not zero values.
        assert_eq!(config.theme.accent, "#3b82f6");
        assert_eq!(config.window.width, 980);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result = Config::load_with_defaults(
            r#"
            [theme]
            shade = "dark"
        "#,
        );
        assert!(result.is_err(), "unknown keys should be a parse error");
    }

    #[test]
    fn test_validation_rejects_invalid_theme_mode() {
        let mut config = Config::default();
        config.theme.mode = "auto".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("theme.mode"));
    }

    #[test]
    fn test_validation_rejects_invalid_accent() {
        let mut config = Config::default();
        config.theme.accent = "reddish".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("theme.accent"));

        config.theme.accent = "none".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_collects_multiple_errors() {
        let mut config = Config::default();
        config.theme.mode = "sepia".to_string();
        config.window.width = 0;

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("theme.mode"));
        assert!(err.contains("window.width"));
    }

    #[test]
    fn test_start_month_is_never_a_validation_error() {
        // Unknown start months degrade to the current month at runtime;
        // validation stays silent about them.
        let mut config = Config::default();
        config.calendar.start_month = "xyz".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_warnings_flag_small_windows() {
        let mut config = Config::default();
        config.window.width = 320;
        config.window.height = 200;
        assert!(!config.warnings().is_empty());
        assert!(Config::default().warnings().is_empty());
    }

    #[test]
    fn test_summary_contains_sections() {
        let summary = Config::default().summary();
        assert!(summary.contains("Window:"));
        assert!(summary.contains("Theme:"));
        assert!(summary.contains("Calendar:"));
        assert!(summary.contains("start_month: (current month)"));
    }
}
