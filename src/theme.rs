//! Application theme system
//!
//! A binary light/dark flag selects between two palettes loaded from TOML.
//! The status-bar icon is a pure function of the flag: light mode shows the
//! moon (tap to go dark), dark mode shows the sun.

use anyhow::{bail, Context, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// The light/dark theme flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Flip to the other mode
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// The toggle-button icon for this mode
    pub fn icon(self) -> ThemeIcon {
        match self {
            ThemeMode::Light => ThemeIcon::Moon,
            ThemeMode::Dark => ThemeIcon::Sun,
        }
    }

    /// Stable id used in config files
    pub fn id(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a config id into a mode
    pub fn from_id(id: &str) -> Result<Self> {
        match id {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => bail!("unknown theme '{}' (expected 'light' or 'dark')", other),
        }
    }
}

/// Theme toggle icon identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeIcon {
    Moon,
    Sun,
}

impl ThemeIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            ThemeIcon::Moon => "🌙",
            ThemeIcon::Sun => "☀",
        }
    }
}

/// Complete palette for one theme mode
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub name: String,
    pub description: String,

    // Card colors
    pub card_border: Color,
    pub card_title: Color,
    pub card_background: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Background colors
    pub background_primary: Color,

    // Mood/role item colors
    pub item_border: Color,
    pub item_border_highlighted: Color,
    pub item_selected: Color,
    pub item_selected_background: Color,

    // Dialog colors
    pub dialog_border: Color,
    pub dialog_background: Color,
    pub dialog_text: Color,

    // Status bar colors
    pub status_text: Color,
    pub status_background: Color,
}

impl AppTheme {
    /// Parse a palette from its TOML source.
    pub fn from_toml(source: &str) -> Result<Self> {
        let file: ThemeFile = toml::from_str(source).context("Failed to parse theme file")?;
        file.into_theme()
    }
}

/// On-disk palette representation (hex color strings)
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ThemeFile {
    name: String,
    #[serde(default)]
    description: String,
    colors: ThemeColors,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ThemeColors {
    card_border: String,
    card_title: String,
    card_background: String,
    text_primary: String,
    text_secondary: String,
    text_muted: String,
    background_primary: String,
    item_border: String,
    item_border_highlighted: String,
    item_selected: String,
    item_selected_background: String,
    dialog_border: String,
    dialog_background: String,
    dialog_text: String,
    status_text: String,
    status_background: String,
}

impl ThemeFile {
    fn into_theme(self) -> Result<AppTheme> {
        let c = &self.colors;
        Ok(AppTheme {
            name: self.name.clone(),
            description: self.description.clone(),
            card_border: parse_hex_color(&c.card_border)?,
            card_title: parse_hex_color(&c.card_title)?,
            card_background: parse_hex_color(&c.card_background)?,
            text_primary: parse_hex_color(&c.text_primary)?,
            text_secondary: parse_hex_color(&c.text_secondary)?,
            text_muted: parse_hex_color(&c.text_muted)?,
            background_primary: parse_hex_color(&c.background_primary)?,
            item_border: parse_hex_color(&c.item_border)?,
            item_border_highlighted: parse_hex_color(&c.item_border_highlighted)?,
            item_selected: parse_hex_color(&c.item_selected)?,
            item_selected_background: parse_hex_color(&c.item_selected_background)?,
            dialog_border: parse_hex_color(&c.dialog_border)?,
            dialog_background: parse_hex_color(&c.dialog_background)?,
            dialog_text: parse_hex_color(&c.dialog_text)?,
            status_text: parse_hex_color(&c.status_text)?,
            status_background: parse_hex_color(&c.status_background)?,
        })
    }
}

/// Parse a "#rrggbb" string to a ratatui Color
pub fn parse_hex_color(hex: &str) -> Result<Color> {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 {
        bail!("malformed hex color '{}'", hex);
    }

    let r = u8::from_str_radix(&digits[0..2], 16)
        .with_context(|| format!("malformed hex color '{}'", hex))?;
    let g = u8::from_str_radix(&digits[2..4], 16)
        .with_context(|| format!("malformed hex color '{}'", hex))?;
    let b = u8::from_str_radix(&digits[4..6], 16)
        .with_context(|| format!("malformed hex color '{}'", hex))?;

    Ok(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_involution() {
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.toggle().toggle(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggle().toggle(), ThemeMode::Dark);
    }

    #[test]
    fn test_icon_is_pure_function_of_mode() {
        assert_eq!(ThemeMode::Light.icon(), ThemeIcon::Moon);
        assert_eq!(ThemeMode::Dark.icon(), ThemeIcon::Sun);
        assert_ne!(ThemeIcon::Moon.glyph(), ThemeIcon::Sun.glyph());
    }

    #[test]
    fn test_mode_ids_round_trip() {
        assert_eq!(ThemeMode::from_id("light").unwrap(), ThemeMode::Light);
        assert_eq!(ThemeMode::from_id("dark").unwrap(), ThemeMode::Dark);
        assert!(ThemeMode::from_id("sepia").is_err());
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(parse_hex_color("#ff0080").unwrap(), Color::Rgb(255, 0, 128));
        assert_eq!(parse_hex_color("ffffff").unwrap(), Color::Rgb(255, 255, 255));
        assert!(parse_hex_color("#fff").is_err());
        assert!(parse_hex_color("#zzzzzz").is_err());
    }
}
