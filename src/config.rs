//! Configuration loader/writer plus strongly typed settings structures.
//!
//! Deserializes the config TOML we ship, resolves the per-user data
//! directory, loads the theme palettes (embedded defaults, overridable by
//! files in the data directory), and validates everything up front so the
//! app fails fast on a broken setup instead of limping along.

use crate::data::persona::{MoodOption, RoleCard};
use crate::theme::{AppTheme, ThemeMode};
use anyhow::{bail, Context, Result};
use include_dir::{include_dir, Dir};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

// Embed default configuration files at compile time
const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");

// Embed the theme directory - one TOML palette per mode
static THEMES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/defaults/themes");

/// On-disk configuration shape
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    transition: TransitionConfig,
    #[serde(default)]
    moods: Vec<MoodOption>,
    #[serde(default)]
    roles: Vec<RoleCard>,
}

/// Appearance settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// Starting theme id ("light" or "dark")
    pub theme: String,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
        }
    }
}

/// Section-swap animation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionConfig {
    /// Duration of one fade stage in milliseconds
    pub fade_ms: u64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self { fade_ms: 500 }
    }
}

/// Loaded and validated application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub appearance: AppearanceConfig,
    pub transition: TransitionConfig,
    pub moods: Vec<MoodOption>,
    pub roles: Vec<RoleCard>,

    light_theme: AppTheme,
    dark_theme: AppTheme,
}

impl Config {
    /// Resolve the data directory.
    ///
    /// Priority: explicit override, MOODMATE_DIR env var, ~/.moodmate
    pub fn base_dir(override_dir: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(dir) = override_dir {
            return Ok(dir);
        }
        if let Ok(env_dir) = std::env::var("MOODMATE_DIR") {
            return Ok(PathBuf::from(env_dir));
        }
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".moodmate"))
    }

    /// Load configuration from the data directory, creating the default
    /// config file on first run.
    pub fn load(override_dir: Option<PathBuf>) -> Result<Self> {
        let base = Self::base_dir(override_dir)?;
        fs::create_dir_all(&base)
            .with_context(|| format!("Failed to create data directory {:?}", base))?;

        let config_path = base.join("config.toml");
        let source = if config_path.exists() {
            fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {:?}", config_path))?
        } else {
            fs::write(&config_path, DEFAULT_CONFIG)
                .with_context(|| format!("Failed to write default config to {:?}", config_path))?;
            DEFAULT_CONFIG.to_string()
        };

        let file: ConfigFile = toml::from_str(&source)
            .with_context(|| format!("Failed to parse {:?}", config_path))?;

        let light_theme = load_theme(&base, ThemeMode::Light)?;
        let dark_theme = load_theme(&base, ThemeMode::Dark)?;

        Ok(Self {
            appearance: file.appearance,
            transition: file.transition,
            moods: file.moods,
            roles: file.roles,
            light_theme,
            dark_theme,
        })
    }

    /// Build a config entirely from the embedded defaults (no filesystem).
    pub fn embedded_default() -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(DEFAULT_CONFIG).context("Embedded default config is invalid")?;
        Ok(Self {
            appearance: file.appearance,
            transition: file.transition,
            moods: file.moods,
            roles: file.roles,
            light_theme: embedded_theme(ThemeMode::Light)?,
            dark_theme: embedded_theme(ThemeMode::Dark)?,
        })
    }

    /// Check invariants the rest of the app depends on.
    pub fn validate(&self) -> Result<()> {
        if self.moods.is_empty() {
            bail!("config defines no moods; at least one [[moods]] entry is required");
        }
        if self.roles.is_empty() {
            bail!("config defines no roles; at least one [[roles]] entry is required");
        }
        if self.transition.fade_ms == 0 {
            bail!("transition.fade_ms must be greater than zero");
        }
        ThemeMode::from_id(&self.appearance.theme)?;
        Ok(())
    }

    /// The theme mode the app starts in
    pub fn initial_theme_mode(&self) -> Result<ThemeMode> {
        ThemeMode::from_id(&self.appearance.theme)
    }

    /// Palette for a theme mode
    pub fn theme(&self, mode: ThemeMode) -> &AppTheme {
        match mode {
            ThemeMode::Light => &self.light_theme,
            ThemeMode::Dark => &self.dark_theme,
        }
    }

    /// Look up a configured mood by id
    pub fn mood(&self, id: &str) -> Option<&MoodOption> {
        self.moods.iter().find(|m| m.id == id)
    }

    /// Look up a configured role card by id
    pub fn role(&self, id: &str) -> Option<&RoleCard> {
        self.roles.iter().find(|r| r.id == id)
    }
}

/// Load a palette, preferring a user override in `<base>/themes/<id>.toml`
/// over the embedded default.
fn load_theme(base: &std::path::Path, mode: ThemeMode) -> Result<AppTheme> {
    let override_path = base.join("themes").join(format!("{}.toml", mode.id()));
    if override_path.exists() {
        let source = fs::read_to_string(&override_path)
            .with_context(|| format!("Failed to read {:?}", override_path))?;
        return AppTheme::from_toml(&source)
            .with_context(|| format!("Invalid theme file {:?}", override_path));
    }
    embedded_theme(mode)
}

/// Load an embedded palette by mode id
fn embedded_theme(mode: ThemeMode) -> Result<AppTheme> {
    let file_name = format!("{}.toml", mode.id());
    let file = THEMES_DIR
        .get_file(&file_name)
        .with_context(|| format!("Embedded theme '{}' is missing", file_name))?;
    let source = file
        .contents_utf8()
        .with_context(|| format!("Embedded theme '{}' is not UTF-8", file_name))?;
    AppTheme::from_toml(source).with_context(|| format!("Embedded theme '{}' is invalid", file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_default_parses_and_validates() {
        let config = Config::embedded_default().unwrap();
        config.validate().unwrap();
        assert_eq!(config.appearance.theme, "light");
        assert_eq!(config.transition.fade_ms, 500);
        assert!(config.mood("happy").is_some());
        assert!(config.role("calm").is_some());
        assert!(config.role("baby").is_some());
    }

    #[test]
    fn test_empty_mood_table_fails_validation() {
        let mut config = Config::embedded_default().unwrap();
        config.moods.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_theme_id_fails_validation() {
        let mut config = Config::embedded_default().unwrap();
        config.appearance.theme = "sepia".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_both_palettes_are_embedded() {
        let config = Config::embedded_default().unwrap();
        assert_eq!(config.theme(ThemeMode::Light).name, "Light");
        assert_eq!(config.theme(ThemeMode::Dark).name, "Dark");
    }
}
