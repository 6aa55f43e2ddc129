use crate::consts;
use ratatui::style::Style;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Style overrides for the game screen
    pub(crate) theme: ThemeConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist
    /// and `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

/// Raw theme entries as they appear in the configuration file; anything not
/// given falls back to the built-in style
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct ThemeConfig {
    snake: Option<parse_style::Style>,
    food: Option<parse_style::Style>,
    collision: Option<parse_style::Style>,
    score_bar: Option<parse_style::Style>,
    keys: Option<parse_style::Style>,
}

impl ThemeConfig {
    pub(crate) fn to_theme(&self) -> Theme {
        let defaults = Theme::default();
        Theme {
            snake: style_or(self.snake.clone(), defaults.snake),
            food: style_or(self.food.clone(), defaults.food),
            collision: style_or(self.collision.clone(), defaults.collision),
            score_bar: style_or(self.score_bar.clone(), defaults.score_bar),
            key: style_or(self.keys.clone(), defaults.key),
        }
    }
}

fn style_or(configured: Option<parse_style::Style>, fallback: Style) -> Style {
    configured.map(Style::from).unwrap_or(fallback)
}

/// Resolved styles used by the renderer
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Theme {
    pub(crate) snake: Style,
    pub(crate) food: Style,
    pub(crate) collision: Style,
    pub(crate) score_bar: Style,
    pub(crate) key: Style,
}

impl Default for Theme {
    fn default() -> Theme {
        Theme {
            snake: consts::SNAKE_STYLE,
            food: consts::FOOD_STYLE,
            collision: consts::COLLISION_STYLE,
            score_bar: consts::SCORE_BAR_STYLE,
            key: consts::KEY_STYLE,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Modifier};

    #[test]
    fn missing_file_is_the_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config::load(&path, true).unwrap();
        assert_eq!(config.theme.to_theme(), Theme::default());
    }

    #[test]
    fn missing_file_is_an_error_when_required() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert!(Config::load(&path, false).is_err());
    }

    #[test]
    fn theme_overrides_merge_with_defaults() {
        let config: Config = toml::from_str(concat!(
            "[theme]\n",
            "snake = \"bold blue\"\n",
            "score-bar = \"black on white\"\n",
        ))
        .unwrap();
        let theme = config.theme.to_theme();
        assert_eq!(
            theme.snake,
            Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD)
        );
        assert_eq!(
            theme.score_bar,
            Style::new().fg(Color::Black).bg(Color::White)
        );
        assert_eq!(theme.food, consts::FOOD_STYLE);
        assert_eq!(theme.collision, consts::COLLISION_STYLE);
        assert_eq!(theme.key, consts::KEY_STYLE);
    }

    #[test]
    fn empty_config_parses() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.theme.to_theme(), Theme::default());
    }
}
