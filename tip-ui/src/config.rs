//! User preferences loaded from a TOML file.
//!
//! Every section is optional; anything missing takes its default. The
//! currency locale is deliberately absent: it always comes from the
//! environment.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tip_core::TipTier;

/// Error returned when the preferences file cannot be read or parsed.
#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("cannot read preferences file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid preferences file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Light/dark appearance of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    System,
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowPreferences {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowPreferences {
    fn default() -> Self {
        Self {
            width: 420.0,
            height: 560.0,
        }
    }
}

/// Initial state of the calculator inputs when the window opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CalculatorDefaults {
    pub tier: TipTier,
    pub round_up: bool,
}

impl Default for CalculatorDefaults {
    fn default() -> Self {
        Self {
            tier: TipTier::TwentyPercent,
            round_up: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Bare level or full `EnvFilter` directive.
    pub level: String,
    /// Append log records to this file when set.
    pub file: Option<PathBuf>,
    pub stdout: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            stdout: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub theme: ThemePreference,
    pub window: WindowPreferences,
    pub calculator: CalculatorDefaults,
    pub logging: LogSettings,
}

impl Preferences {
    /// Parses preferences from TOML text. `origin` is only used in error messages.
    pub fn from_toml_str(
        text: &str,
        origin: &Path,
    ) -> Result<Self, PreferencesError> {
        toml::from_str(text).map_err(|source| PreferencesError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Reads preferences from `path`.
    pub fn load(path: &Path) -> Result<Self, PreferencesError> {
        let text = fs::read_to_string(path).map_err(|source| PreferencesError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Reads preferences from `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, PreferencesError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}

impl fmt::Display for Preferences {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Theme:        {:?}", self.theme)?;
        writeln!(
            f,
            "Window:       {} x {}",
            self.window.width, self.window.height
        )?;
        writeln!(f, "Default tier: {}", self.calculator.tier)?;
        writeln!(f, "Round up:     {}", self.calculator.round_up)?;
        write!(f, "Log level:    {}", self.logging.level)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(text: &str) -> Result<Preferences, PreferencesError> {
        Preferences::from_toml_str(text, Path::new("test.toml"))
    }

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(parse("").unwrap(), Preferences::default());
    }

    #[test]
    fn default_calculator_preselects_twenty_percent() {
        let defaults = CalculatorDefaults::default();

        assert_eq!(defaults.tier, TipTier::TwentyPercent);
        assert!(defaults.round_up);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let prefs = parse(
            r#"
            theme = "dark"

            [calculator]
            tier = "eighteen"
            "#,
        )
        .unwrap();

        assert_eq!(prefs.theme, ThemePreference::Dark);
        assert_eq!(prefs.calculator.tier, TipTier::EighteenPercent);
        assert!(prefs.calculator.round_up);
        assert_eq!(prefs.window, WindowPreferences::default());
        assert_eq!(prefs.logging.level, "info");
    }

    #[test]
    fn logging_section_is_read() {
        let prefs = parse(
            r#"
            [logging]
            level = "debug"
            file = "tip.log"
            stdout = false
            "#,
        )
        .unwrap();

        assert_eq!(
            prefs.logging,
            LogSettings {
                level: "debug".to_string(),
                file: Some(PathBuf::from("tip.log")),
                stdout: false,
            }
        );
    }

    #[test]
    fn unknown_tier_is_rejected() {
        let err = parse("[calculator]\ntier = \"ninety\"\n").unwrap_err();

        assert!(matches!(err, PreferencesError::Parse { .. }));
        assert!(err.to_string().contains("test.toml"));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = Preferences::load(Path::new("/nonexistent/tip-time.toml")).unwrap_err();

        assert!(matches!(err, PreferencesError::Read { .. }));
    }

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(
            Preferences::load_or_default(None).unwrap(),
            Preferences::default()
        );
    }
}
