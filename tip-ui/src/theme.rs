use gpui::{App, Window, WindowAppearance};
use gpui_component::{Theme, ThemeMode};
use tracing::debug;

use crate::config::ThemePreference;

/// Maps the configured preference onto a concrete light/dark mode.
///
/// `System` follows the appearance gpui reports for the window.
pub fn resolve_mode(
    preference: ThemePreference,
    appearance: WindowAppearance,
) -> ThemeMode {
    match preference {
        ThemePreference::Light => ThemeMode::Light,
        ThemePreference::Dark => ThemeMode::Dark,
        ThemePreference::System => match appearance {
            WindowAppearance::Dark | WindowAppearance::VibrantDark => ThemeMode::Dark,
            WindowAppearance::Light | WindowAppearance::VibrantLight => ThemeMode::Light,
        },
    }
}

pub fn apply_theme(
    preference: ThemePreference,
    window: &mut Window,
    cx: &mut App,
) {
    let mode = resolve_mode(preference, window.appearance());
    debug!(?preference, ?mode, "applying theme");
    Theme::change(mode, Some(window), cx);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_preferences_ignore_the_system() {
        assert!(matches!(
            resolve_mode(ThemePreference::Dark, WindowAppearance::Light),
            ThemeMode::Dark
        ));
        assert!(matches!(
            resolve_mode(ThemePreference::Light, WindowAppearance::VibrantDark),
            ThemeMode::Light
        ));
    }

    #[test]
    fn system_preference_follows_window_appearance() {
        assert!(matches!(
            resolve_mode(ThemePreference::System, WindowAppearance::VibrantDark),
            ThemeMode::Dark
        ));
        assert!(matches!(
            resolve_mode(ThemePreference::System, WindowAppearance::Light),
            ThemeMode::Light
        ));
    }
}
