// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme selection.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors the screens pick from, on top of the iced theme palette.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub text_secondary: Color,
    pub error: Color,
    pub star: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            text_secondary: palette::GRAY_700,
            error: palette::ERROR_500,
            star: palette::STAR_500,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            text_secondary: palette::GRAY_200,
            error: palette::ERROR_500,
            star: palette::STAR_500,
        }
    }

    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Mode selected after this one by the theme toggle.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::System => "System",
        }
    }

    /// Resolves the iced theme for this mode.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // Depends on the host, only check it does not panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn explicit_modes_map_to_builtin_themes() {
        assert_eq!(ThemeMode::Light.theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
    }

    #[test]
    fn color_scheme_follows_theme_darkness() {
        let dark = ColorScheme::for_theme(&Theme::Dark);
        assert_eq!(dark.text_secondary, palette::GRAY_200);
        let light = ColorScheme::for_theme(&Theme::Light);
        assert_eq!(light.text_secondary, palette::GRAY_700);
    }

    #[test]
    fn next_cycles_through_every_mode() {
        let mut mode = ThemeMode::Light;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(mode);
            mode = mode.next();
        }
        assert_eq!(seen, [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System]);
        assert_eq!(mode, ThemeMode::Light);
    }

    #[test]
    fn theme_mode_serializes_lowercase() {
        let json = serde_json::to_string(&ThemeMode::System).expect("serialize");
        assert_eq!(json, "\"system\"");
    }
}
