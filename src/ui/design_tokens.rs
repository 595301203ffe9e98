// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the login screen, the task dashboard and the
notification toasts.

## Organization

- **Palette**: Base and semantic colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border** / **Radius** / **Shadow**: Container decoration

## Examples

```
use taskdeck::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let faded_error = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::ERROR_500
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Favorite star
    pub const STAR_500: Color = Color::from_rgb(0.98, 0.8, 0.08);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
    pub const WELCOME_500: Color = Color::from_rgb(0.612, 0.392, 0.878);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;

    /// Toasts playing their exit transition.
    pub const LEAVING: f32 = 0.4;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_MD: f32 = 24.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;

    pub const FORM_WIDTH: f32 = 360.0;
    pub const DASHBOARD_WIDTH: f32 = 640.0;
    pub const TOAST_WIDTH: f32 = 320.0;

    /// Height of the countdown bar under each toast.
    pub const PROGRESS_HEIGHT: f32 = 3.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page headings
    pub const TITLE_LG: f32 = 30.0;

    /// Section headers, toast titles
    pub const TITLE_SM: f32 = 18.0;

    /// Form inputs
    pub const BODY_LG: f32 = 16.0;

    /// Most UI text
    pub const BODY: f32 = 14.0;

    /// Validation hints
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OPAQUE == 1.0);
    assert!(border::WIDTH_MD > 0.0);
    assert!(opacity::LEAVING > 0.0 && opacity::LEAVING < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::TOAST_WIDTH < sizing::DASHBOARD_WIDTH);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }
}
