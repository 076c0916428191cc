// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the console, grouped by concern.

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes, including the fixed navbar geometry used for
  outside-click hit testing
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

```
use dns_console::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```

Navbar sizes are layout contracts: the menu renders with exactly these
widths and heights, and the pointer hit test computes regions from them.
Changing one changes both.
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (green scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.86, 0.95, 0.89);
    pub const PRIMARY_400: Color = Color::from_rgb(0.36, 0.76, 0.5);
    pub const PRIMARY_500: Color = Color::from_rgb(0.263, 0.66, 0.404);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.56, 0.33);
    pub const PRIMARY_700: Color = Color::from_rgb(0.14, 0.45, 0.26);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);

    /// Hyperlink text.
    pub const LINK: Color = Color::from_rgb(0.28, 0.52, 0.9);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
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
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;

    // Navigation menu
    pub const NAVBAR_HEIGHT: f32 = 56.0;
    /// Width reserved for the product name at the left of the bar.
    pub const NAV_BRAND_WIDTH: f32 = 160.0;
    /// Every top-level link and group trigger occupies this width.
    pub const NAV_ENTRY_WIDTH: f32 = 150.0;
    pub const MENU_ITEM_HEIGHT: f32 = 36.0;
    pub const DROPDOWN_WIDTH: f32 = 220.0;
    pub const DRAWER_WIDTH: f32 = 260.0;
    /// Below this window width the bar collapses to a hamburger and drawer.
    pub const COMPACT_BREAKPOINT: f32 = 992.0;

    // Filter table
    pub const TABLE_ROW_HEIGHT: f32 = 40.0;
    pub const TABLE_TOGGLE_WIDTH: f32 = 72.0;
    pub const TABLE_COUNT_WIDTH: f32 = 120.0;
    pub const TABLE_DATE_WIDTH: f32 = 180.0;
    pub const TABLE_ACTIONS_WIDTH: f32 = 96.0;

    // Component widths
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const MODAL_WIDTH: f32 = 480.0;
    pub const RULES_EDITOR_HEIGHT: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! Titles head pages and dialogs, body is the primary content text and
    //! captions carry supporting information.

    /// Large title - Page headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Product name, dialog headings
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Form inputs, emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Table captions, timestamps
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Emphasis borders, toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
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

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::NAVBAR_HEIGHT >= sizing::BUTTON_HEIGHT);
    assert!(sizing::DROPDOWN_WIDTH >= sizing::NAV_ENTRY_WIDTH);
    assert!(sizing::COMPACT_BREAKPOINT > sizing::DRAWER_WIDTH);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn full_desktop_bar_fits_above_breakpoint() {
        // Brand plus five entries must fit at the narrowest desktop width.
        let needed = sizing::NAV_BRAND_WIDTH + 5.0 * sizing::NAV_ENTRY_WIDTH + 2.0 * spacing::MD;
        assert!(needed <= sizing::COMPACT_BREAKPOINT);
    }
}
