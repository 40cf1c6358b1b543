// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the portfolio page.

## Organization

- **Palette**: Base colors, including the terminal syntax colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes (cards, carousel, modal, toasts)
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_folio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
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
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.06, 0.06, 0.08);
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.12);
    pub const GRAY_800: Color = Color::from_rgb(0.16, 0.16, 0.19);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.33);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.45, 0.5);
    pub const GRAY_200: Color = Color::from_rgb(0.78, 0.78, 0.8);
    pub const GRAY_100: Color = Color::from_rgb(0.9, 0.9, 0.92);
    pub const GRAY_50: Color = Color::from_rgb(0.97, 0.97, 0.98);

    // Brand colors (violet scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.62, 0.5, 0.98);
    pub const PRIMARY_500: Color = Color::from_rgb(0.52, 0.38, 0.93);
    pub const PRIMARY_600: Color = Color::from_rgb(0.43, 0.29, 0.84);

    // Accent (cyan) used for chips and the cursor
    pub const ACCENT_400: Color = Color::from_rgb(0.25, 0.82, 0.9);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);

    // Terminal syntax colors
    pub const SYNTAX_KEYWORD: Color = Color::from_rgb(0.78, 0.47, 0.87);
    pub const SYNTAX_STRING: Color = Color::from_rgb(0.6, 0.8, 0.47);
    pub const SYNTAX_TYPE: Color = Color::from_rgb(0.9, 0.75, 0.45);
    pub const SYNTAX_PROPERTY: Color = Color::from_rgb(0.88, 0.42, 0.46);
    pub const SYNTAX_BOOLEAN: Color = Color::from_rgb(0.82, 0.6, 0.4);
    pub const SYNTAX_FUNCTION: Color = Color::from_rgb(0.38, 0.68, 0.94);
    pub const SYNTAX_NUMBER: Color = Color::from_rgb(0.82, 0.6, 0.4);
    pub const SYNTAX_COMMENT: Color = Color::from_rgb(0.45, 0.5, 0.55);
    pub const SYNTAX_PLAIN: Color = Color::from_rgb(0.8, 0.82, 0.86);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Dim layer behind the gallery modal.
    pub const BACKDROP: f32 = 0.85;

    /// Inactive carousel dot.
    pub const DOT_INACTIVE: f32 = 0.4;
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
    pub const XXL: f32 = 48.0; // 6 units
    pub const SECTION: f32 = 96.0; // 12 units, between page sections
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Widest the page content column grows.
    pub const CONTENT_MAX_WIDTH: f32 = 1080.0;

    // Project cards
    pub const CARD_WIDTH: f32 = 340.0;
    pub const CARD_IMAGE_HEIGHT: f32 = 200.0;
    pub const CARD_MIN_HEIGHT: f32 = 420.0;

    // Carousel
    pub const DOT_SIZE: f32 = 10.0;
    pub const CAROUSEL_CONTROL: f32 = 32.0;

    // Gallery modal
    pub const MODAL_CONTROL: f32 = 48.0;

    // Hero tiles
    pub const TILE_WIDTH: f32 = 180.0;
    pub const TILE_HEIGHT: f32 = 96.0;

    // Terminal
    pub const TERMINAL_HEIGHT: f32 = 320.0;
    pub const TERMINAL_GUTTER: f32 = 36.0;

    // Toasts
    pub const TOAST_WIDTH: f32 = 320.0;

    // Stack groups
    pub const STACK_GROUP_WIDTH: f32 = 260.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale for a consistent text hierarchy.

    /// Hero name
    pub const DISPLAY: f32 = 56.0;

    /// Section headings
    pub const TITLE_LG: f32 = 32.0;

    /// Card titles
    pub const TITLE_MD: f32 = 20.0;

    /// Sub-headings, role line
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    /// Terminal code text
    pub const CODE: f32 = 13.0;

    /// Chips, counters, captions
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
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
    pub const XL: f32 = 20.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.25,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color {
            a: 0.4,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 12.0 },
        blur_radius: 32.0,
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
    assert!(spacing::SECTION > spacing::XXL);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);
    assert!(opacity::DOT_INACTIVE > 0.0 && opacity::DOT_INACTIVE < 1.0);

    assert!(sizing::CARD_WIDTH < sizing::CONTENT_MAX_WIDTH);
    assert!(sizing::CARD_IMAGE_HEIGHT < sizing::CARD_MIN_HEIGHT);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CODE);
    assert!(typography::CODE > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
