// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the swipe deck, buttons and toasts.

## Organization

- **Palette**: Base and semantic colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Card, badge and toast sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use swipe_shop::ui::design_tokens::{palette, opacity};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};
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
    pub const GRAY_900: Color = Color::from_rgb(0.08, 0.08, 0.1);
    pub const GRAY_800: Color = Color::from_rgb(0.14, 0.14, 0.17);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (purple to pink)
    pub const PRIMARY_400: Color = Color::from_rgb(0.66, 0.45, 0.98);
    pub const PRIMARY_500: Color = Color::from_rgb(0.55, 0.33, 0.93);
    pub const PRIMARY_600: Color = Color::from_rgb(0.45, 0.25, 0.82);
    pub const ACCENT_500: Color = Color::from_rgb(0.93, 0.29, 0.6);

    // Swipe decisions
    pub const SAVE_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const SKIP_500: Color = Color::from_rgb(0.898, 0.224, 0.208);

    // Semantic colors
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);

    /// Placeholder fills for product artwork, picked per item.
    pub const CARD_SWATCHES: [Color; 4] = [
        Color::from_rgb(0.42, 0.27, 0.62),
        Color::from_rgb(0.2, 0.32, 0.52),
        Color::from_rgb(0.55, 0.55, 0.58),
        Color::from_rgb(0.62, 0.3, 0.24),
    ];
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

    /// Card waiting behind the top card.
    pub const NEXT_CARD: f32 = 0.8;

    /// Hint text under the deck.
    pub const HINT: f32 = 0.6;
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
    // Card
    pub const CARD_MAX_WIDTH: f32 = 360.0;
    pub const CARD_MAX_HEIGHT: f32 = 540.0;
    /// Scale of the next card behind the top card.
    pub const NEXT_CARD_SCALE: f32 = 0.95;

    /// Diameter of the SAVE / SKIP badge.
    pub const INDICATOR: f32 = 72.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 44.0;

    // Component widths
    pub const TOAST_WIDTH: f32 = 300.0;

    // Window
    pub const WINDOW_WIDTH: f32 = 420.0;
    pub const WINDOW_HEIGHT: f32 = 760.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Header title
    pub const TITLE_LG: f32 = 26.0;

    /// Product name, empty-deck title
    pub const TITLE_MD: f32 = 20.0;

    /// Price
    pub const PRICE: f32 = 24.0;

    /// Standard body - Most UI text, labels
    pub const BODY: f32 = 14.0;

    /// Brand badge, hint, badges
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
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 20.0;
    pub const FULL: f32 = 9999.0; // Pill shape
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
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::NEXT_CARD > 0.0 && opacity::NEXT_CARD < 1.0);

    assert!(sizing::NEXT_CARD_SCALE > 0.0 && sizing::NEXT_CARD_SCALE < 1.0);
    assert!(sizing::CARD_MAX_HEIGHT > sizing::CARD_MAX_WIDTH);
    assert!(sizing::INDICATOR < sizing::CARD_MAX_WIDTH / 2.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
