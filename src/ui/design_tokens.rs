// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared constants for the player skins.

- **Palette**: base and accent colors
- **Opacity**: overlay levels
- **Spacing**: 4px-based spacing scale
- **Sizing**: control and track sizes
- **Typography**: font sizes
- **Radius**: corner radii

```
use folio::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};
let padding = spacing::SM;
```
"#]

pub mod palette {
    use iced::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    /// Played portion of the progress bar in the linear and modern skins.
    pub const ACCENT: Color = Color::from_rgb(0.3, 0.6, 0.9);
    /// Played portion of the progress bar in the youtube skin.
    pub const ACCENT_RED: Color = Color::from_rgb(1.0, 0.0, 0.0);
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
}

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const VOLUME_SLIDER_WIDTH: f32 = 80.0;
    pub const TIMELINE_TRACK: f32 = 4.0;
    pub const TIMELINE_TRACK_HOVER: f32 = 6.0;
    pub const SCRUBBER_THUMB: f32 = 12.0;
    pub const THUMBNAIL_WIDTH: f32 = 160.0;
}

pub mod typography {
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0;
}

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > opacity::OVERLAY_SUBTLE);
    assert!(opacity::OVERLAY_STRONG > opacity::OVERLAY_MEDIUM);

    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::TIMELINE_TRACK_HOVER > sizing::TIMELINE_TRACK);
    assert!(sizing::SCRUBBER_THUMB > sizing::TIMELINE_TRACK_HOVER);

    assert!(typography::BODY > typography::CAPTION);
};
