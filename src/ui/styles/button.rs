// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main call to action (resume download, contact).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, drop) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Disabled => (palette::GRAY_400, palette::GRAY_400, shadow::NONE),
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600, shadow::NONE)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: drop,
        snap: true,
    }
}

/// Borderless text button that highlights in the brand color on hover.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => scheme.brand_primary,
        _ => scheme.text_secondary,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Outlined secondary action (project links, theme toggle).
pub fn outline(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);
    let (background, border_color) = match status {
        button::Status::Hovered | button::Status::Pressed => (
            Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..scheme.brand_primary
            })),
            scheme.brand_primary,
        ),
        _ => (None, scheme.card_border),
    };

    button::Style {
        background,
        text_color: scheme.text_primary,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round translucent control drawn over images (carousel arrows, modal
/// controls).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered | button::Status::Pressed => alpha_hover,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Carousel position dot; the active one is opaque and brand colored.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = if active {
            palette::PRIMARY_400
        } else if matches!(status, button::Status::Hovered) {
            Color {
                a: opacity::OVERLAY_HOVER,
                ..WHITE
            }
        } else {
            Color {
                a: opacity::DOT_INACTIVE,
                ..WHITE
            }
        };

        button::Style {
            background: Some(Background::Color(color)),
            text_color: color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Hero navigation tile.
pub fn tile(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);
    let (border_color, drop) = match status {
        button::Status::Hovered | button::Status::Pressed => (scheme.brand_primary, shadow::LG),
        _ => (scheme.card_border, shadow::MD),
    };

    button::Style {
        background: Some(Background::Color(scheme.card)),
        text_color: scheme.text_primary,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: drop,
        snap: true,
    }
}
