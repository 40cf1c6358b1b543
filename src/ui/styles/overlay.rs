// SPDX-License-Identifier: MPL-2.0
//! Styles for the gallery modal layer.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{BLACK, WHITE},
};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn container_background() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

fn container_border() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..WHITE
    }
}

/// Dimmed full-window layer behind the modal image.
pub fn backdrop(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.backdrop)),
        text_color: Some(scheme.overlay_text),
        ..Default::default()
    }
}

/// Pill-shaped indicator such as the "2 / 4" counter.
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(container_background())),
        text_color: Some(WHITE),
        border: Border {
            color: container_border(),
            width: border::WIDTH_SM,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_is_translucent() {
        match backdrop(&Theme::Dark).background {
            Some(Background::Color(c)) => assert_eq!(c.a, opacity::BACKDROP),
            other => panic!("unexpected background {other:?}"),
        }
    }
}
