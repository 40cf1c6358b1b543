// SPDX-License-Identifier: MPL-2.0
//! Full-window gallery modal layer.
//!
//! Press containment: the backdrop is a mouse area emitting
//! `BackdropPressed`; the image sits in its own mouse area emitting
//! `ContentPressed`, and the controls are buttons. Inner widgets capture the
//! press first, so only presses on the dim area close the modal.

use crate::app::config::MODAL_SLIDE_DISTANCE;
use crate::app::Message;
use crate::gallery::modal::{self, Modal};
use crate::i18n::fluent::I18n;
use crate::portfolio::Catalog;
use crate::ui::artwork;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::transition::Transition;
use iced::widget::{button, mouse_area, text, Column, Container, Row, Space};
use iced::{alignment, ContentFit, Element, Length, Padding};
use std::time::Instant;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub modal: &'a Modal,
    pub catalog: &'a Catalog,
    pub slide: Option<Transition>,
    pub now: Instant,
}

/// Horizontal entry offset of the current image. Positive values push it to
/// the right; the offset shrinks to zero as the slide completes.
#[must_use]
pub fn slide_offset(direction: modal::SlideDirection, eased_progress: f32) -> f32 {
    direction.sign() * MODAL_SLIDE_DISTANCE * (1.0 - eased_progress.clamp(0.0, 1.0))
}

/// The modal layer, or `None` while the modal is closed.
pub fn view<'a>(ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    let reference = ctx.modal.current_image()?;
    let total = ctx.modal.images().len();

    let progress = ctx.slide.map_or(1.0, |slide| slide.eased(ctx.now));
    let offset = slide_offset(ctx.modal.slide_direction(), progress);

    let image = artwork::view(
        ctx.catalog.image(reference),
        progress,
        ContentFit::Contain,
        Length::Shrink,
        Length::Shrink,
        ctx.i18n.tr("image-unavailable"),
    );
    let content = mouse_area(image).on_press(Message::Modal(modal::Message::ContentPressed));
    let stage = Container::new(content)
        .padding(Padding {
            left: offset.max(0.0),
            right: (-offset).max(0.0),
            ..Padding::ZERO
        })
        .width(Length::FillPortion(8))
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let mut middle = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .height(Length::Fill);
    if total > 1 {
        middle = middle
            .push(control("‹", modal::Message::Previous))
            .push(stage)
            .push(control("›", modal::Message::Next));
    } else {
        middle = middle.push(stage);
    }

    let counter = Container::new(
        text(ctx.i18n.tr_with_args(
            "modal-counter",
            &[
                ("current", &(ctx.modal.current_index() + 1).to_string()),
                ("total", &total.to_string()),
            ],
        ))
        .size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::overlay::indicator(radius::FULL));

    let top = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(counter)
        .push(Space::new().width(Length::Fill))
        .push(control("✕", modal::Message::Close));

    let layer = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(top)
            .push(middle),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::LG)
    .style(styles::overlay::backdrop);

    Some(
        mouse_area(layer)
            .on_press(Message::Modal(modal::Message::BackdropPressed))
            .into(),
    )
}

fn control<'a>(glyph: &'static str, message: modal::Message) -> Element<'a, Message> {
    button(
        text(glyph)
            .size(typography::TITLE_MD)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fixed(sizing::MODAL_CONTROL))
    .height(Length::Fixed(sizing::MODAL_CONTROL))
    .on_press(Message::Modal(message))
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_HOVER,
    ))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::SlideDirection;

    #[test]
    fn next_enters_from_the_right() {
        assert_eq!(slide_offset(SlideDirection::Right, 0.0), MODAL_SLIDE_DISTANCE);
    }

    #[test]
    fn previous_enters_from_the_left() {
        assert_eq!(slide_offset(SlideDirection::Left, 0.0), -MODAL_SLIDE_DISTANCE);
    }

    #[test]
    fn offset_vanishes_when_slide_completes() {
        assert_eq!(slide_offset(SlideDirection::Right, 1.0), 0.0);
        assert_eq!(slide_offset(SlideDirection::Left, 2.0), 0.0);
    }
}
