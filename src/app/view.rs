// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a stack of up to three layers: the scrollable page, the
//! gallery modal while it is open, and the toast overlay while toasts are
//! visible.

use super::Message;
use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::portfolio::{Portfolio, ProjectId};
use crate::ui::gallery_modal;
use crate::ui::notifications::{self, Toast};
use crate::ui::project_card::CardFade;
use crate::ui::sections::{self, PAGE_SCROLLABLE_ID};
use crate::ui::styles;
use crate::ui::terminal::Typewriter;
use crate::ui::theming::ThemeMode;
use crate::ui::transition::Transition;
use crate::ui::widgets::scroll_locked;
use iced::widget::{Container, Id, Scrollable, Stack};
use iced::{Element, Length};
use std::collections::HashMap;
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub portfolio: &'a Portfolio,
    pub gallery: &'a Gallery,
    pub card_fades: &'a HashMap<ProjectId, CardFade>,
    pub modal_slide: Option<Transition>,
    pub typewriter: &'a Typewriter,
    pub notifications: &'a notifications::Manager,
    pub theme_mode: ThemeMode,
    pub now: Instant,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = sections::view(&sections::ViewContext {
        i18n: ctx.i18n,
        portfolio: ctx.portfolio,
        selection: ctx.gallery.selection(),
        card_fades: ctx.card_fades,
        typewriter: ctx.typewriter,
        theme_mode: ctx.theme_mode,
        now: ctx.now,
    });

    let scrollable = Scrollable::new(page)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill);

    let base = Container::new(scroll_locked(
        scrollable,
        ctx.gallery.scroll_lock().is_locked(),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::page);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if let Some(modal) = gallery_modal::view(gallery_modal::ViewContext {
        i18n: ctx.i18n,
        modal: ctx.gallery.modal(),
        catalog: &ctx.portfolio.catalog,
        slide: ctx.modal_slide,
        now: ctx.now,
    }) {
        layers = layers.push(modal);
    }

    if let Some(toasts) = Toast::view_overlay(ctx.notifications, ctx.i18n) {
        layers = layers.push(toasts.map(Message::Notification));
    }

    layers.into()
}
