// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Gallery state changes are applied first; the effects they report then
//! start the matching cosmetic transition. Navigation never waits on a
//! transition.

use super::config::{CARD_CROSSFADE_MS, MODAL_SLIDE_MS};
use super::{persistence, Message};
use crate::error::{Error, Result};
use crate::gallery::{self, modal, Effect, Gallery};
use crate::i18n::fluent::I18n;
use crate::portfolio::{Portfolio, ProjectId};
use crate::ui::notifications::{self, Notification};
use crate::ui::project_card::CardFade;
use crate::ui::sections::{Section, PAGE_SCROLLABLE_ID};
use crate::ui::terminal::Typewriter;
use crate::ui::theming::ThemeMode;
use crate::ui::transition::Transition;
use iced::keyboard::{self, key};
use iced::widget::{operation, Id};
use iced::Task;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use unic_langid::LanguageIdentifier;

/// Mutable view of the app state the handlers work on.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub theme_mode: &'a mut ThemeMode,
    pub portfolio: &'a Portfolio,
    pub gallery: &'a mut Gallery,
    pub card_fades: &'a mut HashMap<ProjectId, CardFade>,
    pub modal_slide: &'a mut Option<Transition>,
    pub typewriter: &'a mut Typewriter,
    pub notifications: &'a mut notifications::Manager,
    pub now: &'a mut Instant,
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    let effect = ctx.gallery.handle(message, &ctx.portfolio.catalog);
    apply_gallery_effect(ctx, effect, Instant::now());
    Task::none()
}

/// Starts the transition matching a gallery effect.
pub fn apply_gallery_effect(ctx: &mut UpdateContext<'_>, effect: Effect, now: Instant) {
    *ctx.now = now;
    match effect {
        Effect::None => {}
        Effect::ImageChanged { project, from, to } => {
            log::debug!("project {} image {from} -> {to}", project.index());
            ctx.card_fades.insert(
                project,
                CardFade {
                    from,
                    transition: Transition::start(now, Duration::from_millis(CARD_CROSSFADE_MS)),
                },
            );
        }
        Effect::ModalOpened { project, index } => {
            log::debug!("gallery opened for project {} at {index}", project.index());
            *ctx.modal_slide = Some(Transition::start(now, Duration::from_millis(MODAL_SLIDE_MS)));
        }
        Effect::ModalNavigated { index, direction } => {
            log::debug!("gallery moved to {index} ({direction:?})");
            *ctx.modal_slide = Some(Transition::start(now, Duration::from_millis(MODAL_SLIDE_MS)));
        }
        Effect::ModalClosed => {
            log::debug!("gallery closed");
            *ctx.modal_slide = None;
        }
    }
}

/// Maps a key press to a modal message. Only meaningful while open.
#[must_use]
pub fn modal_message_for_key(key: &keyboard::Key) -> Option<modal::Message> {
    match key {
        keyboard::Key::Named(key::Named::Escape) => Some(modal::Message::Close),
        keyboard::Key::Named(key::Named::ArrowLeft) => Some(modal::Message::Previous),
        keyboard::Key::Named(key::Named::ArrowRight) => Some(modal::Message::Next),
        _ => None,
    }
}

pub fn handle_keyboard(ctx: &mut UpdateContext<'_>, key: &keyboard::Key) -> Task<Message> {
    if !ctx.gallery.modal().is_open() {
        return Task::none();
    }
    match modal_message_for_key(key) {
        Some(message) => handle_gallery_message(ctx, gallery::Message::Modal(message)),
        None => Task::none(),
    }
}

/// Opens `url` in the system browser off the UI thread.
pub fn handle_open_link(url: String) -> Task<Message> {
    log::info!("opening {url}");
    let target = url.clone();
    Task::perform(open_link(target), move |result| Message::LinkOpened {
        url: url.clone(),
        result,
    })
}

async fn open_link(url: String) -> Result<()> {
    tokio::task::spawn_blocking(move || webbrowser::open(&url))
        .await
        .map_err(|e| Error::Link(e.to_string()))?
        .map_err(|e| Error::Link(e.to_string()))
}

pub fn handle_link_opened(ctx: &mut UpdateContext<'_>, url: &str, result: Result<()>) {
    if let Err(err) = result {
        log::warn!("failed to open {url}: {err}");
        ctx.notifications
            .push(Notification::warning(err.i18n_key()).with_arg("url", url));
    }
}

pub fn handle_toggle_theme(ctx: &mut UpdateContext<'_>) {
    *ctx.theme_mode = ctx.theme_mode.next();
    log::info!("theme mode set to {:?}", ctx.theme_mode);
    if let Err(err) = persistence::persist_theme(*ctx.theme_mode) {
        log::warn!("failed to save theme mode: {err}");
        ctx.notifications
            .push(Notification::warning(persistence::SAVE_WARNING_KEY));
    }
}

pub fn handle_language_selected(ctx: &mut UpdateContext<'_>, locale: LanguageIdentifier) {
    log::info!("language set to {locale}");
    ctx.i18n.set_locale(locale);
}

pub fn handle_scroll_to(section: Section) -> Task<Message> {
    operation::snap_to(Id::new(PAGE_SCROLLABLE_ID), section.scroll_anchor())
}

/// Advances everything time-driven to `now` and drops finished transitions.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) {
    *ctx.now = now;
    ctx.typewriter.tick(now);
    ctx.notifications.tick(now);
    ctx.card_fades
        .retain(|_, fade| !fade.transition.is_finished(now));
    if ctx.modal_slide.is_some_and(|slide| slide.is_finished(now)) {
        *ctx.modal_slide = None;
    }
}
