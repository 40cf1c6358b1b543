// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the portfolio content, the gallery state,
//! localization and preferences, and translates messages into side effects
//! like config persistence or opening links.

pub mod config;
mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::gallery::{Gallery, ScrollLock};
use crate::i18n::fluent::I18n;
use crate::portfolio::{Portfolio, ProjectId};
use crate::ui::notifications::{self, Notification};
use crate::ui::project_card::CardFade;
use crate::ui::terminal::Typewriter;
use crate::ui::theming::ThemeMode;
use crate::ui::transition::Transition;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::collections::HashMap;
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    portfolio: Portfolio,
    gallery: Gallery,
    /// Running cross-fades of inline carousels.
    card_fades: HashMap<ProjectId, CardFade>,
    /// Running slide of the modal image.
    modal_slide: Option<Transition>,
    typewriter: Typewriter,
    notifications: notifications::Manager,
    /// Time of the last tick or state change, used to sample transitions.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("projects", &self.portfolio.catalog.len())
            .field("modal_open", &self.gallery.modal().is_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 860.0;
pub const MIN_WINDOW_WIDTH: f32 = 720.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and content, falling back to embedded data with a toast
    /// for every source that could not be used.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let projects = flags
            .projects
            .or_else(|| config.portfolio.projects_path.clone());
        let profile = flags
            .profile
            .or_else(|| config.portfolio.profile_path.clone());

        let (portfolio, notices) = startup_notices(
            config_warning.is_some(),
            Portfolio::load(projects.as_deref(), profile.as_deref()),
        );

        (Self::from_parts(&config, i18n, portfolio, notices), Task::none())
    }

    /// Assembles the app from already loaded parts.
    fn from_parts(
        config: &Config,
        i18n: I18n,
        portfolio: Portfolio,
        notices: Vec<Notification>,
    ) -> Self {
        let typewriter = Typewriter::new(
            portfolio.profile.code_sample.clone(),
            config.terminal.typing_interval(),
        );

        let mut notifications = notifications::Manager::new();
        for notice in notices {
            notifications.push(notice);
        }

        Self {
            i18n,
            theme_mode: config.general.theme_mode,
            portfolio,
            gallery: Gallery::new(ScrollLock::new()),
            card_fades: HashMap::new(),
            modal_slide: None,
            typewriter,
            notifications,
            now: Instant::now(),
        }
    }

    fn title(&self) -> String {
        let name = self.portfolio.profile.name.as_str();
        if name.is_empty() {
            self.i18n.tr("window-title-default")
        } else {
            self.i18n.tr_with_args("window-title", &[("name", name)])
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn is_animating(&self) -> bool {
        !self.card_fades.is_empty() || self.modal_slide.is_some()
    }

    fn subscription(&self) -> Subscription<Message> {
        let keyboard_sub =
            subscription::create_keyboard_subscription(self.gallery.modal().is_open());
        let tick_sub = subscription::create_tick_subscription(subscription::TickDemand {
            animating: self.is_animating(),
            typing: self
                .typewriter
                .is_typing()
                .then(|| self.typewriter.interval()),
            has_notifications: self.notifications.has_notifications(),
        });

        Subscription::batch([keyboard_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            theme_mode: &mut self.theme_mode,
            portfolio: &self.portfolio,
            gallery: &mut self.gallery,
            card_fades: &mut self.card_fades,
            modal_slide: &mut self.modal_slide,
            typewriter: &mut self.typewriter,
            notifications: &mut self.notifications,
            now: &mut self.now,
        };

        match message {
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Modal(modal_message) => update::handle_gallery_message(
                &mut ctx,
                crate::gallery::Message::Modal(modal_message),
            ),
            Message::Keyboard(key) => update::handle_keyboard(&mut ctx, &key),
            Message::OpenLink(url) => update::handle_open_link(url),
            Message::LinkOpened { url, result } => {
                update::handle_link_opened(&mut ctx, &url, result);
                Task::none()
            }
            Message::ToggleTheme => {
                update::handle_toggle_theme(&mut ctx);
                Task::none()
            }
            Message::LanguageSelected(locale) => {
                update::handle_language_selected(&mut ctx, locale);
                Task::none()
            }
            Message::ScrollTo(section) => update::handle_scroll_to(section),
            Message::SkipTyping => {
                ctx.typewriter.finish();
                Task::none()
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                update::handle_tick(&mut ctx, now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            portfolio: &self.portfolio,
            gallery: &self.gallery,
            card_fades: &self.card_fades,
            modal_slide: self.modal_slide,
            typewriter: &self.typewriter,
            notifications: &self.notifications,
            theme_mode: self.theme_mode,
            now: self.now,
        })
    }
}

/// Resolves the loaded portfolio and the toasts to show at startup.
///
/// Files replaced by embedded data become warnings. Unusable embedded data
/// leaves a blank portfolio and an error that stays until dismissed.
fn startup_notices(
    config_warning: bool,
    loaded: crate::error::Result<(Portfolio, Vec<&'static str>)>,
) -> (Portfolio, Vec<Notification>) {
    let mut notices = Vec::new();
    if config_warning {
        notices.push(Notification::warning(config::LOAD_WARNING_KEY));
    }

    let portfolio = match loaded {
        Ok((portfolio, fallbacks)) => {
            notices.extend(fallbacks.into_iter().map(Notification::warning));
            portfolio
        }
        Err(err) => {
            log::error!("embedded portfolio data is unusable: {err}");
            notices.push(Notification::error(err.i18n_key()));
            Portfolio::default()
        }
    };

    (portfolio, notices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::gallery::{self, modal, Direction};
    use crate::portfolio::{Catalog, ImageBase, Profile, Project};
    use crate::ui::notifications::Severity;
    use iced::keyboard::{self, key};
    use std::time::Duration;

    fn project(title: &str, images: &[&str]) -> Project {
        Project {
            title: title.to_string(),
            subtitle: String::new(),
            description: String::new(),
            images: images.iter().map(ToString::to_string).collect(),
            tech_tags: Vec::new(),
            link: None,
            github: None,
        }
    }

    fn test_app() -> App {
        let profile = Profile {
            name: "Ada".to_string(),
            github_url: "https://github.com/ada".to_string(),
            code_sample: vec!["let x = 1;".to_string()],
            ..Profile::default()
        };
        let catalog = Catalog::new(
            vec![
                project("Alpha", &["a1.png", "a2.png", "a3.png"]),
                project("Beta", &[""]),
            ],
            ImageBase::Embedded,
            &profile.github_url,
        );
        let config = Config::default();
        App::from_parts(
            &config,
            I18n::new(Some("en-US".to_string()), &config),
            Portfolio { profile, catalog },
            Vec::new(),
        )
    }

    fn alpha() -> ProjectId {
        ProjectId::new(0)
    }

    fn escape() -> Message {
        Message::Keyboard(keyboard::Key::Named(key::Named::Escape))
    }

    #[test]
    fn title_includes_profile_name() {
        let app = test_app();
        assert!(app.title().contains("Ada"));
    }

    #[test]
    fn startup_warnings_become_toasts() {
        let config = Config::default();
        let (portfolio, notices) = startup_notices(true, Ok((Portfolio::default(), Vec::new())));
        let app = App::from_parts(&config, I18n::new(None, &config), portfolio, notices);

        let severities: Vec<_> = app
            .notifications
            .visible()
            .map(Notification::severity)
            .collect();
        assert_eq!(severities, vec![Severity::Warning]);
    }

    #[test]
    fn file_fallbacks_are_warnings() {
        let loaded = Ok((
            Portfolio::default(),
            vec![crate::portfolio::CATALOG_FALLBACK_WARNING],
        ));
        let (_, notices) = startup_notices(false, loaded);

        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].severity(), Severity::Warning);
        assert_eq!(
            notices[0].message_key(),
            crate::portfolio::CATALOG_FALLBACK_WARNING
        );
    }

    #[test]
    fn unusable_embedded_data_is_an_error_toast() {
        let loaded = Err(Error::Catalog("projects.json not embedded".to_string()));
        let (portfolio, notices) = startup_notices(false, loaded);

        assert!(portfolio.catalog.is_empty());
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].severity(), Severity::Error);
        assert_eq!(notices[0].message_key(), "error-catalog");
    }

    #[test]
    fn advancing_a_card_starts_a_crossfade() {
        let mut app = test_app();
        let _ = app.update(Message::Gallery(gallery::Message::Advance {
            project: alpha(),
            direction: Direction::Next,
        }));

        assert_eq!(app.gallery.selection().index(alpha()), 1);
        assert_eq!(app.card_fades.get(&alpha()).map(|f| f.from), Some(0));
        assert!(app.is_animating());
    }

    #[test]
    fn tick_past_duration_ends_transitions() {
        let mut app = test_app();
        let _ = app.update(Message::Gallery(gallery::Message::SelectImage {
            project: alpha(),
            index: 2,
        }));
        let _ = app.update(Message::Tick(app.now + Duration::from_secs(1)));

        assert!(app.card_fades.is_empty());
        assert_eq!(app.gallery.selection().index(alpha()), 2);
    }

    #[test]
    fn opening_the_gallery_locks_scrolling_until_escape() {
        let mut app = test_app();
        let _ = app.update(Message::Gallery(gallery::Message::OpenGallery {
            project: alpha(),
        }));
        assert!(app.gallery.modal().is_open());
        assert!(app.gallery.scroll_lock().is_locked());
        assert!(app.modal_slide.is_some());

        let _ = app.update(escape());
        assert!(!app.gallery.modal().is_open());
        assert!(!app.gallery.scroll_lock().is_locked());
        assert!(app.modal_slide.is_none());
    }

    #[test]
    fn arrow_keys_navigate_the_open_modal() {
        let mut app = test_app();
        let _ = app.update(Message::Gallery(gallery::Message::OpenGallery {
            project: alpha(),
        }));
        let _ = app.update(Message::Keyboard(keyboard::Key::Named(
            key::Named::ArrowLeft,
        )));
        assert_eq!(app.gallery.modal().current_index(), 2);
    }

    #[test]
    fn keys_are_ignored_while_modal_is_closed() {
        let mut app = test_app();
        let _ = app.update(escape());
        assert!(!app.gallery.modal().is_open());
        assert!(!app.is_animating());
    }

    #[test]
    fn content_press_keeps_modal_open_and_backdrop_closes_it() {
        let mut app = test_app();
        let _ = app.update(Message::Gallery(gallery::Message::OpenGallery {
            project: alpha(),
        }));

        let _ = app.update(Message::Modal(modal::Message::ContentPressed));
        assert!(app.gallery.modal().is_open());

        let _ = app.update(Message::Modal(modal::Message::BackdropPressed));
        assert!(!app.gallery.modal().is_open());
    }

    #[test]
    fn project_without_images_never_opens_the_modal() {
        let mut app = test_app();
        let _ = app.update(Message::Gallery(gallery::Message::OpenGallery {
            project: ProjectId::new(1),
        }));
        assert!(!app.gallery.modal().is_open());
        assert!(!app.gallery.scroll_lock().is_locked());
    }

    #[test]
    fn failed_link_shows_a_warning() {
        let mut app = test_app();
        let _ = app.update(Message::LinkOpened {
            url: "https://example.com".to_string(),
            result: Err(Error::Link("no browser".to_string())),
        });
        let keys: Vec<_> = app
            .notifications
            .visible()
            .map(Notification::message_key)
            .collect();
        assert_eq!(keys, vec!["notification-link-open-error"]);
    }

    #[test]
    fn successful_link_is_silent() {
        let mut app = test_app();
        let _ = app.update(Message::LinkOpened {
            url: "https://example.com".to_string(),
            result: Ok(()),
        });
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn toggle_theme_cycles_modes() {
        let mut app = test_app();
        let start = app.theme_mode;
        let _ = app.update(Message::ToggleTheme);
        assert_eq!(app.theme_mode, start.next());
    }

    #[test]
    fn skip_typing_reveals_the_program() {
        let mut app = test_app();
        assert!(app.typewriter.is_typing());
        let _ = app.update(Message::SkipTyping);
        assert!(!app.typewriter.is_typing());
        assert_eq!(app.typewriter.displayed_lines(), vec!["let x = 1;"]);
    }

    #[test]
    fn language_selection_switches_locale() {
        let mut app = test_app();
        let pt: unic_langid::LanguageIdentifier = "pt-BR".parse().unwrap();
        let _ = app.update(Message::LanguageSelected(pt.clone()));
        assert_eq!(app.i18n.current_locale(), &pt);
    }
}
