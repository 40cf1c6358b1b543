// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::gallery::{self, modal};
use crate::ui::notifications;
use crate::ui::sections::Section;
use iced::keyboard;
use std::path::PathBuf;
use std::time::Instant;
use unic_langid::LanguageIdentifier;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Inline carousel interaction or a request to open the modal.
    Gallery(gallery::Message),
    /// Interaction inside the open modal.
    Modal(modal::Message),
    /// Open an outbound link in the system browser.
    OpenLink(String),
    /// Result of an [`OpenLink`](Message::OpenLink) attempt.
    LinkOpened {
        url: String,
        result: Result<(), Error>,
    },
    ToggleTheme,
    LanguageSelected(LanguageIdentifier),
    /// A hero tile was pressed.
    ScrollTo(Section),
    /// Reveal the whole terminal program at once.
    SkipTyping,
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving transitions, typing and toast expiry.
    Tick(Instant),
    /// A key press not captured by any widget, while the modal is open.
    Keyboard(keyboard::Key),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `pt-BR`, `en-US`).
    pub lang: Option<String>,
    /// Optional project catalog JSON replacing the embedded one.
    pub projects: Option<PathBuf>,
    /// Optional profile JSON replacing the embedded one.
    pub profile: Option<PathBuf>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<PathBuf>,
}
