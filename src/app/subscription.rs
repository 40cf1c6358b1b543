// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions.
//!
//! Both are conditional: keyboard routing only exists while the modal is
//! open, and the tick only runs while something on screen changes over time.

use super::config::{ANIMATION_TICK_MS, IDLE_TICK_MS};
use super::Message;
use iced::keyboard::{self, key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes Escape and the arrow keys to the modal while it is open.
///
/// Key presses already captured by a focused widget are left alone.
pub fn create_keyboard_subscription(modal_open: bool) -> Subscription<Message> {
    if !modal_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. })
                if is_modal_key(&key) =>
            {
                Some(Message::Keyboard(key))
            }
            _ => None,
        }
    })
}

fn is_modal_key(key: &keyboard::Key) -> bool {
    matches!(
        key,
        keyboard::Key::Named(
            key::Named::Escape | key::Named::ArrowLeft | key::Named::ArrowRight
        )
    )
}

/// What currently needs periodic refreshing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickDemand {
    pub animating: bool,
    /// Typing interval while the terminal is still typing.
    pub typing: Option<Duration>,
    pub has_notifications: bool,
}

impl TickDemand {
    /// Tick period, or `None` when nothing needs refreshing.
    #[must_use]
    pub fn interval(self) -> Option<Duration> {
        if self.animating {
            Some(Duration::from_millis(ANIMATION_TICK_MS))
        } else if let Some(typing) = self.typing {
            Some(typing)
        } else if self.has_notifications {
            Some(Duration::from_millis(IDLE_TICK_MS))
        } else {
            None
        }
    }
}

/// Periodic tick for transitions, typing and toast auto-dismiss.
pub fn create_tick_subscription(demand: TickDemand) -> Subscription<Message> {
    match demand.interval() {
        Some(period) => time::every(period).map(Message::Tick),
        None => Subscription::none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_page_needs_no_tick() {
        assert_eq!(TickDemand::default().interval(), None);
    }

    #[test]
    fn animation_takes_priority_over_typing() {
        let demand = TickDemand {
            animating: true,
            typing: Some(Duration::from_millis(35)),
            has_notifications: true,
        };
        assert_eq!(
            demand.interval(),
            Some(Duration::from_millis(ANIMATION_TICK_MS))
        );
    }

    #[test]
    fn typing_uses_configured_interval() {
        let demand = TickDemand {
            typing: Some(Duration::from_millis(35)),
            has_notifications: true,
            ..TickDemand::default()
        };
        assert_eq!(demand.interval(), Some(Duration::from_millis(35)));
    }

    #[test]
    fn toasts_alone_use_idle_tick() {
        let demand = TickDemand {
            has_notifications: true,
            ..TickDemand::default()
        };
        assert_eq!(demand.interval(), Some(Duration::from_millis(IDLE_TICK_MS)));
    }

    #[test]
    fn only_modal_keys_are_routed() {
        assert!(is_modal_key(&keyboard::Key::Named(key::Named::Escape)));
        assert!(is_modal_key(&keyboard::Key::Named(key::Named::ArrowRight)));
        assert!(!is_modal_key(&keyboard::Key::Named(key::Named::Space)));
        assert!(!is_modal_key(&keyboard::Key::Character("a".into())));
    }
}
