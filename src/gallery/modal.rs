// SPDX-License-Identifier: MPL-2.0
//! Full-screen gallery modal.
//!
//! The modal is either `Closed` or `Open`. While open it owns a non-empty
//! image sequence, the current position in it, and a [`ScrollLockGuard`]
//! that keeps the page from scrolling underneath. Every way out of `Open`
//! (close control, backdrop, Escape, replacing the state, dropping the app)
//! drops that guard, so the lock can never leak.
//!
//! Only sequential navigation is offered here. Direct jumps belong to the
//! inline carousel.

use super::scroll_lock::{ScrollLock, ScrollLockGuard};
use super::{step, Direction};

/// Which way the last modal navigation moved. Drives the sign of the
/// slide-in offset and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideDirection {
    /// Moved to the previous image; the new image enters from the left.
    Left,
    /// Moved to the next image; the new image enters from the right.
    #[default]
    Right,
}

impl SlideDirection {
    #[must_use]
    pub fn from_direction(direction: Direction) -> Self {
        match direction {
            Direction::Next => SlideDirection::Right,
            Direction::Previous => SlideDirection::Left,
        }
    }

    /// Horizontal sign of the entry offset: `+1.0` enters from the right.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            SlideDirection::Left => -1.0,
            SlideDirection::Right => 1.0,
        }
    }
}

/// Messages from the modal overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Next,
    Previous,
    /// Explicit close control or Escape.
    Close,
    /// Press on the dim area around the image.
    BackdropPressed,
    /// Press on the image content itself. Captured so it never reaches the
    /// backdrop.
    ContentPressed,
}

/// Effects produced by modal state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Navigated {
        index: usize,
        direction: SlideDirection,
    },
    Closed,
}

#[derive(Debug)]
struct OpenGallery {
    images: Vec<String>,
    current_index: usize,
    _scroll_lock: Option<ScrollLockGuard>,
}

/// Modal overlay state.
#[derive(Debug, Default)]
pub struct Modal {
    open: Option<OpenGallery>,
    slide_direction: SlideDirection,
}

impl Modal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Image sequence being shown; empty while closed.
    #[must_use]
    pub fn images(&self) -> &[String] {
        self.open.as_ref().map_or(&[], |open| open.images.as_slice())
    }

    /// Position in [`images`](Self::images); 0 while closed.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.open.as_ref().map_or(0, |open| open.current_index)
    }

    /// Reference of the image currently displayed, if open.
    #[must_use]
    pub fn current_image(&self) -> Option<&str> {
        self.open
            .as_ref()
            .and_then(|open| open.images.get(open.current_index))
            .map(String::as_str)
    }

    #[must_use]
    pub fn slide_direction(&self) -> SlideDirection {
        self.slide_direction
    }

    /// Opens the modal on `images` at `start_index` (wrapped into range).
    ///
    /// Returns the starting index, or `None` without changing state when the
    /// sequence is empty or only holds the "no image" sentinel. Opening while
    /// already open swaps the sequence and keeps the scroll lock already held.
    pub fn open_gallery(
        &mut self,
        images: Vec<String>,
        start_index: usize,
        scroll_lock: &ScrollLock,
    ) -> Option<usize> {
        if images.iter().all(String::is_empty) {
            return None;
        }

        let current_index = start_index % images.len();
        let guard = match self.open.take() {
            Some(previous) => previous._scroll_lock,
            None => scroll_lock.acquire(),
        };
        log::debug!(
            "gallery modal opened at {}/{}",
            current_index + 1,
            images.len()
        );
        self.open = Some(OpenGallery {
            images,
            current_index,
            _scroll_lock: guard,
        });
        self.slide_direction = SlideDirection::default();
        Some(current_index)
    }

    /// Moves one image in `direction`, wrapping at both ends.
    ///
    /// Returns the new index, or `None` when closed.
    pub fn navigate(&mut self, direction: Direction) -> Option<usize> {
        let open = self.open.as_mut()?;
        open.current_index = step(open.current_index, direction, open.images.len());
        self.slide_direction = SlideDirection::from_direction(direction);
        Some(open.current_index)
    }

    /// Closes the modal and releases the scroll lock. Returns whether the
    /// modal was open.
    pub fn close_modal(&mut self) -> bool {
        let was_open = self.open.take().is_some();
        if was_open {
            log::debug!("gallery modal closed");
        }
        was_open
    }

    /// Handles a modal overlay message.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Next => self.navigate_effect(Direction::Next),
            Message::Previous => self.navigate_effect(Direction::Previous),
            Message::Close | Message::BackdropPressed => {
                if self.close_modal() {
                    Effect::Closed
                } else {
                    Effect::None
                }
            }
            Message::ContentPressed => Effect::None,
        }
    }

    fn navigate_effect(&mut self, direction: Direction) -> Effect {
        match self.navigate(direction) {
            Some(index) => Effect::Navigated {
                index,
                direction: self.slide_direction,
            },
            None => Effect::None,
        }
    }
}
