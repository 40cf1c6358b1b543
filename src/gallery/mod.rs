// SPDX-License-Identifier: MPL-2.0
//! Gallery navigation state for the projects section.
//!
//! Two independent pieces of state live here:
//!
//! - [`selection`] - which image each project card currently shows in its
//!   inline carousel (cyclic, supports direct jumps from the dots)
//! - [`modal`] - the full-screen viewer, a `Closed`/`Open` state machine with
//!   sequential navigation only
//!
//! [`Gallery`] composes both with the shared [`ScrollLock`] and exposes a
//! single `handle()` entrypoint in the same "message in, effect out" style as
//! the rest of the UI.

pub mod modal;
pub mod scroll_lock;
pub mod selection;

pub use modal::{Modal, SlideDirection};
pub use scroll_lock::{ScrollLock, ScrollLockGuard};
pub use selection::GallerySelection;

use crate::portfolio::{Catalog, ProjectId};

/// Direction of a sequential step through an image sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Step backward, wrapping from the first image to the last.
    Previous,
    /// Step forward, wrapping from the last image to the first.
    Next,
}

/// Steps `current` by one position in a cyclic sequence of `len` items.
///
/// The result is always in `0..len`. An empty sequence yields 0.
#[must_use]
pub fn step(current: usize, direction: Direction, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let current = current % len;
    match direction {
        Direction::Next => (current + 1) % len,
        Direction::Previous => (current + len - 1) % len,
    }
}

/// Messages emitted by project cards and the modal overlay.
#[derive(Debug, Clone)]
pub enum Message {
    /// A dot indicator was clicked on an inline carousel.
    SelectImage { project: ProjectId, index: usize },
    /// A prev/next control was clicked on an inline carousel.
    Advance {
        project: ProjectId,
        direction: Direction,
    },
    /// The card image or its "view gallery" control was activated.
    /// The modal opens at the card's current inline index.
    OpenGallery { project: ProjectId },
    /// Interaction inside the open modal.
    Modal(modal::Message),
}

/// Effects produced by gallery state changes, consumed by the app to start
/// cosmetic transitions and to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// An inline carousel changed its displayed image.
    ImageChanged {
        project: ProjectId,
        from: usize,
        to: usize,
    },
    /// The modal opened.
    ModalOpened { project: ProjectId, index: usize },
    /// The modal moved to another image.
    ModalNavigated {
        index: usize,
        direction: SlideDirection,
    },
    /// The modal closed and released the scroll lock.
    ModalClosed,
}

/// Per-page gallery state: inline selections, the modal, and the scroll lock
/// the modal holds while open.
#[derive(Debug, Default)]
pub struct Gallery {
    selection: GallerySelection,
    modal: Modal,
    scroll_lock: ScrollLock,
}

impl Gallery {
    #[must_use]
    pub fn new(scroll_lock: ScrollLock) -> Self {
        Self {
            selection: GallerySelection::new(),
            modal: Modal::new(),
            scroll_lock,
        }
    }

    #[must_use]
    pub fn selection(&self) -> &GallerySelection {
        &self.selection
    }

    #[must_use]
    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    #[must_use]
    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }

    /// Applies a gallery message against the read-only catalog.
    ///
    /// Messages naming a project that is missing from the catalog, or one
    /// without a gallery, are ignored.
    pub fn handle(&mut self, message: Message, catalog: &Catalog) -> Effect {
        match message {
            Message::SelectImage { project, index } => {
                let Some(total) = gallery_len(catalog, project) else {
                    return Effect::None;
                };
                let from = self.selection.index(project);
                let to = self.selection.select_image(project, index, total);
                image_changed(project, from, to)
            }
            Message::Advance { project, direction } => {
                let Some(total) = gallery_len(catalog, project) else {
                    return Effect::None;
                };
                let from = self.selection.index(project);
                let to = self.selection.advance(project, direction, total);
                image_changed(project, from, to)
            }
            Message::OpenGallery { project } => {
                let Some(images) = catalog.project(project).and_then(|p| p.gallery_images())
                else {
                    return Effect::None;
                };
                let start = self.selection.index(project);
                match self
                    .modal
                    .open_gallery(images.to_vec(), start, &self.scroll_lock)
                {
                    Some(index) => Effect::ModalOpened { project, index },
                    None => Effect::None,
                }
            }
            Message::Modal(message) => match self.modal.handle(message) {
                modal::Effect::None => Effect::None,
                modal::Effect::Navigated { index, direction } => {
                    Effect::ModalNavigated { index, direction }
                }
                modal::Effect::Closed => Effect::ModalClosed,
            },
        }
    }
}

fn gallery_len(catalog: &Catalog, project: ProjectId) -> Option<usize> {
    catalog
        .project(project)
        .and_then(|p| p.gallery_images())
        .map(<[String]>::len)
}

fn image_changed(project: ProjectId, from: usize, to: usize) -> Effect {
    if from == to {
        Effect::None
    } else {
        Effect::ImageChanged { project, from, to }
    }
}
