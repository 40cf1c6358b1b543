// SPDX-License-Identifier: MPL-2.0
//! User interface: page sections, project cards, the gallery modal and the
//! shared styling infrastructure.
//!
//! Views follow the Elm-style "state down, messages up" pattern: they borrow
//! app state through a `ViewContext` and emit top-level messages.
//!
//! # Page
//!
//! - [`sections`] - hero, about, stack, projects, résumé, contact, footer
//! - [`project_card`] - inline carousel, no-image card, see-more card
//! - [`gallery_modal`] - full-window image viewer layer
//! - [`terminal`] - typewriter code terminal with syntax highlighting
//!
//! # Shared Infrastructure
//!
//! - [`artwork`] - rendering of resolved project images
//! - [`transition`] - cosmetic time-based progress
//! - [`widgets`] - custom Iced widgets (scroll lock wrapper)
//! - [`styles`] - centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and color schemes
//! - [`notifications`] - toast notifications

pub mod artwork;
pub mod design_tokens;
pub mod gallery_modal;
pub mod notifications;
pub mod project_card;
pub mod sections;
pub mod styles;
pub mod terminal;
pub mod theming;
pub mod transition;
pub mod widgets;
