// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is an animated single-page portfolio built with the Iced GUI
//! framework.
//!
//! It renders a profile, a project catalog with inline image carousels and a
//! full-screen gallery modal, localized with Fluent and themed from user
//! preferences.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod portfolio;
pub mod ui;

pub use app::config;
