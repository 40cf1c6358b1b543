// SPDX-License-Identifier: MPL-2.0
//! Page sections, rendered top to bottom inside one vertical scrollable.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod projects;
pub mod resume;
pub mod stack;

use crate::app::Message;
use crate::gallery::GallerySelection;
use crate::i18n::fluent::I18n;
use crate::portfolio::{Portfolio, ProjectId};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::project_card::CardFade;
use crate::ui::terminal::Typewriter;
use crate::ui::theming::ThemeMode;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{text, Column, Container};
use iced::{alignment, Element, Length};
use std::collections::HashMap;
use std::time::Instant;

/// Id of the page scrollable, targeted by the hero tiles.
pub const PAGE_SCROLLABLE_ID: &str = "page-scrollable";

/// Sections reachable from the hero tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Stack,
    Projects,
    Resume,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Stack,
        Section::Projects,
        Section::Resume,
        Section::Contact,
    ];

    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Section::About => "section-about",
            Section::Stack => "section-stack",
            Section::Projects => "section-projects",
            Section::Resume => "section-resume",
            Section::Contact => "section-contact",
        }
    }

    /// Short tile caption.
    #[must_use]
    pub fn caption_key(self) -> &'static str {
        match self {
            Section::About => "section-about-caption",
            Section::Stack => "section-stack-caption",
            Section::Projects => "section-projects-caption",
            Section::Resume => "section-resume-caption",
            Section::Contact => "section-contact-caption",
        }
    }

    /// Approximate vertical position of the section's heading within the
    /// page, as a fraction of the scrollable range.
    #[must_use]
    pub fn scroll_anchor(self) -> RelativeOffset {
        let y = match self {
            Section::About => 0.14,
            Section::Stack => 0.34,
            Section::Projects => 0.48,
            Section::Resume => 0.78,
            Section::Contact => 1.0,
        };
        RelativeOffset { x: 0.0, y }
    }
}

/// Everything the page sections read.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub portfolio: &'a Portfolio,
    pub selection: &'a GallerySelection,
    pub card_fades: &'a HashMap<ProjectId, CardFade>,
    pub typewriter: &'a Typewriter,
    pub theme_mode: ThemeMode,
    pub now: Instant,
}

/// All sections stacked in page order, centered to the content width.
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let column = Column::new()
        .spacing(spacing::SECTION)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(hero::view(ctx))
        .push(about::view(ctx))
        .push(stack::view(ctx))
        .push(projects::view(ctx))
        .push(resume::view(ctx))
        .push(contact::view(ctx))
        .push(footer::view(ctx));

    Container::new(column)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::LG])
        .align_x(alignment::Horizontal::Center)
        .into()
}

/// Section heading with its accent kicker line.
pub(crate) fn heading<'a>(i18n: &I18n, section: Section) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(
            text(i18n.tr(section.caption_key()))
                .size(typography::CAPTION)
                .color(palette::PRIMARY_400),
        )
        .push(text(i18n.tr(section.title_key())).size(typography::TITLE_LG))
        .into()
}
