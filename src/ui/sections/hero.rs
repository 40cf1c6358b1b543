// SPDX-License-Identifier: MPL-2.0
//! Hero: name, role, tagline and the section tiles.

use super::{Section, ViewContext};
use crate::app::Message;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Row};
use iced::{alignment, Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let profile = &ctx.portfolio.profile;

    let mut tiles = Row::new().spacing(spacing::MD);
    for section in Section::ALL {
        let label = Column::new()
            .spacing(spacing::XXS)
            .push(text(ctx.i18n.tr(section.title_key())).size(typography::TITLE_SM))
            .push(
                text(ctx.i18n.tr(section.caption_key()))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            );
        tiles = tiles.push(
            button(label)
                .width(Length::Fixed(sizing::TILE_WIDTH))
                .height(Length::Fixed(sizing::TILE_HEIGHT))
                .padding(spacing::MD)
                .on_press(Message::ScrollTo(section))
                .style(styles::button::tile),
        );
    }

    Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .push(text(profile.name.as_str()).size(typography::DISPLAY))
        .push(
            text(profile.role.as_str())
                .size(typography::TITLE_SM)
                .color(palette::PRIMARY_400),
        )
        .push(
            text(profile.tagline.as_str())
                .size(typography::BODY_LG)
                .align_x(alignment::Horizontal::Center),
        )
        .push(tiles.wrap())
        .into()
}
