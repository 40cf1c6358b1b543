// SPDX-License-Identifier: MPL-2.0
//! Stack: technology chips grouped by area.

use super::{heading, Section, ViewContext};
use crate::app::Message;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::project_card::chip;
use crate::ui::styles;
use iced::widget::{text, Column, Container, Row};
use iced::{Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut groups = Row::new().spacing(spacing::MD);
    for group in &ctx.portfolio.profile.stack {
        let mut items = Row::new().spacing(spacing::XXS);
        for item in &group.items {
            items = items.push(chip(item));
        }
        groups = groups.push(
            Container::new(
                Column::new()
                    .spacing(spacing::SM)
                    .push(text(group.name.as_str()).size(typography::TITLE_SM))
                    .push(items.wrap()),
            )
            .width(Length::Fixed(sizing::STACK_GROUP_WIDTH))
            .padding(spacing::MD)
            .style(styles::container::card),
        );
    }

    Column::new()
        .spacing(spacing::LG)
        .push(heading(ctx.i18n, Section::Stack))
        .push(groups.wrap())
        .into()
}
