// SPDX-License-Identifier: MPL-2.0
//! Contact: one outbound link per channel.

use super::{heading, Section, ViewContext};
use crate::app::Message;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Row};
use iced::Element;

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut links = Row::new().spacing(spacing::MD);
    for contact in &ctx.portfolio.profile.contacts {
        let label = Column::new()
            .spacing(spacing::XXS)
            .push(
                text(contact.label.as_str())
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            )
            .push(text(contact.value.as_str()).size(typography::BODY));
        links = links.push(
            button(label)
                .padding([spacing::SM, spacing::MD])
                .on_press(Message::OpenLink(contact.url.clone()))
                .style(styles::button::outline),
        );
    }

    Column::new()
        .spacing(spacing::LG)
        .push(heading(ctx.i18n, Section::Contact))
        .push(text(ctx.i18n.tr("contact-invitation")).size(typography::BODY_LG))
        .push(links.wrap())
        .into()
}
