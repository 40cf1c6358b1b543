// SPDX-License-Identifier: MPL-2.0
//! Résumé: summary, experience timeline and the full document link.

use super::{heading, Section, ViewContext};
use crate::app::Message;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container};
use iced::{Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let resume = &ctx.portfolio.profile.resume;

    let mut entries = Column::new().spacing(spacing::MD);
    for entry in &resume.entries {
        let mut body = Column::new()
            .spacing(spacing::XXS)
            .push(
                text(entry.period.as_str())
                    .size(typography::CAPTION)
                    .color(palette::PRIMARY_400),
            )
            .push(text(entry.title.as_str()).size(typography::TITLE_SM));
        if !entry.organization.is_empty() {
            body = body.push(
                text(entry.organization.as_str())
                    .size(typography::BODY)
                    .color(palette::GRAY_400),
            );
        }
        if !entry.description.is_empty() {
            body = body.push(text(entry.description.as_str()).size(typography::BODY));
        }
        entries = entries.push(
            Container::new(body)
                .width(Length::Fill)
                .padding(spacing::MD)
                .style(styles::container::card),
        );
    }

    let mut column = Column::new()
        .spacing(spacing::LG)
        .push(heading(ctx.i18n, Section::Resume));
    if !resume.summary.is_empty() {
        column = column.push(text(resume.summary.as_str()).size(typography::BODY_LG));
    }
    column = column.push(entries);
    if let Some(url) = &resume.document_url {
        column = column.push(
            button(text(ctx.i18n.tr("resume-download")).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .on_press(Message::OpenLink(url.clone()))
                .style(styles::button::primary),
        );
    }
    column.into()
}
