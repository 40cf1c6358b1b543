// SPDX-License-Identifier: MPL-2.0
//! About: biography next to the typewriter terminal.

use super::{heading, Section, ViewContext};
use crate::app::Message;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::terminal;
use iced::widget::{button, text, Column, Row};
use iced::{Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut bio = Column::new().spacing(spacing::MD).width(Length::FillPortion(1));
    for paragraph in &ctx.portfolio.profile.about {
        bio = bio.push(text(paragraph.as_str()).size(typography::BODY_LG));
    }

    let mut code = Column::new()
        .spacing(spacing::XS)
        .width(Length::FillPortion(1))
        .push(terminal::view(ctx.typewriter, ctx.i18n));
    if ctx.typewriter.is_typing() {
        code = code.push(
            button(text(ctx.i18n.tr("terminal-skip")).size(typography::CAPTION))
                .padding(0)
                .on_press(Message::SkipTyping)
                .style(styles::button::ghost),
        );
    }

    Column::new()
        .spacing(spacing::LG)
        .push(heading(ctx.i18n, Section::About))
        .push(Row::new().spacing(spacing::XL).push(bio).push(code))
        .into()
}
