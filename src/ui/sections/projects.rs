// SPDX-License-Identifier: MPL-2.0
//! Projects: the composed card list.

use super::{heading, Section, ViewContext};
use crate::app::Message;
use crate::ui::design_tokens::spacing;
use crate::ui::project_card;
use iced::widget::{Column, Row};
use iced::Element;

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let card_ctx = project_card::ViewContext {
        i18n: ctx.i18n,
        catalog: &ctx.portfolio.catalog,
        selection: ctx.selection,
        fades: ctx.card_fades,
        now: ctx.now,
    };

    let cards = ctx
        .portfolio
        .catalog
        .cards()
        .fold(Row::new().spacing(spacing::LG), |row, card| {
            row.push(project_card::view(card, &card_ctx))
        });

    Column::new()
        .spacing(spacing::LG)
        .push(heading(ctx.i18n, Section::Projects))
        .push(cards.wrap().vertical_spacing(spacing::LG))
        .into()
}
