// SPDX-License-Identifier: MPL-2.0
//! Footer: theme toggle and language picker.

use super::ViewContext;
use crate::app::Message;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Row, Space};
use iced::{alignment, Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let theme_label = ctx.i18n.tr_with_args(
        "footer-theme",
        &[("mode", &ctx.i18n.tr(ctx.theme_mode.label_key()))],
    );
    let theme_toggle = button(text(theme_label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .on_press(Message::ToggleTheme)
        .style(styles::button::outline);

    let current = ctx.i18n.current_locale();
    let mut languages = Row::new().spacing(spacing::XS);
    for locale in &ctx.i18n.available_locales {
        let label = text(ctx.i18n.tr(&format!("language-name-{locale}"))).size(typography::CAPTION);
        let picker = button(label)
            .padding([spacing::XXS, spacing::SM])
            .on_press(Message::LanguageSelected(locale.clone()))
            .style(if locale == current {
                styles::button::primary
            } else {
                styles::button::ghost
            });
        languages = languages.push(picker);
    }

    Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .width(Length::Fill)
        .push(
            text(ctx.i18n.tr_with_args(
                "footer-credits",
                &[("name", ctx.portfolio.profile.name.as_str())],
            ))
            .size(typography::CAPTION)
            .color(palette::GRAY_400),
        )
        .push(Space::new().width(Length::Fill))
        .push(languages)
        .push(theme_toggle)
        .into()
}
