// SPDX-License-Identifier: MPL-2.0
//! Project cards: the inline carousel, the "no image" variant and the
//! trailing see-more card.

use crate::app::Message;
use crate::gallery::{self, Direction, GallerySelection};
use crate::i18n::fluent::I18n;
use crate::portfolio::{Card, Catalog, Project, ProjectId, SeeMore};
use crate::ui::artwork;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::transition::Transition;
use iced::widget::{button, mouse_area, text, Column, Container, Row, Space, Stack};
use iced::{alignment, ContentFit, Element, Length};
use std::collections::HashMap;
use std::time::Instant;

/// Cross-fade between the image a card showed and the one it shows now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardFade {
    pub from: usize,
    pub transition: Transition,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub selection: &'a GallerySelection,
    pub fades: &'a HashMap<ProjectId, CardFade>,
    pub now: Instant,
}

/// Renders one entry of the composed project list.
pub fn view<'a>(card: Card<'a>, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content = match card {
        Card::Showcase { id, project } => showcase(id, project, ctx),
        Card::SeeMore(see_more) => see_more_card(see_more, ctx.i18n),
    };

    Container::new(content)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .height(Length::Fixed(sizing::CARD_MIN_HEIGHT))
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

fn showcase<'a>(
    id: ProjectId,
    project: &'a Project,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let media: Element<'a, Message> = match project.gallery_images() {
        Some(images) => carousel(id, images, ctx),
        None => artwork::placeholder_view(
            Length::Fill,
            Length::Fixed(sizing::CARD_IMAGE_HEIGHT),
            project.title.clone(),
        ),
    };

    let mut tags = Row::new().spacing(spacing::XXS);
    for tag in &project.tech_tags {
        tags = tags.push(chip(tag));
    }

    let mut links = Row::new().spacing(spacing::XS);
    if let Some(link) = &project.link {
        links = links.push(link_button(ctx.i18n.tr("project-visit"), link));
    }
    if let Some(github) = &project.github {
        links = links.push(link_button(ctx.i18n.tr("project-source"), github));
    }

    Column::new()
        .spacing(spacing::SM)
        .push(media)
        .push(text(project.title.as_str()).size(typography::TITLE_MD))
        .push(
            text(project.subtitle.as_str())
                .size(typography::BODY)
                .color(palette::PRIMARY_400),
        )
        .push(text(project.description.as_str()).size(typography::BODY))
        .push(Space::new().height(Length::Fill))
        .push(tags.wrap())
        .push(links)
        .into()
}

fn carousel<'a>(
    id: ProjectId,
    images: &'a [String],
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let total = images.len();
    let current = ctx.selection.index(id).min(total.saturating_sub(1));
    let height = Length::Fixed(sizing::CARD_IMAGE_HEIGHT);
    let caption = ctx.i18n.tr("image-unavailable");

    let fade = ctx
        .fades
        .get(&id)
        .filter(|fade| !fade.transition.is_finished(ctx.now) && fade.from < total);
    let mut layers = Stack::new().width(Length::Fill).height(height);
    if let Some(fade) = fade {
        let progress = fade.transition.eased(ctx.now);
        layers = layers
            .push(artwork::view(
                ctx.catalog.image(&images[fade.from]),
                1.0 - progress,
                ContentFit::Cover,
                Length::Fill,
                height,
                caption.clone(),
            ))
            .push(artwork::view(
                ctx.catalog.image(&images[current]),
                progress,
                ContentFit::Cover,
                Length::Fill,
                height,
                caption,
            ));
    } else {
        layers = layers.push(artwork::view(
            ctx.catalog.image(&images[current]),
            opacity::OPAQUE,
            ContentFit::Cover,
            Length::Fill,
            height,
            caption,
        ));
    }

    let open = Message::Gallery(gallery::Message::OpenGallery { project: id });
    let image = mouse_area(layers)
        .on_press(open.clone())
        .interaction(iced::mouse::Interaction::Pointer);

    let mut column = Column::new().spacing(spacing::XS);
    if total > 1 {
        let arrow = |label: &'static str, direction: Direction| {
            button(
                text(label)
                    .size(typography::BODY_LG)
                    .align_x(alignment::Horizontal::Center),
            )
            .width(Length::Fixed(sizing::CAROUSEL_CONTROL))
            .height(Length::Fixed(sizing::CAROUSEL_CONTROL))
            .on_press(Message::Gallery(gallery::Message::Advance {
                project: id,
                direction,
            }))
            .style(styles::button::overlay(
                palette::WHITE,
                opacity::OVERLAY_MEDIUM,
                opacity::OVERLAY_STRONG,
            ))
        };
        let controls = Container::new(
            Row::new()
                .align_y(alignment::Vertical::Center)
                .push(arrow("‹", Direction::Previous))
                .push(Space::new().width(Length::Fill))
                .push(arrow("›", Direction::Next)),
        )
        .padding(spacing::XS)
        .height(height)
        .align_y(alignment::Vertical::Center);

        column = column
            .push(Stack::new().push(image).push(controls))
            .push(dots(id, total, current));
    } else {
        column = column.push(image);
    }

    column
        .push(
            button(text(ctx.i18n.tr("view-gallery")).size(typography::CAPTION))
                .on_press(open)
                .padding(0)
                .style(styles::button::ghost),
        )
        .into()
}

fn dots<'a>(id: ProjectId, total: usize, current: usize) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);
    for index in 0..total {
        row = row.push(
            button(Space::new())
                .width(Length::Fixed(sizing::DOT_SIZE))
                .height(Length::Fixed(sizing::DOT_SIZE))
                .padding(0)
                .on_press(Message::Gallery(gallery::Message::SelectImage {
                    project: id,
                    index,
                }))
                .style(styles::button::dot(index == current)),
        );
    }
    Container::new(row)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn see_more_card<'a>(see_more: &'a SeeMore, i18n: &I18n) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Space::new().height(Length::Fill))
        .push(text(i18n.tr("see-more-title")).size(typography::TITLE_MD))
        .push(
            text(i18n.tr("see-more-description"))
                .size(typography::BODY)
                .align_x(alignment::Horizontal::Center),
        )
        .push(
            button(text(i18n.tr("see-more")).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .on_press(Message::OpenLink(see_more.url.clone()))
                .style(styles::button::primary),
        )
        .push(Space::new().height(Length::Fill))
        .width(Length::Fill)
        .into()
}

pub(crate) fn chip<'a>(label: &'a str) -> Element<'a, Message> {
    Container::new(text(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::chip)
        .into()
}

fn link_button<'a>(label: String, url: &str) -> Element<'a, Message> {
    button(text(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .on_press(Message::OpenLink(url.to_string()))
        .style(styles::button::outline)
        .into()
}
