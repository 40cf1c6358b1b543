// SPDX-License-Identifier: MPL-2.0
//! Rendering of resolved project images, shared by cards and the modal.

use crate::portfolio::ImageSource;
use crate::ui::design_tokens::typography;
use crate::ui::styles;
use iced::widget::{image, svg, text, Container};
use iced::{alignment, ContentFit, Element, Length};

/// Renders `source` at `opacity`, filling `width` x `height` with `fit`.
///
/// Missing images become a neutral placeholder carrying `placeholder`.
pub fn view<'a, Message: 'a>(
    source: &ImageSource,
    opacity: f32,
    fit: ContentFit,
    width: Length,
    height: Length,
    placeholder: String,
) -> Element<'a, Message> {
    match source {
        ImageSource::Raster(handle) => image(handle.clone())
            .content_fit(fit)
            .opacity(opacity)
            .width(width)
            .height(height)
            .into(),
        ImageSource::Vector(handle) => svg(handle.clone())
            .content_fit(fit)
            .opacity(opacity)
            .width(width)
            .height(height)
            .into(),
        ImageSource::Missing => placeholder_view(width, height, placeholder),
    }
}

/// Tinted well with a caption, used for projects without artwork.
pub fn placeholder_view<'a, Message: 'a>(
    width: Length,
    height: Length,
    caption: String,
) -> Element<'a, Message> {
    Container::new(text(caption).size(typography::CAPTION))
        .width(width)
        .height(height)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::image_well)
        .into()
}
