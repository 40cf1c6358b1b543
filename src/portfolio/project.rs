// SPDX-License-Identifier: MPL-2.0
//! Project records as supplied by the catalog JSON.

use serde::{Deserialize, Serialize};

/// Image reference meaning "this project has no image".
pub const NO_IMAGE: &str = "";

/// Stable identifier of a project: its position in the loaded catalog.
///
/// Gallery state is keyed by this instead of the display title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(usize);

impl ProjectId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the project in the catalog.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    /// Ordered image references. A single [`NO_IMAGE`] entry means the
    /// project has no artwork.
    #[serde(default = "no_image")]
    pub images: Vec<String>,
    #[serde(default, alias = "tech")]
    pub tech_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

fn no_image() -> Vec<String> {
    vec![NO_IMAGE.to_string()]
}

impl Project {
    /// Whether the project offers an inline carousel and the gallery modal.
    #[must_use]
    pub fn has_gallery(&self) -> bool {
        self.images.iter().any(|image| !image.is_empty())
    }

    /// The image sequence, or `None` for the "no image" variant.
    #[must_use]
    pub fn gallery_images(&self) -> Option<&[String]> {
        self.has_gallery().then_some(self.images.as_slice())
    }

    /// Number of images in the carousel; 0 for the "no image" variant.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.gallery_images().map_or(0, <[String]>::len)
    }

    /// Drops stray empty references from a mixed list, keeping the single
    /// sentinel when nothing else is left.
    #[must_use]
    pub(crate) fn normalized(mut self) -> Self {
        self.images.retain(|image| !image.trim().is_empty());
        if self.images.is_empty() {
            self.images = no_image();
        }
        self
    }
}
