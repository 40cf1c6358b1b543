// SPDX-License-Identifier: MPL-2.0
//! Embedded portfolio data and image resolution.
//!
//! The default profile, catalog and artwork ship inside the binary. A catalog
//! loaded from disk resolves its image references relative to the catalog
//! file's directory instead.

use iced::widget::{image, svg};
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "assets/portfolio/"]
struct PortfolioAssets;

/// Embedded default project catalog file name.
pub const PROJECTS_FILE: &str = "projects.json";

/// Embedded default profile file name.
pub const PROFILE_FILE: &str = "profile.json";

/// Where relative image references are looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageBase {
    /// Inside the binary's embedded `assets/portfolio/` folder.
    Embedded,
    /// On disk, relative to this directory.
    Directory(PathBuf),
}

/// A decoded-on-demand image handle ready for rendering.
#[derive(Debug, Clone)]
pub enum ImageSource {
    Raster(image::Handle),
    Vector(svg::Handle),
    /// The reference could not be resolved; rendered as a placeholder.
    Missing,
}

impl ImageSource {
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, ImageSource::Missing)
    }
}

/// Reads an embedded text file (profile or catalog JSON).
pub(crate) fn embedded_text(name: &str) -> Option<String> {
    PortfolioAssets::get(name).map(|file| String::from_utf8_lossy(file.data.as_ref()).into_owned())
}

/// Resolves an image reference against `base`.
///
/// Handles are created once per reference and cached by the catalog, since
/// iced keys its texture cache on the handle identity.
#[must_use]
pub fn resolve_image(reference: &str, base: &ImageBase) -> ImageSource {
    if reference.trim().is_empty() {
        return ImageSource::Missing;
    }

    let is_vector = Path::new(reference)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    match base {
        ImageBase::Embedded => match PortfolioAssets::get(reference) {
            Some(file) => from_bytes(file.data, is_vector),
            None => {
                log::warn!("embedded image not found: {reference}");
                ImageSource::Missing
            }
        },
        ImageBase::Directory(dir) => {
            let path = dir.join(reference);
            if !path.is_file() {
                log::warn!("image not found: {}", path.display());
                return ImageSource::Missing;
            }
            if is_vector {
                ImageSource::Vector(svg::Handle::from_path(path))
            } else {
                ImageSource::Raster(image::Handle::from_path(path))
            }
        }
    }
}

fn from_bytes(data: Cow<'static, [u8]>, is_vector: bool) -> ImageSource {
    if is_vector {
        ImageSource::Vector(svg::Handle::from_memory(data))
    } else {
        ImageSource::Raster(image::Handle::from_bytes(data.into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn embedded_defaults_are_present() {
        assert!(embedded_text(PROJECTS_FILE).is_some());
        assert!(embedded_text(PROFILE_FILE).is_some());
    }

    #[test]
    fn blank_reference_is_missing() {
        assert!(resolve_image("", &ImageBase::Embedded).is_missing());
        assert!(resolve_image("   ", &ImageBase::Embedded).is_missing());
    }

    #[test]
    fn unknown_embedded_reference_is_missing() {
        assert!(resolve_image("images/does-not-exist.svg", &ImageBase::Embedded).is_missing());
    }

    #[test]
    fn svg_on_disk_resolves_to_vector() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(
            dir.path().join("shot.svg"),
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"/>"#,
        )
        .expect("failed to write svg");

        let source = resolve_image("shot.svg", &ImageBase::Directory(dir.path().to_path_buf()));
        assert!(matches!(source, ImageSource::Vector(_)));
    }

    #[test]
    fn raster_on_disk_resolves_to_raster() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("shot.png"), b"not decoded until drawn")
            .expect("failed to write png");

        let source = resolve_image("shot.png", &ImageBase::Directory(dir.path().to_path_buf()));
        assert!(matches!(source, ImageSource::Raster(_)));
    }

    #[test]
    fn missing_file_on_disk_is_missing() {
        let dir = tempdir().expect("failed to create temp dir");
        let source = resolve_image("nope.png", &ImageBase::Directory(dir.path().to_path_buf()));
        assert!(source.is_missing());
    }
}
