// SPDX-License-Identifier: MPL-2.0
//! The project catalog and the card list rendered from it.
//!
//! The catalog is loaded once and never mutated. [`Catalog::cards`] yields
//! every project followed by exactly one synthetic "see more" card, which
//! carries only an outbound link and has no gallery.

use super::assets::{self, ImageBase, ImageSource};
use super::project::{Project, ProjectId};
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Synthetic trailing card pointing at the author's full project list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeeMore {
    pub url: String,
}

/// One entry of the rendered project list.
#[derive(Debug, Clone, Copy)]
pub enum Card<'a> {
    Showcase { id: ProjectId, project: &'a Project },
    SeeMore(&'a SeeMore),
}

/// Read-only project collection plus resolved image handles.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<Project>,
    see_more: SeeMore,
    images: HashMap<String, ImageSource>,
}

impl Catalog {
    /// Builds a catalog, resolving every image reference against `image_base`.
    #[must_use]
    pub fn new(projects: Vec<Project>, image_base: ImageBase, see_more_url: &str) -> Self {
        let projects: Vec<Project> = projects.into_iter().map(Project::normalized).collect();

        let mut images = HashMap::new();
        for reference in projects
            .iter()
            .filter_map(Project::gallery_images)
            .flatten()
        {
            images
                .entry(reference.clone())
                .or_insert_with(|| assets::resolve_image(reference, &image_base));
        }

        Self {
            projects,
            see_more: SeeMore {
                url: see_more_url.to_string(),
            },
            images,
        }
    }

    /// Parses a JSON array of project records.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] if the JSON is malformed.
    pub fn from_json(json: &str, image_base: ImageBase, see_more_url: &str) -> Result<Self> {
        let projects: Vec<Project> =
            serde_json::from_str(json).map_err(|e| Error::Catalog(e.to_string()))?;
        Ok(Self::new(projects, image_base, see_more_url))
    }

    /// Loads the catalog shipped inside the binary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] if the embedded file is missing or malformed.
    pub fn embedded(see_more_url: &str) -> Result<Self> {
        let json = assets::embedded_text(assets::PROJECTS_FILE)
            .ok_or_else(|| Error::Catalog(format!("{} not embedded", assets::PROJECTS_FILE)))?;
        Self::from_json(&json, ImageBase::Embedded, see_more_url)
    }

    /// Loads a catalog from disk. Image references resolve relative to the
    /// file's directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or
    /// [`Error::Catalog`] if it is malformed.
    pub fn load_from_path(path: &Path, see_more_url: &str) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let dir = path.parent().unwrap_or(Path::new("."));
        let base = ImageBase::Directory(dir.to_path_buf());
        Self::from_json(&json, base, see_more_url)
    }

    /// Number of real projects (excluding the synthetic card).
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    #[must_use]
    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.get(id.index())
    }

    /// Real projects with their identifiers.
    pub fn showcase(&self) -> impl Iterator<Item = (ProjectId, &Project)> {
        self.projects
            .iter()
            .enumerate()
            .map(|(index, project)| (ProjectId::new(index), project))
    }

    #[must_use]
    pub fn see_more(&self) -> &SeeMore {
        &self.see_more
    }

    /// Every card to render: the projects in order, then one "see more" card.
    pub fn cards(&self) -> impl Iterator<Item = Card<'_>> {
        self.showcase()
            .map(|(id, project)| Card::Showcase { id, project })
            .chain(std::iter::once(Card::SeeMore(&self.see_more)))
    }

    /// Resolved handle for an image reference of this catalog.
    #[must_use]
    pub fn image(&self, reference: &str) -> &ImageSource {
        self.images.get(reference).unwrap_or(&ImageSource::Missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const JSON: &str = r#"[
        { "title": "Alpha", "subtitle": "first", "images": ["a.svg", "b.svg"], "tech_tags": ["Rust"] },
        { "title": "Beta", "images": [""] },
        { "title": "Alpha", "images": ["c.svg"] }
    ]"#;

    fn catalog() -> Catalog {
        Catalog::from_json(JSON, ImageBase::Embedded, "https://github.com/someone")
            .expect("valid catalog")
    }

    #[test]
    fn cards_end_with_exactly_one_see_more() {
        let catalog = catalog();
        let cards: Vec<_> = catalog.cards().collect();

        assert_eq!(cards.len(), catalog.len() + 1);
        assert!(matches!(cards.last(), Some(Card::SeeMore(_))));
        assert_eq!(
            cards
                .iter()
                .filter(|card| matches!(card, Card::SeeMore(_)))
                .count(),
            1
        );
    }

    #[test]
    fn every_showcase_card_resolves_to_its_project() {
        let catalog = catalog();
        let mut see_more_cards = 0;
        for (position, card) in catalog.cards().enumerate() {
            match card {
                Card::Showcase { id, project } => {
                    assert_eq!(id.index(), position);
                    let resolved = catalog.project(id).expect("known id");
                    assert!(std::ptr::eq(resolved, project));
                }
                Card::SeeMore(see_more) => {
                    assert_eq!(position, catalog.len());
                    assert_eq!(see_more.url, "https://github.com/someone");
                    see_more_cards += 1;
                }
            }
        }
        assert_eq!(see_more_cards, 1);
    }

    #[test]
    fn cards_preserve_project_order() {
        let catalog = catalog();
        let titles: Vec<&str> = catalog
            .cards()
            .filter_map(|card| match card {
                Card::Showcase { project, .. } => Some(project.title.as_str()),
                Card::SeeMore(_) => None,
            })
            .collect();
        assert_eq!(titles, vec!["Alpha", "Beta", "Alpha"]);
    }

    #[test]
    fn duplicate_titles_get_distinct_ids() {
        let catalog = catalog();
        let ids: Vec<ProjectId> = catalog
            .showcase()
            .filter(|(_, p)| p.title == "Alpha")
            .map(|(id, _)| id)
            .collect();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn see_more_carries_link() {
        assert_eq!(catalog().see_more().url, "https://github.com/someone");
    }

    #[test]
    fn empty_catalog_still_has_see_more_card() {
        let catalog = Catalog::from_json("[]", ImageBase::Embedded, "https://example.org")
            .expect("valid catalog");
        assert!(catalog.is_empty());
        assert_eq!(catalog.cards().count(), 1);
    }

    #[test]
    fn malformed_json_is_catalog_error() {
        let err = Catalog::from_json("{ nope", ImageBase::Embedded, "").unwrap_err();
        assert!(matches!(err, Error::Catalog(_)));
    }

    #[test]
    fn unknown_image_reference_is_missing() {
        assert!(catalog().image("zzz.png").is_missing());
    }

    #[test]
    fn embedded_catalog_loads() {
        let catalog = Catalog::embedded("https://github.com").expect("embedded catalog");
        assert!(!catalog.is_empty());
        for (_, project) in catalog.showcase() {
            for reference in project.gallery_images().unwrap_or_default() {
                assert!(
                    !catalog.image(reference).is_missing(),
                    "embedded image {reference} should resolve"
                );
            }
        }
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let err = Catalog::load_from_path(&dir.path().join("none.json"), "").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn load_from_path_resolves_images_next_to_file() {
        let dir = tempdir().expect("failed to create temp dir");
        std::fs::write(
            dir.path().join("cover.svg"),
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="2" height="2"/>"#,
        )
        .expect("failed to write svg");
        let path = dir.path().join("projects.json");
        std::fs::write(&path, r#"[{ "title": "Disk", "images": ["cover.svg"] }]"#)
            .expect("failed to write catalog");

        let catalog = Catalog::load_from_path(&path, "").expect("catalog loads");
        assert!(matches!(catalog.image("cover.svg"), ImageSource::Vector(_)));
    }
}
