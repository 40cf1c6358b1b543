// SPDX-License-Identifier: MPL-2.0
//! Read-only portfolio content: the author profile and the project catalog.
//!
//! Both default to data embedded in the binary and can be replaced by JSON
//! files on disk. A file that fails to load falls back to the embedded copy
//! and reports a warning key for the notification layer.

pub mod assets;
pub mod catalog;
pub mod profile;
pub mod project;

pub use assets::{ImageBase, ImageSource};
pub use catalog::{Card, Catalog, SeeMore};
pub use profile::{Contact, Profile, Resume, ResumeEntry, StackGroup};
pub use project::{Project, ProjectId, NO_IMAGE};

use crate::error::Result;
use std::path::Path;

/// Warning key shown when a custom profile file could not be used.
pub const PROFILE_FALLBACK_WARNING: &str = "notification-profile-load-error";

/// Warning key shown when a custom catalog file could not be used.
pub const CATALOG_FALLBACK_WARNING: &str = "notification-catalog-load-error";

/// Everything the page renders that is not UI state.
#[derive(Debug, Clone)]
pub struct Portfolio {
    pub profile: Profile,
    pub catalog: Catalog,
}

impl Default for Portfolio {
    /// A blank page: empty profile and no projects besides the see-more card.
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            catalog: Catalog::new(Vec::new(), ImageBase::Embedded, ""),
        }
    }
}

impl Portfolio {
    /// Loads the embedded profile and catalog.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded data itself is broken.
    pub fn embedded() -> Result<Self> {
        let profile = Profile::embedded()?;
        let catalog = Catalog::embedded(&profile.github_url)?;
        Ok(Self { profile, catalog })
    }

    /// Loads the portfolio, preferring the given files over embedded data.
    ///
    /// Returns the portfolio and the warning keys of every file that fell
    /// back to its embedded default.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded fallback itself is broken.
    pub fn load(
        projects_path: Option<&Path>,
        profile_path: Option<&Path>,
    ) -> Result<(Self, Vec<&'static str>)> {
        let mut warnings = Vec::new();

        let profile = match profile_path.map(Profile::load_from_path) {
            Some(Ok(profile)) => {
                log::info!("profile loaded from {}", display(profile_path));
                profile
            }
            Some(Err(err)) => {
                log::warn!(
                    "failed to load profile from {}: {err}; using embedded profile",
                    display(profile_path)
                );
                warnings.push(PROFILE_FALLBACK_WARNING);
                Profile::embedded()?
            }
            None => Profile::embedded()?,
        };

        let see_more = profile.github_url.as_str();
        let catalog = match projects_path.map(|path| Catalog::load_from_path(path, see_more)) {
            Some(Ok(catalog)) => {
                log::info!(
                    "{} projects loaded from {}",
                    catalog.len(),
                    display(projects_path)
                );
                catalog
            }
            Some(Err(err)) => {
                log::warn!(
                    "failed to load projects from {}: {err}; using embedded catalog",
                    display(projects_path)
                );
                warnings.push(CATALOG_FALLBACK_WARNING);
                Catalog::embedded(see_more)?
            }
            None => {
                let catalog = Catalog::embedded(see_more)?;
                log::info!("{} embedded projects loaded", catalog.len());
                catalog
            }
        };

        Ok((Self { profile, catalog }, warnings))
    }
}

fn display(path: Option<&Path>) -> String {
    path.map_or_else(String::new, |p| p.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_load_without_warnings() {
        let (portfolio, warnings) = Portfolio::load(None, None).expect("embedded data");
        assert!(warnings.is_empty());
        assert!(!portfolio.catalog.is_empty());
        assert_eq!(portfolio.catalog.see_more().url, portfolio.profile.github_url);
    }

    #[test]
    fn broken_files_fall_back_with_warnings() {
        let dir = tempdir().expect("failed to create temp dir");
        let projects = dir.path().join("projects.json");
        std::fs::write(&projects, "not json").expect("failed to write file");
        let profile = dir.path().join("missing-profile.json");

        let (portfolio, warnings) =
            Portfolio::load(Some(&projects), Some(&profile)).expect("embedded fallback");

        assert_eq!(
            warnings,
            vec![PROFILE_FALLBACK_WARNING, CATALOG_FALLBACK_WARNING]
        );
        assert!(!portfolio.catalog.is_empty());
    }

    #[test]
    fn custom_catalog_is_used() {
        let dir = tempdir().expect("failed to create temp dir");
        let projects = dir.path().join("projects.json");
        std::fs::write(&projects, r#"[{ "title": "Only" }]"#).expect("failed to write file");

        let (portfolio, warnings) = Portfolio::load(Some(&projects), None).expect("loads");

        assert!(warnings.is_empty());
        assert_eq!(portfolio.catalog.len(), 1);
        assert_eq!(portfolio.catalog.cards().count(), 2);
    }
}
