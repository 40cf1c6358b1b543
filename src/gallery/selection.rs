// SPDX-License-Identifier: MPL-2.0
//! Per-project inline carousel selection.

use super::{step, Direction};
use crate::portfolio::ProjectId;
use std::collections::HashMap;

/// Currently displayed image index for each project's inline carousel.
///
/// Keyed by [`ProjectId`] rather than the display title so that two projects
/// sharing a title never share a carousel position. Projects without an entry
/// show their first image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GallerySelection {
    indices: HashMap<ProjectId, usize>,
}

impl GallerySelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selected index for `project`, 0 when never touched.
    #[must_use]
    pub fn index(&self, project: ProjectId) -> usize {
        self.indices.get(&project).copied().unwrap_or(0)
    }

    /// Jumps to `index`, wrapped modulo `total`. Returns the stored index.
    pub fn select_image(&mut self, project: ProjectId, index: usize, total: usize) -> usize {
        let index = if total == 0 { 0 } else { index % total };
        self.indices.insert(project, index);
        index
    }

    /// Steps one image in `direction`, wrapping at both ends. Returns the
    /// stored index.
    pub fn advance(&mut self, project: ProjectId, direction: Direction, total: usize) -> usize {
        let next = step(self.index(project), direction, total);
        self.indices.insert(project, next);
        next
    }
}
