// SPDX-License-Identifier: MPL-2.0
//! Author profile: hero text, biography, stack, résumé and contacts.

use super::assets;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A named group of technologies shown in the stack grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackGroup {
    pub name: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeEntry {
    pub period: String,
    pub title: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    #[serde(default)]
    pub summary: String,
    /// Full document opened in the system viewer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_url: Option<String>,
    #[serde(default)]
    pub entries: Vec<ResumeEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub label: String,
    pub value: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub tagline: String,
    /// Biography paragraphs.
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub stack: Vec<StackGroup>,
    #[serde(default)]
    pub resume: Resume,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    /// Target of the trailing "see more" project card.
    pub github_url: String,
    /// Lines typed out by the about-section terminal.
    #[serde(default)]
    pub code_sample: Vec<String>,
}

impl Profile {
    /// Parses a profile from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Profile`] if the JSON is malformed or incomplete.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Profile(e.to_string()))
    }

    /// Loads the profile shipped inside the binary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Profile`] if the embedded file is missing or malformed.
    pub fn embedded() -> Result<Self> {
        let json = assets::embedded_text(assets::PROFILE_FILE)
            .ok_or_else(|| Error::Profile(format!("{} not embedded", assets::PROFILE_FILE)))?;
        Self::from_json(&json)
    }

    /// Loads a profile from disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or
    /// [`Error::Profile`] if it is malformed.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
