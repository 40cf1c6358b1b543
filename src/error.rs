// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Payloads are plain strings so errors stay `Clone` and can travel inside
//! UI messages.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Catalog Error: {0}")]
    Catalog(String),
    #[error("Profile Error: {0}")]
    Profile(String),
    #[error("Link Error: {0}")]
    Link(String),
}

impl Error {
    /// Returns the i18n message key used when this error is shown as a toast.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Catalog(_) => "error-catalog",
            Error::Profile(_) => "error-profile",
            Error::Link(_) => "notification-link-open-error",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
