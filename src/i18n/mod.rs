// SPDX-License-Identifier: MPL-2.0
//! Internationalization support using the Fluent localization system.
//!
//! - Locale resolution from CLI, config, then the OS locale
//! - `.ftl` translation files embedded at build time
//! - Runtime language switching
//! - Fallback to `en-US` when a locale or key is missing

pub mod fluent;
