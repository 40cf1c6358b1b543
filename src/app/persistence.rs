// SPDX-License-Identifier: MPL-2.0
//! Preference persistence.
//!
//! The theme mode is the only state written back to `settings.toml`. Each
//! change reloads the file, applies the edit and saves it, so settings edited
//! by hand survive. A file that no longer parses is left untouched. A
//! language picked in the footer lasts for the session; the startup language
//! comes from `--lang` or `[general].language`.

use super::config::{self, Config};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;

/// Warning key shown when preferences could not be written.
pub const SAVE_WARNING_KEY: &str = "notification-config-save-error";

/// Reloads the config, applies `edit` and saves it back.
///
/// Skipped in unit tests so they never touch the user's settings.
fn update_config(edit: impl FnOnce(&mut Config)) -> Result<()> {
    if cfg!(test) {
        return Ok(());
    }
    update_config_with_override(None, edit)
}

/// Same as [`update_config`] against a custom config directory.
///
/// # Errors
///
/// Returns [`Error::Config`] without writing anything when the existing
/// file could not be read, so a broken file is never replaced by defaults.
fn update_config_with_override(
    base_dir: Option<PathBuf>,
    edit: impl FnOnce(&mut Config),
) -> Result<()> {
    let (mut cfg, warning) = config::load_with_override(base_dir.clone());
    if warning.is_some() {
        return Err(Error::Config(
            "settings file is unreadable, leaving it untouched".to_string(),
        ));
    }
    edit(&mut cfg);
    config::save_with_override(&cfg, base_dir)
}

/// Persists the theme mode.
pub fn persist_theme(theme_mode: ThemeMode) -> Result<()> {
    update_config(|cfg| cfg.general.theme_mode = theme_mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::CONFIG_FILE;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn theme_change_keeps_other_settings() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = Some(temp_dir.path().to_path_buf());
        let mut initial = Config::default();
        initial.terminal.typing_interval_ms = Some(70);
        config::save_with_override(&initial, base_dir.clone())
            .expect("failed to save config");

        update_config_with_override(base_dir.clone(), |cfg| {
            cfg.general.theme_mode = ThemeMode::Light;
        })
        .expect("failed to update config");

        let (loaded, warning) = config::load_with_override(base_dir);
        assert!(warning.is_none());
        assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
        assert_eq!(loaded.terminal.typing_interval_ms, Some(70));
    }

    #[test]
    fn theme_change_creates_missing_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = Some(temp_dir.path().to_path_buf());

        update_config_with_override(base_dir.clone(), |cfg| {
            cfg.general.theme_mode = ThemeMode::Dark;
        })
        .expect("failed to update config");

        let (loaded, _) = config::load_with_override(base_dir);
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn unreadable_settings_are_not_overwritten() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[general\nbroken")
            .expect("failed to write corrupted config");

        let result = update_config_with_override(Some(temp_dir.path().to_path_buf()), |cfg| {
            cfg.general.theme_mode = ThemeMode::Dark;
        });

        assert!(matches!(result, Err(Error::Config(_))));
        let content = fs::read_to_string(&path).expect("failed to read config");
        assert_eq!(content, "[general\nbroken");
    }
}
