// SPDX-License-Identifier: MPL-2.0
use iced_folio::config::{self, Config};
use iced_folio::gallery::{self, modal, Direction, Effect, Gallery, ScrollLock};
use iced_folio::i18n::fluent::I18n;
use iced_folio::portfolio::{Card, Catalog, Portfolio, ProjectId};
use iced_folio::ui::theming::ThemeMode;
use std::fs;
use tempfile::tempdir;

fn first_gallery_project(catalog: &Catalog) -> (ProjectId, usize) {
    catalog
        .showcase()
        .find(|(_, project)| project.image_count() > 1)
        .map(|(id, project)| (id, project.image_count()))
        .expect("embedded catalog has a multi-image project")
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());
    config::save_to_path(&config, &path)
        .expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path)
        .expect("Failed to load initial config");
    assert_eq!(
        I18n::new(None, &loaded).current_locale().to_string(),
        "en-US"
    );

    config.general.language = Some("pt-BR".to_string());
    config::save_to_path(&config, &path)
        .expect("Failed to write updated config file");
    let loaded = config::load_from_path(&path)
        .expect("Failed to load updated config");
    assert_eq!(
        I18n::new(None, &loaded).current_locale().to_string(),
        "pt-BR"
    );
}

#[test]
fn cli_language_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("pt-BR".to_string());
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn preferences_round_trip_through_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.theme_mode = ThemeMode::Dark;
    config.terminal.typing_interval_ms = Some(60);
    config::save_to_path(&config, &path)
        .expect("Failed to write config");

    let loaded = config::load_from_path(&path)
        .expect("Failed to load config");
    assert_eq!(loaded, config);
    assert_eq!(loaded.terminal.typing_interval().as_millis(), 60);
}

#[test]
fn embedded_portfolio_renders_see_more_last() {
    let portfolio = Portfolio::embedded().expect("embedded portfolio");
    let cards: Vec<Card<'_>> = portfolio.catalog.cards().collect();

    assert_eq!(cards.len(), portfolio.catalog.len() + 1);
    match cards.last() {
        Some(Card::SeeMore(see_more)) => assert_eq!(see_more.url, portfolio.profile.github_url),
        other => panic!("expected trailing see-more card, got {other:?}"),
    }
}

#[test]
fn custom_catalog_resolves_images_next_to_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("shot.svg"),
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"/>"#,
    )
    .expect("Failed to write image");
    let projects = dir.path().join("projects.json");
    fs::write(
        &projects,
        r#"[{ "title": "Local", "images": ["shot.svg", "gone.svg"] }]"#,
    )
    .expect("Failed to write catalog");

    let (portfolio, warnings) =
        Portfolio::load(Some(&projects), None)
            .expect("custom catalog loads");
    assert!(warnings.is_empty());
    assert_eq!(portfolio.catalog.len(), 1);
    assert!(!portfolio.catalog.image("shot.svg").is_missing());
    assert!(portfolio.catalog.image("gone.svg").is_missing());
}

#[test]
fn inline_carousels_are_independent_and_modal_starts_at_inline_index() {
    let portfolio = Portfolio::embedded().expect("embedded portfolio");
    let catalog = &portfolio.catalog;
    let (project, total) = first_gallery_project(catalog);
    let mut gallery = Gallery::new(ScrollLock::new());

    let effect = gallery.handle(
        gallery::Message::Advance {
            project,
            direction: Direction::Previous,
        },
        catalog,
    );
    assert_eq!(
        effect,
        Effect::ImageChanged {
            project,
            from: 0,
            to: total - 1
        }
    );

    for (other, _) in catalog.showcase().filter(|(id, _)| *id != project) {
        assert_eq!(gallery.selection().index(other), 0);
    }

    let effect = gallery.handle(gallery::Message::OpenGallery { project }, catalog);
    assert_eq!(
        effect,
        Effect::ModalOpened {
            project,
            index: total - 1
        }
    );
    assert_eq!(gallery.modal().images().len(), total);
}

#[test]
fn modal_navigation_wraps_and_leaves_inline_index_alone() {
    let portfolio = Portfolio::embedded().expect("embedded portfolio");
    let catalog = &portfolio.catalog;
    let (project, total) = first_gallery_project(catalog);
    let mut gallery = Gallery::new(ScrollLock::new());

    gallery.handle(gallery::Message::OpenGallery { project }, catalog);
    for _ in 0..total {
        gallery.handle(gallery::Message::Modal(modal::Message::Next), catalog);
    }
    assert_eq!(gallery.modal().current_index(), 0);

    gallery.handle(gallery::Message::Modal(modal::Message::Previous), catalog);
    assert_eq!(gallery.modal().current_index(), total - 1);
    assert_eq!(gallery.selection().index(project), 0);
}

#[test]
fn every_close_path_releases_the_scroll_lock() {
    let portfolio = Portfolio::embedded().expect("embedded portfolio");
    let catalog = &portfolio.catalog;
    let (project, _) = first_gallery_project(catalog);
    let lock = ScrollLock::new();
    let mut gallery = Gallery::new(lock.clone());

    for close in [modal::Message::Close, modal::Message::BackdropPressed] {
        gallery.handle(gallery::Message::OpenGallery { project }, catalog);
        assert!(lock.is_locked());

        gallery.handle(
            gallery::Message::Modal(modal::Message::ContentPressed),
            catalog,
        );
        assert!(lock.is_locked(), "content presses never close the modal");

        let effect = gallery.handle(gallery::Message::Modal(close), catalog);
        assert_eq!(effect, Effect::ModalClosed);
        assert!(!lock.is_locked());
    }

    gallery.handle(gallery::Message::OpenGallery { project }, catalog);
    drop(gallery);
    assert!(!lock.is_locked());
}
