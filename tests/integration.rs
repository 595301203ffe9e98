// SPDX-License-Identifier: MPL-2.0
use std::sync::Arc;
use std::time::Duration;
use taskdeck::app::config::{self, Config, NotificationConfig};
use taskdeck::app::storage::{FileStorage, Storage};
use taskdeck::error::Error;
use taskdeck::ui::notifications::{
    Kind, PendingNotification, Provider, Relay, Settings, PENDING_KEY,
};
use taskdeck::ui::theming::ThemeMode;
use tempfile::tempdir;

fn mount(storage: &Arc<FileStorage>) -> Provider {
    Provider::mount(Relay::new(storage.clone()), Settings::default()).0
}

#[test]
fn login_welcome_survives_page_load_exactly_once() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let storage = Arc::new(FileStorage::new(dir.path()));

    let login_page = mount(&storage);
    login_page
        .notifier()
        .set_pending_notification(
            Kind::Success,
            Some("Login Successful."),
            "Welcome back!",
            Some(Duration::from_millis(5_000)),
        )
        .expect("Failed to park notification");
    drop(login_page);

    assert!(dir.path().join("pendingNotification.json").exists());

    let dashboard = mount(&storage);
    let delivered: Vec<_> = dashboard
        .visible()
        .map(|entry| entry.notification().message().to_string())
        .collect();
    assert_eq!(delivered, ["Welcome back!"]);
    assert_eq!(storage.get(PENDING_KEY).expect("get"), None);

    let reloaded = mount(&storage);
    assert!(reloaded.is_empty());
}

#[test]
fn only_the_last_parked_notification_is_delivered() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let storage = Arc::new(FileStorage::new(dir.path()));
    let page = mount(&storage);
    let notifier = page.notifier();

    notifier
        .set_pending(&PendingNotification::new(Kind::Info, "A"))
        .expect("park A");
    notifier
        .set_pending(&PendingNotification::new(Kind::Warning, "B"))
        .expect("park B");
    drop(page);

    let next = mount(&storage);
    let kinds: Vec<_> = next
        .visible()
        .map(|entry| (entry.notification().kind(), entry.notification().message().to_string()))
        .collect();
    assert_eq!(kinds, [(Kind::Warning, "B".to_string())]);
}

#[test]
fn corrupted_slot_is_cleared_on_page_load() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let storage = Arc::new(FileStorage::new(dir.path()));
    storage
        .set(PENDING_KEY, "{\"type\":\"success\"")
        .expect("Failed to seed slot");

    let page = mount(&storage);
    assert!(page.is_empty());
    assert_eq!(storage.get(PENDING_KEY).expect("get"), None);
}

#[test]
fn notifier_outlives_provider_only_as_an_error() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let storage = Arc::new(FileStorage::new(dir.path()));
    let notifier = mount(&storage).notifier();

    assert_eq!(
        notifier.add_notification(Kind::Info, None, "late", None),
        Err(Error::ContextUnavailable)
    );
    assert_eq!(
        notifier.set_pending_notification(Kind::Info, None, "late", None),
        Err(Error::ContextUnavailable)
    );
}

#[test]
fn notification_settings_round_trip_through_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut written = Config::default();
    written.general.theme_mode = ThemeMode::Dark;
    written.notifications = NotificationConfig {
        default_duration_ms: Some(3_000),
        dismiss_transition_ms: Some(150),
        progress_samples: Some(60),
    };
    config::save_to_path(&written, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded, written);

    let settings = loaded.notifications.settings();
    assert_eq!(settings.default_duration, Duration::from_millis(3_000));
    assert_eq!(settings.dismiss_transition, Duration::from_millis(150));
    assert_eq!(settings.progress_samples, 60);

    let (provider, _task) = Provider::mount(
        Relay::new(Arc::new(FileStorage::new(dir.path()))),
        settings,
    );
    assert_eq!(provider.settings(), settings);
}
