// SPDX-License-Identifier: MPL-2.0
use iced_atlas::config::{self, Config, MapConfig};
use iced_atlas::icons::{Family, Registry, Style, StyleDefaults};
use iced_atlas::map::create_map_client;
use iced_atlas::ui::toasts::{Manager, Notification, Options, Position, Timeout};
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn bootstrap_from_persisted_settings() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    // Persist a customized configuration, the way a previous session would.
    let saved = Config {
        map: MapConfig {
            access_token: Some("pk.integration".to_string()),
            style: "mapbox/outdoors-v12".to_string(),
            center_lon: -0.1276,
            center_lat: 51.5072,
            zoom: 10.0,
        },
        toasts: Options {
            position: Position::BottomCenter,
            timeout: Timeout::After(Duration::from_millis(5000)),
            ..Options::default()
        },
        icons: StyleDefaults::new(Family::Classic, Style::Solid),
    };
    config::save_to_path(&saved, &config_path).expect("Failed to write config file");

    // Reload and assemble the bootstrap pieces from it.
    let loaded = config::load_from_path(&config_path).expect("Failed to load config from path");
    assert_eq!(loaded, saved);

    let registry = Registry::builtin();
    let manager = Manager::new(loaded.toasts);
    let client = create_map_client(&loaded.map);

    assert_eq!(registry.len(), 28);
    assert_eq!(manager.options().position, Position::BottomCenter);
    assert_eq!(client.style(), "mapbox/outdoors-v12");
    assert!(client.has_access_token());

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn toast_lifecycle_follows_the_configured_timeout() {
    let options = Options {
        timeout: Timeout::After(Duration::from_millis(500)),
        ..Options::default()
    };
    let mut manager = Manager::new(options);

    manager.push(Notification::success("Style loaded"));
    manager.push(Notification::error("Tile request failed").with_timeout(Timeout::Disabled));

    let start = Instant::now();
    manager.tick(start);
    manager.tick(start + Duration::from_millis(600));

    // The timed toast expired; the pinned error stays until dismissed.
    assert_eq!(manager.visible_count(), 1);
    let pinned = manager.visible().next().expect("pinned toast visible");
    assert_eq!(pinned.message(), "Tile request failed");

    let id = pinned.id();
    assert!(manager.dismiss(id));
    assert_eq!(manager.visible_count(), 0);
}

#[test]
fn severity_icons_resolve_against_the_builtin_registry() {
    let registry = Registry::builtin();
    let manager = Manager::new(Options::default());

    // Every severity used by the toast widget must resolve to a registered
    // glyph, otherwise the overlay silently renders placeholders.
    for notification in [
        Notification::success("ok"),
        Notification::info("fyi"),
        Notification::warning("careful"),
        Notification::error("broken"),
    ] {
        assert!(registry.contains(notification.severity().icon_name()));
    }
    assert!(!manager.has_notifications());
}
