//! Configuration specs.
//!
//! Verify that a host TOML file seeds the root scope and registry settings.

use crate::prelude::*;
use evtag_adapters::TracingObserver;
use evtag_core::{LogFormat, LogLevel};
use similar_asserts::assert_eq;

const HOST_CONFIG: &str = r#"
[registry]
catch_panics = true

[parameters]
app_version = "1.4.0"
build = 112

[log]
level = "debug"
format = "list"
"#;

fn write_config(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("evtag.toml");
    std::fs::write(&path, HOST_CONFIG).unwrap();
    path
}

#[test]
fn base_parameters_reach_observers() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load(write_config(&dir)).unwrap();

    let registry = config.build_registry();
    let fake = Arc::new(FakeObserver::new());
    registry.register(&fake);

    config
        .root_scope(registry)
        .with(SourceKey, Some(Source::Settings))
        .emitter()
        .view(&View::new("about"));

    assert_eq!(
        fake.last().unwrap().params(),
        params(&[
            ("app_version", "1.4.0"),
            ("build", "112"),
            ("source", "settings"),
        ])
    );
}

#[test]
fn log_settings_configure_tracing_observer() {
    let config = Config::from_toml_str(HOST_CONFIG).unwrap();
    assert_eq!(config.log.level, LogLevel::Debug);
    assert_eq!(config.log.format, LogFormat::List);

    let registry = config.build_registry();
    let observer = Arc::new(TracingObserver::from_config(&config.log));
    registry.register(&observer);

    let delivery = config
        .root_scope(registry)
        .emitter()
        .interaction(&Interaction::new("submit"));
    assert_eq!(delivery.delivered, 1);
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::load(dir.path().join("absent.toml"));

    assert!(result.is_err());
}
