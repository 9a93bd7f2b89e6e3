//! Settings discovery: files, defaults and environment overrides.

use std::fs;
use std::path::PathBuf;

use fob_compose::{SettingsDiscovery, SettingsError, compose};
use serial_test::serial;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write settings");
    path
}

#[test]
#[serial]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().expect("tempdir");
    let discovery = SettingsDiscovery::new(dir.path());

    assert!(discovery.find().is_none());
    let settings = discovery.load().expect("load defaults");
    assert_eq!(settings.root, dir.path());
    assert_eq!(settings.dev_server_port, 8100);
    assert_eq!(settings.entry["app"], vec!["./js/index.js".to_string()]);
}

#[test]
#[serial]
fn toml_file_overrides_defaults() {
    let dir = TempDir::new().expect("tempdir");
    write(
        &dir,
        "fob-compose.toml",
        r#"
dev_server_port = 9000
public_path = "/static/"

[entry]
main = ["./src/main.js"]

[style.prefix_wrap]
enabled = false
"#,
    );

    let settings = SettingsDiscovery::new(dir.path()).load().expect("load toml");

    assert_eq!(settings.dev_server_port, 9000);
    assert_eq!(settings.public_path, "/static/");
    assert_eq!(settings.entry.keys().collect::<Vec<_>>(), vec!["main"]);
    assert!(!settings.style.prefix_wrap.enabled);
    // Untouched keys keep their defaults.
    assert_eq!(settings.alias.len(), 2);
}

#[test]
#[serial]
fn json_file_is_found_when_no_toml_exists() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(&dir, "fob-compose.json", r#"{ "context": "src", "output_path": "build" }"#);

    let discovery = SettingsDiscovery::new(dir.path());
    assert_eq!(discovery.find(), Some(path));

    let settings = discovery.load().expect("load json");
    assert_eq!(settings.context, PathBuf::from("src"));
    assert_eq!(settings.output_path, PathBuf::from("build"));
}

#[test]
#[serial]
fn toml_wins_over_json() {
    let dir = TempDir::new().expect("tempdir");
    write(&dir, "fob-compose.json", r#"{ "dev_server_port": 1111 }"#);
    write(&dir, "fob-compose.toml", "dev_server_port = 2222\n");

    let settings = SettingsDiscovery::new(dir.path()).load().expect("load");
    assert_eq!(settings.dev_server_port, 2222);
}

#[test]
#[serial]
fn explicit_path_must_exist() {
    let dir = TempDir::new().expect("tempdir");
    let err = SettingsDiscovery::new(dir.path())
        .load_from("missing.toml")
        .unwrap_err();

    assert!(matches!(err, SettingsError::NotFound(ref path) if path == &dir.path().join("missing.toml")));
}

#[test]
#[serial]
fn explicit_path_with_unknown_extension_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    write(&dir, "settings.yaml", "dev_server_port: 1\n");

    let err = SettingsDiscovery::new(dir.path())
        .load_from("settings.yaml")
        .unwrap_err();
    assert!(matches!(err, SettingsError::UnsupportedFormat(ref ext) if ext == "yaml"));
}

#[test]
#[serial]
fn wrongly_typed_value_names_the_field() {
    let dir = TempDir::new().expect("tempdir");
    write(&dir, "fob-compose.toml", "dev_server_port = \"eighty\"\n");

    let err = SettingsDiscovery::new(dir.path()).load().unwrap_err();
    match err {
        SettingsError::InvalidValue { field, hint } => {
            assert_eq!(field, "dev_server_port");
            assert!(hint.is_some());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
#[serial]
fn environment_overrides_file() {
    let dir = TempDir::new().expect("tempdir");
    write(&dir, "fob-compose.toml", "dev_server_port = 9000\n");

    // SAFETY: serialized with every other test that touches the environment.
    unsafe {
        std::env::set_var("FOB_COMPOSE_DEV_SERVER_PORT", "9100");
        std::env::set_var("FOB_COMPOSE_STYLE__PREFIX_WRAP__PREFIX_CLASS_NAME", ".embed");
    }
    let result = SettingsDiscovery::new(dir.path()).load();
    unsafe {
        std::env::remove_var("FOB_COMPOSE_DEV_SERVER_PORT");
        std::env::remove_var("FOB_COMPOSE_STYLE__PREFIX_WRAP__PREFIX_CLASS_NAME");
    }

    let settings = result.expect("load with env");
    assert_eq!(settings.dev_server_port, 9100);
    assert_eq!(settings.style.prefix_wrap.prefix_class_name, ".embed");
    assert!(settings.style.prefix_wrap.enabled);
}

#[test]
#[serial]
fn partial_prefix_wrap_table_keeps_wrap_enabled() {
    let dir = TempDir::new().expect("tempdir");
    write(
        &dir,
        "fob-compose.toml",
        "[style.prefix_wrap]\nprefix_class_name = \".embed\"\n",
    );

    let settings = SettingsDiscovery::new(dir.path()).load().expect("load");
    assert!(settings.style.prefix_wrap.enabled);

    let descriptor = compose(Some("build:dev"), &settings).expect("compose");
    let postcss = &descriptor.rules()[0].loaders[2];
    assert_eq!(postcss.loader, "postcss-loader");
    assert_eq!(
        postcss.options["plugins"],
        serde_json::json!(["autoprefixer", { "postcss-prefixwrap": ".embed" }])
    );
}

#[test]
#[serial]
fn loaded_settings_compose_with_configured_port() {
    let dir = TempDir::new().expect("tempdir");
    write(&dir, "fob-compose.toml", "dev_server_port = 3000\n");

    let settings = SettingsDiscovery::new(dir.path()).load().expect("load");
    let descriptor = compose(None, &settings).expect("compose");

    let dev_server = descriptor.dev_server.as_ref().expect("dev server present");
    assert_eq!(dev_server.port, Some(3000));
    assert_eq!(dev_server.host.as_deref(), Some("localhost"));
}
