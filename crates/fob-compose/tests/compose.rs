//! End-to-end composition of the built-in profiles.

use std::path::PathBuf;

use fob_compose::{
    ComposeError, EntryMap, PluginKind, Profile, ProjectSettings, build_base, compose,
    compose_profile,
};
use serde_json::json;

fn settings() -> ProjectSettings {
    ProjectSettings::with_root("/srv/site")
}

#[test]
fn production_descriptor() {
    let descriptor = compose(Some("build:prod"), &settings()).unwrap();

    assert_eq!(
        descriptor.env.as_ref().unwrap()["NODE_ENV"],
        json!("production")
    );
    let entry = descriptor.entry.as_ref().unwrap();
    assert_eq!(entry["vendor"], vec!["jquery".to_string()]);
    assert_eq!(entry["app"], vec!["./js/index.js".to_string()]);
    assert!(descriptor.has_plugin(PluginKind::Clean));
    assert!(descriptor.has_plugin(PluginKind::Minify));
    assert!(descriptor.dev_server.is_none());
    assert!(descriptor.devtool.is_none());

    let json = serde_json::to_value(&descriptor).unwrap();
    assert!(json.get("devServer").is_none());
}

#[test]
fn production_plugins_follow_overlay_order() {
    let descriptor = compose(Some("build:prod"), &settings()).unwrap();
    let kinds: Vec<_> = descriptor.plugins().iter().map(|p| p.kind).collect();
    assert_eq!(
        kinds,
        vec![
            PluginKind::Clean,
            PluginKind::SplitBundle,
            PluginKind::Minify,
            PluginKind::ConcatenateModules,
        ]
    );
}

#[test]
fn development_descriptor() {
    let descriptor = compose(Some("build:dev"), &settings()).unwrap();

    assert_eq!(descriptor.devtool.as_deref(), Some("inline-source-map"));
    assert!(!descriptor.has_plugin(PluginKind::Minify));
    assert!(!descriptor.has_plugin(PluginKind::Clean));
    assert!(descriptor.dev_server.is_none());
    assert!(descriptor.env.is_none());
}

#[test]
fn default_watch_descriptor() {
    for signal in [None, Some("start"), Some("watch")] {
        let descriptor = compose(signal, &settings()).unwrap();

        assert_eq!(descriptor.devtool.as_deref(), Some("inline-source-map"));
        assert_eq!(
            serde_json::to_value(descriptor.dev_server.as_ref().unwrap()).unwrap(),
            json!({ "host": "localhost", "port": 8100 })
        );
    }
}

#[test]
fn base_keys_survive_every_profile() {
    for profile in Profile::ALL {
        let json = serde_json::to_value(compose_profile(profile, &settings()).unwrap()).unwrap();

        assert_eq!(json["context"], json!("/srv/site/app"));
        assert_eq!(json["output"]["path"], json!("/srv/site/dist"));
        assert_eq!(json["output"]["publicPath"], json!("http://jafoteng.co/mfs/"));
        assert_eq!(
            json["resolve"]["alias"]["materialize"],
            json!("/srv/site/app/vendors/materialize/js/bin/materialize.js")
        );
        assert!(json.get("devServerPort").is_none());
        assert_eq!(json["module"]["rules"].as_array().unwrap().len(), 1);
    }
}

#[test]
fn style_rules_follow_profile_environment() {
    let prod = compose(Some("build:prod"), &settings()).unwrap();
    let dev = compose(Some("build:dev"), &settings()).unwrap();

    let css_options = |d: &fob_compose::BuildDescriptor| d.rules()[0].loaders[1].options.clone();
    assert_eq!(css_options(&prod)["sourceMap"], json!(false));
    assert_eq!(css_options(&dev)["sourceMap"], json!(true));
    assert_eq!(
        dev.rules()[0].loaders[3].options["includePaths"],
        json!([
            "/srv/site/node_modules/compass-mixins/lib",
            "/srv/site/app/vendors/materialize/sass"
        ])
    );
}

#[test]
fn composition_is_deterministic() {
    let a = compose(Some("build:prod"), &settings()).unwrap();
    let b = compose(Some("build:prod"), &settings()).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
}

#[test]
fn production_define_table() {
    let descriptor = compose(Some("build:prod"), &settings()).unwrap();
    let table = descriptor.define_table();
    assert_eq!(table.len(), 1);
    assert_eq!(table["process.env.NODE_ENV"], "\"production\"");
}

#[test]
fn empty_entry_map_is_invalid_base_config() {
    let err = build_base(
        "/srv/site/app",
        &EntryMap::new(),
        "/srv/site/dist",
        "/",
        &Default::default(),
        8100,
    )
    .unwrap_err();
    assert!(matches!(err, ComposeError::InvalidBaseConfig { .. }));
}

#[test]
fn invalid_base_aborts_before_any_overlay() {
    let mut settings = settings();
    settings.entry.clear();
    for profile in Profile::ALL {
        let err = compose_profile(profile, &settings).unwrap_err();
        assert!(matches!(err, ComposeError::InvalidBaseConfig { .. }));
    }
}

#[test]
fn invalid_overlay_options_abort_composition() {
    let mut settings = settings();
    settings.style.prefix_wrap.prefix_class_name = String::new();
    let err = compose(Some("build:dev"), &settings).unwrap_err();
    assert!(matches!(
        err,
        ComposeError::InvalidOverlayOptions { producer: "style", .. }
    ));
}

#[test]
fn sass_resources_enable_css_modules_rule() {
    let mut settings = settings();
    settings.style.sass_resources = vec![PathBuf::from("app/scss/app.scss")];
    let descriptor = compose(None, &settings).unwrap();
    assert_eq!(descriptor.rules().len(), 2);
    assert_eq!(
        descriptor.rules()[1].loaders.last().unwrap().options,
        json!({ "resources": ["/srv/site/app/scss/app.scss"] })
    );
}
