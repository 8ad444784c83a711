//! Integration tests for composing and registering profile defaults.
//!
//! These tests verify the end-to-end flow a service binary runs at startup:
//! classify the active profiles, compose the defaults, seed a `config`
//! builder, and confirm that higher-priority sources shadow the seeded
//! values while templated text passes through verbatim.

use config::Config;
use keel_defaults::{
    EnvClass, FeatureFlags, ResolvedDefaults, classify, compose, defaults_for_profiles,
};

fn build_config(defaults: &ResolvedDefaults) -> Config {
    defaults
        .register(Config::builder())
        .expect("defaults should register")
        .build()
        .expect("config should build")
}

#[test]
fn defaults_register_at_lowest_priority() {
    let defaults = defaults_for_profiles(["production"]);
    let config = defaults
        .register(Config::builder())
        .unwrap()
        .set_override("auth.user.password", "from-the-environment")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(
        config.get_string("auth.user.password").unwrap(),
        "from-the-environment"
    );
    // Untouched keys still come from the defaults.
    assert_eq!(config.get_string("auth.user.name").unwrap(), "admin");
}

#[test]
fn templated_values_pass_through_verbatim() {
    let defaults = defaults_for_profiles(["development"]);
    let config = build_config(&defaults);

    assert_eq!(
        config.get_string("log.file").unwrap(),
        "${keel.log.directory}/${keel.instance.name}.log"
    );
    assert_eq!(
        config.get_string("keel.instance.name").unwrap(),
        "${service.name}.${net.hostname:${HOSTNAME:localhost}}.${http.port:8080}"
    );
}

#[test]
fn conditional_keys_stay_absent_after_registration() {
    // Remote config enabled outside development: fail-fast is seeded but the
    // credential pair is not, so a reference to it stays visibly unresolved.
    let defaults = defaults_for_profiles(["test", "config"]);
    let config = build_config(&defaults);

    assert!(config.get_bool("remote_config.fail_fast").unwrap());
    assert!(config.get_string("remote_config.username").is_err());
    assert!(config.get_string("remote_config.password").is_err());
}

#[test]
fn cloud_profile_in_development_seeds_the_full_remote_config_block() {
    let defaults = defaults_for_profiles(["development", "cloud"]);
    let config = build_config(&defaults);

    assert!(config.get_bool("discovery.enabled").unwrap());
    assert!(config.get_bool("remote_config.enabled").unwrap());
    assert!(config.get_bool("remote_config.discovery.enabled").unwrap());
    assert!(config.get_bool("remote_config.fail_fast").unwrap());
    assert_eq!(config.get_string("remote_config.username").unwrap(), "admin");
    assert_eq!(config.get_string("remote_config.password").unwrap(), "admin");
}

#[test]
fn typed_values_survive_registration() {
    let defaults = defaults_for_profiles(["development"]);
    let config = build_config(&defaults);

    assert!(config.get_bool("http.access_log.enabled").unwrap());
    assert!(!config.get_bool("endpoints.info.sensitive").unwrap());
    assert_eq!(
        config
            .get_int("registry.instance.heartbeat_interval_seconds")
            .unwrap(),
        5
    );
    assert_eq!(config.get_string("trace.sample_rate").unwrap(), "1.0");
    assert_eq!(config.get_string("storage.script_encoding").unwrap(), "UTF-8");
}

#[test]
fn last_environment_tag_wins_end_to_end() {
    let defaults = defaults_for_profiles(["development", "test", "production"]);
    let config = build_config(&defaults);

    // Production resolved, so the dev-only conveniences are absent and the
    // password is the must-override sentinel.
    assert!(config.get_bool("sql.console.enabled").is_err());
    assert_eq!(
        config.get_string("auth.user.password").unwrap(),
        "Change_Me_Or_Override_Outside_Dev"
    );
    assert_eq!(
        config.get_string("keel.log.directory").unwrap(),
        "${working.dir}/logs"
    );
}

#[test]
fn classify_then_compose_matches_the_convenience_entry_point() {
    let tags = ["development", "discovery"];
    let classification = classify(tags);
    assert_eq!(
        compose(classification.env, classification.flags),
        defaults_for_profiles(tags)
    );
}

#[test]
fn resolved_defaults_serialize_to_a_flat_json_object() {
    let defaults = compose(EnvClass::Unset, FeatureFlags::empty());
    let json = serde_json::to_value(&defaults).unwrap();

    let object = json.as_object().expect("flat object");
    assert_eq!(object.len(), defaults.len());
    assert_eq!(
        object["endpoints.health.sensitive"],
        serde_json::Value::Bool(false)
    );
    assert_eq!(object["storage.script_encoding"], "UTF-8");
    assert_eq!(object["discovery.enabled"], serde_json::Value::Bool(false));
}

#[test]
fn independent_invocations_share_no_state() {
    let dev = defaults_for_profiles(["development"]);
    let prod = defaults_for_profiles(["production"]);
    let dev_again = defaults_for_profiles(["development"]);

    assert_eq!(dev, dev_again);
    assert_ne!(
        dev.get("auth.user.password"),
        prod.get("auth.user.password")
    );
}
