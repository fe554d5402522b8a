use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let result = parse_environment("staging");
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ENTREGA_ENV"),
        "expected InvalidEnvVar(ENTREGA_ENV), got: {result:?}"
    );
}

#[test]
fn build_app_config_uses_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(
        cfg.delivery_config_path.to_string_lossy(),
        "./config/delivery.yaml"
    );
    assert_eq!(cfg.geocoder_base_url, "https://nominatim.openstreetmap.org");
    assert_eq!(cfg.cep_base_url, "https://viacep.com.br");
    assert_eq!(cfg.http_timeout_secs, 10);
    assert_eq!(cfg.user_agent, "entrega/0.1 (delivery-quote)");
}

#[test]
fn build_app_config_applies_overrides() {
    let mut map = HashMap::new();
    map.insert("ENTREGA_ENV", "production");
    map.insert("ENTREGA_LOG_LEVEL", "debug");
    map.insert("ENTREGA_DELIVERY_CONFIG", "/etc/entrega/delivery.yaml");
    map.insert("ENTREGA_GEOCODER_BASE_URL", "http://localhost:8080/");
    map.insert("ENTREGA_HTTP_TIMEOUT_SECS", "3");
    map.insert("ENTREGA_USER_AGENT", "loja-teste/1.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(
        cfg.delivery_config_path.to_string_lossy(),
        "/etc/entrega/delivery.yaml"
    );
    assert_eq!(cfg.geocoder_base_url, "http://localhost:8080");
    assert_eq!(cfg.http_timeout_secs, 3);
    assert_eq!(cfg.user_agent, "loja-teste/1.0");
}

#[test]
fn build_app_config_fails_on_invalid_timeout() {
    let mut map = HashMap::new();
    map.insert("ENTREGA_HTTP_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ENTREGA_HTTP_TIMEOUT_SECS"),
        "expected InvalidEnvVar(ENTREGA_HTTP_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_on_zero_timeout() {
    let mut map = HashMap::new();
    map.insert("ENTREGA_HTTP_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ENTREGA_HTTP_TIMEOUT_SECS"),
        "expected InvalidEnvVar(ENTREGA_HTTP_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_on_non_http_cep_url() {
    let mut map = HashMap::new();
    map.insert("ENTREGA_CEP_BASE_URL", "viacep.com.br");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ENTREGA_CEP_BASE_URL"),
        "expected InvalidEnvVar(ENTREGA_CEP_BASE_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_on_invalid_entrega_env() {
    let mut map = HashMap::new();
    map.insert("ENTREGA_ENV", "producton");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ENTREGA_ENV"),
        "expected InvalidEnvVar(ENTREGA_ENV), got: {result:?}"
    );
}
