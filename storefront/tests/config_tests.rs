// tests/config_tests.rs
mod common;

use std::env;

use common::*;
use serial_test::serial;
use vitrine::config::{MAX_REVEAL_STAGGER_MS, PLACEHOLDER_CONTACT_ID, PRODUCTS_STORAGE_KEY};
use vitrine::{AppError, StorefrontConfig};

const VARS: [&str; 7] = [
  "VITRINE_MESSAGING_BASE_URL",
  "VITRINE_CONTACT_ID",
  "VITRINE_CURRENCY",
  "VITRINE_STORAGE_DIR",
  "VITRINE_DEFAULT_SIZE",
  "VITRINE_REVEAL_STAGGER_MS",
  "VITRINE_LOG_JSON",
];

fn clear_env() {
  for var in VARS {
    env::remove_var(var);
  }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
  setup_tracing();
  clear_env();
  let config = StorefrontConfig::from_env().unwrap();

  assert_eq!(config.messaging_base_url, "https://wa.me");
  assert_eq!(config.contact_id, PLACEHOLDER_CONTACT_ID);
  assert!(config.uses_placeholder_contact());
  assert_eq!(config.currency_symbol, "₹");
  assert_eq!(config.default_size, "One Size");
  assert_eq!(config.reveal_stagger_ms, 100);
  assert_eq!(config.products_key, PRODUCTS_STORAGE_KEY);
  assert!(!config.log_json);
}

#[test]
#[serial]
fn test_environment_overrides() {
  setup_tracing();
  clear_env();
  env::set_var("VITRINE_MESSAGING_BASE_URL", "https://chat.example/");
  env::set_var("VITRINE_CONTACT_ID", "15550001111");
  env::set_var("VITRINE_CURRENCY", "€");
  env::set_var("VITRINE_REVEAL_STAGGER_MS", "40");
  env::set_var("VITRINE_LOG_JSON", "true");

  let config = StorefrontConfig::from_env().unwrap();
  clear_env();

  assert_eq!(config.messaging_base_url, "https://chat.example");
  assert_eq!(config.contact_id, "15550001111");
  assert!(!config.uses_placeholder_contact());
  assert_eq!(config.currency_symbol, "€");
  assert_eq!(config.reveal_stagger_ms, 40);
  assert!(config.log_json);
}

#[test]
#[serial]
fn test_invalid_environment_values_are_config_errors() {
  setup_tracing();
  for (var, value) in [
    ("VITRINE_REVEAL_STAGGER_MS", "soon"),
    ("VITRINE_LOG_JSON", "maybe"),
    ("VITRINE_CONTACT_ID", "+91 812"),
    ("VITRINE_MESSAGING_BASE_URL", "wa.me"),
  ] {
    clear_env();
    env::set_var(var, value);
    let result = StorefrontConfig::from_env();
    clear_env();
    assert!(matches!(result, Err(AppError::Config(_))), "{}={}", var, value);
  }
}

#[test]
#[serial]
fn test_validate_rejects_blank_default_size() {
  setup_tracing();
  let config = StorefrontConfig {
    default_size: "  ".to_string(),
    ..test_config()
  };
  assert!(matches!(config.validate(), Err(AppError::Config(_))));
  assert!(test_config().validate().is_ok());
}

#[test]
#[serial]
fn test_validate_bounds_reveal_stagger() {
  setup_tracing();
  let at_limit = StorefrontConfig {
    reveal_stagger_ms: MAX_REVEAL_STAGGER_MS,
    ..test_config()
  };
  assert!(at_limit.validate().is_ok());

  let too_slow = StorefrontConfig {
    reveal_stagger_ms: u64::MAX,
    ..test_config()
  };
  assert!(matches!(too_slow.validate(), Err(AppError::Config(_))));

  clear_env();
  env::set_var("VITRINE_REVEAL_STAGGER_MS", "10001");
  let result = StorefrontConfig::from_env();
  clear_env();
  assert!(matches!(result, Err(AppError::Config(_))));
}
