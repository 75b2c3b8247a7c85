// vitrine/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_MESSAGING_BASE_URL: &str = "https://wa.me";
/// Example number shipped with the widget; real deployments must override it.
pub const PLACEHOLDER_CONTACT_ID: &str = "918123456789";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/300x350";
pub const DEFAULT_SIZE: &str = "One Size";
pub const PRODUCTS_STORAGE_KEY: &str = "products";
pub const CART_STORAGE_KEY: &str = "cart";
/// Upper bound for the card reveal stagger.
pub const MAX_REVEAL_STAGGER_MS: u64 = 10_000;

#[derive(Debug, Clone)]
pub struct StorefrontConfig {
  /// Base of the messaging deep link, without the trailing slash.
  pub messaging_base_url: String,
  /// Destination contact appended to the base URL.
  pub contact_id: String,
  pub currency_symbol: String,

  pub storage_dir: PathBuf,
  pub products_key: String,
  pub cart_key: String,

  pub placeholder_image: String,
  /// Size offered for products that were saved without any size options.
  pub default_size: String,
  /// Delay between consecutive product cards fading in.
  pub reveal_stagger_ms: u64,

  pub log_json: bool,
}

impl Default for StorefrontConfig {
  fn default() -> Self {
    Self {
      messaging_base_url: DEFAULT_MESSAGING_BASE_URL.to_string(),
      contact_id: PLACEHOLDER_CONTACT_ID.to_string(),
      currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
      storage_dir: PathBuf::from(".vitrine"),
      products_key: PRODUCTS_STORAGE_KEY.to_string(),
      cart_key: CART_STORAGE_KEY.to_string(),
      placeholder_image: PLACEHOLDER_IMAGE_URL.to_string(),
      default_size: DEFAULT_SIZE.to_string(),
      reveal_stagger_ms: 100,
      log_json: false,
    }
  }
}

impl StorefrontConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let defaults = Self::default();
    let get_env = |var_name: &str| env::var(var_name).ok().filter(|v| !v.trim().is_empty());

    let messaging_base_url = get_env("VITRINE_MESSAGING_BASE_URL")
      .map(|v| v.trim_end_matches('/').to_string())
      .unwrap_or(defaults.messaging_base_url);
    let contact_id = get_env("VITRINE_CONTACT_ID").unwrap_or(defaults.contact_id);
    let currency_symbol = get_env("VITRINE_CURRENCY").unwrap_or(defaults.currency_symbol);
    let storage_dir = get_env("VITRINE_STORAGE_DIR")
      .map(PathBuf::from)
      .unwrap_or(defaults.storage_dir);
    let default_size = get_env("VITRINE_DEFAULT_SIZE").unwrap_or(defaults.default_size);

    let reveal_stagger_ms = match get_env("VITRINE_REVEAL_STAGGER_MS") {
      Some(raw) => raw
        .trim()
        .parse::<u64>()
        .map_err(|e| AppError::Config(format!("Invalid VITRINE_REVEAL_STAGGER_MS: {}", e)))?,
      None => defaults.reveal_stagger_ms,
    };
    let log_json = match get_env("VITRINE_LOG_JSON") {
      Some(raw) => raw
        .trim()
        .parse::<bool>()
        .map_err(|e| AppError::Config(format!("Invalid VITRINE_LOG_JSON value: {}", e)))?,
      None => defaults.log_json,
    };

    let config = Self {
      messaging_base_url,
      contact_id,
      currency_symbol,
      storage_dir,
      default_size,
      reveal_stagger_ms,
      log_json,
      ..Self::default()
    };
    config.validate()?;
    Ok(config)
  }

  pub fn validate(&self) -> Result<()> {
    if self.contact_id.is_empty() || !self.contact_id.chars().all(|c| c.is_ascii_alphanumeric()) {
      return Err(AppError::Config(format!(
        "Contact id must be a non-empty alphanumeric value, got '{}'",
        self.contact_id
      )));
    }
    if !self.messaging_base_url.starts_with("https://") && !self.messaging_base_url.starts_with("http://") {
      return Err(AppError::Config(format!(
        "Messaging base URL must be an http(s) URL, got '{}'",
        self.messaging_base_url
      )));
    }
    if self.reveal_stagger_ms > MAX_REVEAL_STAGGER_MS {
      return Err(AppError::Config(format!(
        "Reveal stagger must be at most {} ms, got {}",
        MAX_REVEAL_STAGGER_MS, self.reveal_stagger_ms
      )));
    }
    if self.default_size.trim().is_empty() {
      return Err(AppError::Config("Default size must not be empty".to_string()));
    }
    Ok(())
  }

  pub fn uses_placeholder_contact(&self) -> bool {
    self.contact_id == PLACEHOLDER_CONTACT_ID
  }
}
