// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::Level;
use vitrine::storage::{KeyValueStorage, MemoryStorage};
use vitrine::stores::IdClock;
use vitrine::{CatalogStore, StorefrontConfig, Storefront};

/// First id handed out by `fixed_clock`.
pub const CLOCK_START: i64 = 1_700_000_000_000;

// --- Fixtures ---
pub fn test_config() -> StorefrontConfig {
  StorefrontConfig {
    contact_id: "15550001111".to_string(),
    ..StorefrontConfig::default()
  }
}

/// A clock that advances by one millisecond per call.
pub fn fixed_clock() -> IdClock {
  let now = Arc::new(AtomicI64::new(CLOCK_START));
  Arc::new(move || now.fetch_add(1, Ordering::SeqCst))
}

/// A clock frozen at a single instant, to exercise id collisions.
pub fn frozen_clock(at: i64) -> IdClock {
  Arc::new(move || at)
}

pub fn memory_storage() -> Arc<MemoryStorage> {
  Arc::new(MemoryStorage::new())
}

pub fn storage_with(key: &str, raw: &str) -> Arc<MemoryStorage> {
  Arc::new(MemoryStorage::with_entries([(key, raw)]))
}

pub fn catalog_over(storage: Arc<MemoryStorage>) -> CatalogStore {
  CatalogStore::load(storage, &test_config()).with_clock(fixed_clock())
}

pub fn storefront_over(storage: Arc<MemoryStorage>) -> Storefront {
  let storage: Arc<dyn KeyValueStorage> = storage;
  Storefront::open(Arc::new(test_config()), storage)
    .expect("storefront should open")
    .with_clock(fixed_clock())
}

pub fn names(catalog: &CatalogStore) -> Vec<&str> {
  catalog.list().iter().map(|p| p.name.as_str()).collect()
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
