// vitrine/src/storage/memory.rs

use parking_lot::RwLock;
use std::collections::HashMap;

use super::KeyValueStorage;
use crate::errors::Result;

/// In-process storage. Used by tests and by hosts that persist elsewhere.
#[derive(Debug, Default)]
pub struct MemoryStorage {
  entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }

  /// Storage pre-populated with raw values, e.g. to simulate what an older widget left behind.
  pub fn with_entries<I, K, V>(entries: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
  {
    Self {
      entries: RwLock::new(entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
    }
  }

  pub fn contains_key(&self, key: &str) -> bool {
    self.entries.read().contains_key(key)
  }
}

impl KeyValueStorage for MemoryStorage {
  fn get(&self, key: &str) -> Result<Option<String>> {
    Ok(self.entries.read().get(key).cloned())
  }

  fn set(&self, key: &str, value: &str) -> Result<()> {
    self.entries.write().insert(key.to_string(), value.to_string());
    Ok(())
  }

  fn remove(&self, key: &str) -> Result<()> {
    self.entries.write().remove(key);
    Ok(())
  }
}
