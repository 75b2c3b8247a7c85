// vitrine/src/storage/mod.rs

//! Local key-value persistence: the stand-in for browser local storage.
//!
//! Values are opaque strings (the stores write JSON). Both stores share one
//! backend through `Arc<dyn KeyValueStorage>`, so implementations take `&self`
//! and handle their own interior mutability.

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::errors::Result;

pub trait KeyValueStorage: Send + Sync {
  /// Returns the stored value, or `None` when the key was never written or has been removed.
  fn get(&self, key: &str) -> Result<Option<String>>;

  fn set(&self, key: &str, value: &str) -> Result<()>;

  /// Removing a missing key is not an error.
  fn remove(&self, key: &str) -> Result<()>;
}
