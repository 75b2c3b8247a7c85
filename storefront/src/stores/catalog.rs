// vitrine/src/stores/catalog.rs

use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn};

use super::migration::decode_catalog;
use crate::config::StorefrontConfig;
use crate::errors::{AppError, Result};
use crate::models::{seed_catalog, Product, ProductDraft, ProductId};
use crate::storage::KeyValueStorage;

/// Source of fresh product ids, in milliseconds since the epoch.
pub type IdClock = Arc<dyn Fn() -> i64 + Send + Sync>;

fn system_clock() -> IdClock {
  Arc::new(|| chrono::Utc::now().timestamp_millis())
}

/// Owns the ordered product list and keeps it in sync with storage.
pub struct CatalogStore {
  storage: Arc<dyn KeyValueStorage>,
  key: String,
  placeholder_image: String,
  products: Vec<Product>,
  clock: IdClock,
}

impl CatalogStore {
  /// Loads the persisted catalog. Missing or malformed data yields the seed list;
  /// this never fails.
  #[instrument(name = "CatalogStore::load", skip_all, fields(key = %config.products_key))]
  pub fn load(storage: Arc<dyn KeyValueStorage>, config: &StorefrontConfig) -> Self {
    let mut store = Self {
      storage,
      key: config.products_key.clone(),
      placeholder_image: config.placeholder_image.clone(),
      products: Vec::new(),
      clock: system_clock(),
    };
    store.products = store.read_persisted().unwrap_or_else(seed_catalog);
    info!(count = store.products.len(), "Catalog loaded.");
    store
  }

  /// Replaces the id source; mainly for deterministic tests.
  pub fn with_clock(mut self, clock: IdClock) -> Self {
    self.clock = clock;
    self
  }

  fn read_persisted(&self) -> Option<Vec<Product>> {
    let raw = match self.storage.get(&self.key) {
      Ok(Some(raw)) => raw,
      Ok(None) => {
        debug!("No persisted catalog, using seed products.");
        return None;
      }
      Err(e) => {
        warn!(error = %e, "Could not read persisted catalog, using seed products.");
        return None;
      }
    };

    let decoded = match decode_catalog(&raw, &self.placeholder_image) {
      Ok(decoded) => decoded,
      Err(e) => {
        warn!(error = %e, "Persisted catalog is malformed, using seed products.");
        return None;
      }
    };

    if decoded.migrated {
      info!("Persisted catalog used a legacy schema; writing back the normalized form.");
      if let Err(e) = write_products(self.storage.as_ref(), &self.key, &decoded.products) {
        warn!(error = %e, "Could not persist the normalized catalog.");
      }
    }
    Some(decoded.products)
  }

  pub fn list(&self) -> &[Product] {
    &self.products
  }

  pub fn get(&self, id: ProductId) -> Option<&Product> {
    self.products.iter().find(|p| p.id == id)
  }

  pub fn len(&self) -> usize {
    self.products.len()
  }

  pub fn is_empty(&self) -> bool {
    self.products.is_empty()
  }

  /// Appends a new product under a freshly assigned id and persists.
  #[instrument(name = "CatalogStore::add", skip(self, draft), fields(name = %draft.name))]
  pub fn add(&mut self, draft: ProductDraft) -> Result<ProductId> {
    let id = self.next_id()?;
    self.products.push(Product::from_draft(id, draft));
    info!(%id, "Product added.");
    self.save()?;
    Ok(id)
  }

  /// Replaces the product in place. `Ok(None)` means no product has that id and
  /// nothing was changed.
  #[instrument(name = "CatalogStore::update", skip(self, draft))]
  pub fn update(&mut self, id: ProductId, draft: ProductDraft) -> Result<Option<Product>> {
    let Some(slot) = self.products.iter_mut().find(|p| p.id == id) else {
      warn!("Update requested for unknown product.");
      return Ok(None);
    };
    let previous = std::mem::replace(slot, Product::from_draft(id, draft));
    info!("Product updated.");
    self.save()?;
    Ok(Some(previous))
  }

  /// Removes the product. Existing cart lines keep their own snapshot.
  #[instrument(name = "CatalogStore::remove", skip(self))]
  pub fn remove(&mut self, id: ProductId) -> Result<Option<Product>> {
    let Some(idx) = self.products.iter().position(|p| p.id == id) else {
      warn!("Remove requested for unknown product.");
      return Ok(None);
    };
    let removed = self.products.remove(idx);
    info!("Product removed.");
    self.save()?;
    Ok(Some(removed))
  }

  /// Drops the persisted catalog and reverts to the seed list.
  #[instrument(name = "CatalogStore::reset", skip(self))]
  pub fn reset(&mut self) -> Result<()> {
    self.products = seed_catalog();
    self.storage.remove(&self.key).map_err(|e| {
      error!(error = %e, "Failed to clear the persisted catalog.");
      e
    })?;
    info!("Catalog reset to seed products.");
    Ok(())
  }

  /// Writes the current list to storage. The in-memory list is kept even if the write fails.
  pub fn save(&self) -> Result<()> {
    write_products(self.storage.as_ref(), &self.key, &self.products).map_err(|e| {
      error!(error = %e, key = %self.key, "Failed to persist catalog.");
      e
    })
  }

  // Timestamp ids, bumped past the largest id in use so two adds in the same
  // millisecond still get distinct ids.
  fn next_id(&self) -> Result<ProductId> {
    let now = (self.clock)();
    match self.products.iter().map(|p| p.id.0).max() {
      Some(max) if max >= now => max
        .checked_add(1)
        .map(ProductId)
        .ok_or_else(|| AppError::Validation("No product id left to assign.".to_string())),
      _ => Ok(ProductId(now)),
    }
  }
}

fn write_products(storage: &dyn KeyValueStorage, key: &str, products: &[Product]) -> Result<()> {
  let json = serde_json::to_string(products)?;
  storage.set(key, &json)
}
