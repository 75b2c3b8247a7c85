// vitrine/src/stores/cart.rs

use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn};

use crate::config::StorefrontConfig;
use crate::errors::{AppError, Result};
use crate::models::{lines_item_count, lines_total, CartLine, LineKey, Product};
use crate::storage::KeyValueStorage;

/// Owns the cart lines, at most one per `(product id, size)`, in insertion order.
pub struct CartStore {
  storage: Arc<dyn KeyValueStorage>,
  key: String,
  lines: Vec<CartLine>,
}

impl CartStore {
  /// Loads the persisted cart; missing or malformed data yields an empty cart.
  #[instrument(name = "CartStore::load", skip_all, fields(key = %config.cart_key))]
  pub fn load(storage: Arc<dyn KeyValueStorage>, config: &StorefrontConfig) -> Self {
    let lines = match storage.get(&config.cart_key) {
      Ok(Some(raw)) => match serde_json::from_str::<Vec<CartLine>>(&raw) {
        Ok(lines) => normalize_lines(lines).unwrap_or_else(|| {
          warn!("Persisted cart quantities overflow, starting with an empty cart.");
          Vec::new()
        }),
        Err(e) => {
          warn!(error = %e, "Persisted cart is malformed, starting with an empty cart.");
          Vec::new()
        }
      },
      Ok(None) => Vec::new(),
      Err(e) => {
        warn!(error = %e, "Could not read persisted cart, starting with an empty cart.");
        Vec::new()
      }
    };
    debug!(lines = lines.len(), "Cart loaded.");
    Self {
      storage,
      key: config.cart_key.clone(),
      lines,
    }
  }

  pub fn lines(&self) -> &[CartLine] {
    &self.lines
  }

  pub fn line(&self, key: &LineKey) -> Option<&CartLine> {
    self.lines.iter().find(|l| &l.key == key)
  }

  pub fn len(&self) -> usize {
    self.lines.len()
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  /// Total number of units across all lines.
  pub fn item_count(&self) -> u32 {
    lines_item_count(&self.lines)
  }

  /// Saturates at `i64::MAX`.
  pub fn total(&self) -> i64 {
    lines_total(&self.lines)
  }

  /// Adds one unit of `product` in `size`: bumps the matching line or appends a new one.
  #[instrument(name = "CartStore::add_item", skip(self, product), fields(product_id = %product.id))]
  pub fn add_item(&mut self, product: &Product, size: &str) -> Result<&CartLine> {
    let size = product.validate_size(size)?;

    let key = LineKey::new(product.id, size);
    let idx = match self.lines.iter().position(|l| l.key == key) {
      Some(idx) => {
        let line = &mut self.lines[idx];
        line.qty = line.qty.checked_add(1).ok_or_else(|| {
          AppError::Validation(format!("Quantity limit reached for '{}' size {}.", product.name, size))
        })?;
        idx
      }
      None => {
        self.lines.push(CartLine::new(product, size));
        self.lines.len() - 1
      }
    };
    info!(%key, qty = self.lines[idx].qty, "Cart line updated.");
    self.save()?;
    Ok(&self.lines[idx])
  }

  /// Drops a whole line. `Ok(None)` when the cart has no such line.
  #[instrument(name = "CartStore::remove_line", skip(self))]
  pub fn remove_line(&mut self, key: &LineKey) -> Result<Option<CartLine>> {
    let Some(idx) = self.lines.iter().position(|l| &l.key == key) else {
      return Ok(None);
    };
    let removed = self.lines.remove(idx);
    info!("Cart line removed.");
    self.save()?;
    Ok(Some(removed))
  }

  #[instrument(name = "CartStore::clear", skip(self))]
  pub fn clear(&mut self) -> Result<()> {
    self.lines.clear();
    info!("Cart cleared.");
    self.save()
  }

  pub fn save(&self) -> Result<()> {
    let json = serde_json::to_string(&self.lines)?;
    self.storage.set(&self.key, &json).map_err(|e| {
      error!(error = %e, key = %self.key, "Failed to persist cart.");
      e
    })
  }
}

// Keys are recomputed from the snapshot, duplicates merged and empty lines dropped,
// so a hand-edited or legacy cart still satisfies the one-line-per-key rule.
// `None` when merged quantities overflow.
fn normalize_lines(raw: Vec<CartLine>) -> Option<Vec<CartLine>> {
  let mut lines: Vec<CartLine> = Vec::with_capacity(raw.len());
  for mut line in raw {
    if line.qty == 0 {
      continue;
    }
    line.key = LineKey::new(line.product.id, &line.size);
    match lines.iter_mut().find(|l| l.key == line.key) {
      Some(existing) => existing.qty = existing.qty.checked_add(line.qty)?,
      None => lines.push(line),
    }
  }
  Some(lines)
}
