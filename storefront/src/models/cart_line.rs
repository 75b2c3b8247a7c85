// vitrine/src/models/cart_line.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use super::product::{Product, ProductId};

/// Identity of a cart line: the product id and the chosen size, rendered as `"{id}-{size}"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineKey(String);

impl LineKey {
  pub fn new(product_id: ProductId, size: &str) -> Self {
    LineKey(format!("{}-{}", product_id, size))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for LineKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
  pub key: LineKey,
  /// Snapshot of the product when the line was created; later catalog edits don't reach it.
  pub product: Product,
  pub size: String,
  pub qty: u32,
}

impl CartLine {
  pub fn new(product: &Product, size: &str) -> Self {
    Self {
      key: LineKey::new(product.id, size),
      product: product.clone(),
      size: size.to_string(),
      qty: 1,
    }
  }

  /// Saturates at `i64::MAX` rather than wrapping.
  pub fn line_total(&self) -> i64 {
    self.product.price.saturating_mul(i64::from(self.qty))
  }
}

/// Sum of all line totals, saturating.
pub fn lines_total(lines: &[CartLine]) -> i64 {
  lines.iter().fold(0i64, |acc, line| acc.saturating_add(line.line_total()))
}

/// Number of units across all lines, saturating.
pub fn lines_item_count(lines: &[CartLine]) -> u32 {
  lines.iter().fold(0u32, |acc, line| acc.saturating_add(line.qty))
}
