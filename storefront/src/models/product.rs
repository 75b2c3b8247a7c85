// vitrine/src/models/product.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::PLACEHOLDER_IMAGE_URL;
use crate::errors::{AppError, Result};

/// Catalog identity of a product. Seed products use small integers, admin-added
/// products a millisecond timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl fmt::Display for ProductId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: ProductId,
  pub name: String,
  pub price: i64, // Whole units of the display currency
  pub image: String,
  pub size_options: Vec<String>,
}

/// The editable part of a product, as produced by the admin editor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductDraft {
  pub name: String,
  pub price: i64,
  pub image: String,
  pub size_options: Vec<String>,
}

impl Product {
  pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
    Self {
      id,
      name: draft.name,
      price: draft.price,
      image: draft.image,
      size_options: draft.size_options,
    }
  }

  pub fn to_draft(&self) -> ProductDraft {
    ProductDraft {
      name: self.name.clone(),
      price: self.price,
      image: self.image.clone(),
      size_options: self.size_options.clone(),
    }
  }

  /// Sizes to offer in the selector; a product saved without sizes offers `default_size` only.
  pub fn effective_sizes(&self, default_size: &str) -> Vec<String> {
    if self.size_options.is_empty() {
      vec![default_size.to_string()]
    } else {
      self.size_options.clone()
    }
  }

  /// Whether `size` can be put in the cart for this product.
  pub fn offers_size(&self, size: &str) -> bool {
    self.size_options.is_empty() || self.size_options.iter().any(|s| s == size)
  }

  /// Trims `size` and checks it against the offered sizes.
  pub fn validate_size<'s>(&self, size: &'s str) -> Result<&'s str> {
    let size = size.trim();
    if size.is_empty() {
      return Err(AppError::Validation("A size must be selected.".to_string()));
    }
    if !self.offers_size(size) {
      return Err(AppError::Validation(format!(
        "Size '{}' is not offered for '{}'.",
        size, self.name
      )));
    }
    Ok(size)
  }
}

fn seed_product(id: i64, name: &str, price: i64, sizes: &[&str]) -> Product {
  Product {
    id: ProductId(id),
    name: name.to_string(),
    price,
    image: PLACEHOLDER_IMAGE_URL.to_string(),
    size_options: sizes.iter().map(|s| s.to_string()).collect(),
  }
}

/// Built-in catalog used whenever no valid persisted catalog exists.
pub fn seed_catalog() -> Vec<Product> {
  vec![
    seed_product(1, "Classic Shirt", 799, &["S", "M", "L", "XL"]),
    seed_product(2, "Denim Jacket", 1499, &["M", "L", "XL"]),
    seed_product(3, "Kids T-Shirt", 499, &["4", "6", "8"]),
  ]
}
