// vitrine/src/stores/migration.rs

//! Decoding of persisted catalogs, including records written by older widget
//! versions (`title` instead of `name`, missing ids, prices such as `"₹799"`,
//! no image or sizes). Everything is normalized to the canonical [`Product`].

use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

use crate::models::{Product, ProductId};

#[derive(Debug, Error)]
pub enum DecodeError {
  #[error("catalog payload is not valid JSON: {0}")]
  Json(#[from] serde_json::Error),

  #[error("catalog record {index} is unrecoverable: {reason}")]
  Record { index: usize, reason: String },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredProduct {
  id: Option<i64>,
  name: Option<String>,
  title: Option<String>,
  price: Option<StoredPrice>,
  image: Option<String>,
  size_options: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredPrice {
  Whole(i64),
  Fractional(f64),
  Text(String),
}

impl StoredPrice {
  /// Returns the price and whether it had to be converted from a non-canonical form.
  fn resolve(&self) -> Option<(i64, bool)> {
    match self {
      StoredPrice::Whole(value) if *value >= 0 => Some((*value, false)),
      StoredPrice::Whole(_) => None,
      StoredPrice::Fractional(value)
        if value.is_finite() && *value >= 0.0 && *value <= i64::MAX as f64 && value.fract() == 0.0 =>
      {
        Some((*value as i64, true))
      }
      StoredPrice::Fractional(_) => None,
      StoredPrice::Text(text) if text.contains('-') => None,
      StoredPrice::Text(text) => {
        // Currency symbols and thousands separators are dropped; "799.00" is accepted, "799.50" is not.
        let numeric: String = text.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
        let (whole, fraction) = numeric.split_once('.').unwrap_or((numeric.as_str(), ""));
        if !fraction.chars().all(|c| c == '0') {
          return None;
        }
        whole.parse::<i64>().ok().map(|value| (value, true))
      }
    }
  }
}

#[derive(Debug)]
pub struct DecodedCatalog {
  pub products: Vec<Product>,
  /// True when at least one record was rewritten to the canonical schema.
  pub migrated: bool,
}

pub fn decode_catalog(raw: &str, placeholder_image: &str) -> Result<DecodedCatalog, DecodeError> {
  let records: Vec<StoredProduct> = serde_json::from_str(raw)?;

  let mut migrated = false;
  let mut seen = HashSet::new();
  let mut pending: Vec<(Option<i64>, Product)> = Vec::with_capacity(records.len());

  for (index, record) in records.into_iter().enumerate() {
    let name = match (record.name, record.title) {
      (Some(name), _) => name,
      (None, Some(title)) => {
        migrated = true;
        title
      }
      (None, None) => {
        return Err(DecodeError::Record {
          index,
          reason: "no name or title".to_string(),
        })
      }
    };

    let (price, price_converted) = record
      .price
      .as_ref()
      .and_then(StoredPrice::resolve)
      .ok_or_else(|| DecodeError::Record {
        index,
        reason: "missing or unreadable price".to_string(),
      })?;
    migrated |= price_converted;

    let image = match record.image {
      Some(image) if !image.trim().is_empty() => image,
      _ => {
        migrated = true;
        placeholder_image.to_string()
      }
    };

    let size_options = match record.size_options {
      Some(sizes) => sizes,
      None => {
        migrated = true;
        Vec::new()
      }
    };

    // A repeated id is treated like a missing one so the catalog keeps unique ids.
    let id = record.id.filter(|id| seen.insert(*id));
    migrated |= id.is_none();

    pending.push((
      id,
      Product {
        id: ProductId(0),
        name,
        price,
        image,
        size_options,
      },
    ));
  }

  // Ids are handed out after the largest kept id; running out makes the payload unusable.
  let mut next_id = seen.iter().copied().max().unwrap_or(0).checked_add(1);
  let mut products = Vec::with_capacity(pending.len());
  for (index, (id, mut product)) in pending.into_iter().enumerate() {
    let id = match id {
      Some(id) => id,
      None => {
        let assigned = next_id.ok_or_else(|| DecodeError::Record {
          index,
          reason: "no free id left to assign".to_string(),
        })?;
        next_id = assigned.checked_add(1);
        assigned
      }
    };
    product.id = ProductId(id);
    products.push(product);
  }

  Ok(DecodedCatalog { products, migrated })
}
