// tests/catalog_store_tests.rs
mod common;

use common::*;
use serial_test::serial;
use vitrine::config::{PLACEHOLDER_IMAGE_URL, PRODUCTS_STORAGE_KEY};
use vitrine::models::{seed_catalog, Product, ProductDraft, ProductId};
use vitrine::storage::{KeyValueStorage, MemoryStorage};
use vitrine::{AppError, CatalogStore};

fn draft(name: &str, price: i64, sizes: &[&str]) -> ProductDraft {
  ProductDraft {
    name: name.to_string(),
    price,
    image: "https://img.example/x.png".to_string(),
    size_options: sizes.iter().map(|s| s.to_string()).collect(),
  }
}

fn persisted(storage: &MemoryStorage) -> Vec<Product> {
  let raw = storage.get(PRODUCTS_STORAGE_KEY).unwrap().expect("catalog should be persisted");
  serde_json::from_str(&raw).unwrap()
}

#[test]
#[serial]
fn test_empty_storage_loads_seed_catalog() {
  setup_tracing();
  let storage = memory_storage();
  let catalog = catalog_over(storage.clone());

  assert_eq!(catalog.list(), seed_catalog().as_slice());
  assert_eq!(names(&catalog), vec!["Classic Shirt", "Denim Jacket", "Kids T-Shirt"]);
  assert_eq!(catalog.get(ProductId(2)).unwrap().price, 1499);
  // Loading alone writes nothing.
  assert!(!storage.contains_key(PRODUCTS_STORAGE_KEY));
}

#[test]
#[serial]
fn test_malformed_storage_behaves_like_empty_storage() {
  setup_tracing();
  for raw in ["{not json", "{\"id\": 1}", "[{\"id\": 1, \"price\": 10}]", "[{\"name\": \"X\"}]"] {
    let catalog = catalog_over(storage_with(PRODUCTS_STORAGE_KEY, raw));
    assert_eq!(catalog.list(), seed_catalog().as_slice(), "payload: {}", raw);
  }
}

#[test]
#[serial]
fn test_persisted_catalog_round_trips() {
  setup_tracing();
  let storage = memory_storage();
  let mut catalog = catalog_over(storage.clone());
  let id = catalog.add(draft("Linen Kurta", 1299, &["M", "L"])).unwrap();

  let reloaded = catalog_over(storage.clone());
  assert_eq!(reloaded.list(), catalog.list());
  assert_eq!(reloaded.get(id).unwrap().size_options, vec!["M", "L"]);
  assert_eq!(persisted(&storage), catalog.list());
}

#[test]
#[serial]
fn test_persisted_json_uses_camel_case_size_options() {
  setup_tracing();
  let storage = memory_storage();
  let catalog = catalog_over(storage.clone());
  catalog.save().unwrap();

  let raw = storage.get(PRODUCTS_STORAGE_KEY).unwrap().unwrap();
  assert!(raw.contains("\"sizeOptions\""));
  assert!(!raw.contains("size_options"));
}

#[test]
#[serial]
fn test_add_appends_with_fresh_id() {
  setup_tracing();
  let mut catalog = catalog_over(memory_storage());
  let id = catalog.add(draft("Scarf", 299, &[])).unwrap();

  assert_eq!(id, ProductId(CLOCK_START));
  assert_eq!(catalog.len(), 4);
  assert_eq!(catalog.list().last().unwrap().id, id);
  assert_eq!(catalog.list().last().unwrap().name, "Scarf");
}

#[test]
#[serial]
fn test_ids_stay_unique_when_clock_does_not_advance() {
  setup_tracing();
  let mut catalog = CatalogStore::load(memory_storage(), &test_config()).with_clock(frozen_clock(500));
  let a = catalog.add(draft("A", 1, &[])).unwrap();
  let b = catalog.add(draft("B", 2, &[])).unwrap();
  let c = catalog.add(draft("C", 3, &[])).unwrap();

  assert_eq!(a, ProductId(500));
  assert_eq!(b, ProductId(501));
  assert_eq!(c, ProductId(502));
}

#[test]
#[serial]
fn test_clock_behind_existing_ids_is_bumped() {
  setup_tracing();
  // Seed ids are 1..=3; a clock reading of 2 must not reuse them.
  let mut catalog = CatalogStore::load(memory_storage(), &test_config()).with_clock(frozen_clock(2));
  let id = catalog.add(draft("Cap", 199, &[])).unwrap();
  assert_eq!(id, ProductId(4));
}

#[test]
#[serial]
fn test_update_replaces_in_place() {
  setup_tracing();
  let storage = memory_storage();
  let mut catalog = catalog_over(storage.clone());

  let previous = catalog
    .update(ProductId(2), draft("Denim Jacket v2", 1599, &["L"]))
    .unwrap()
    .expect("product 2 exists");

  assert_eq!(previous.name, "Denim Jacket");
  assert_eq!(names(&catalog), vec!["Classic Shirt", "Denim Jacket v2", "Kids T-Shirt"]);
  assert_eq!(catalog.get(ProductId(2)).unwrap().price, 1599);
  assert_eq!(persisted(&storage)[1].name, "Denim Jacket v2");
}

#[test]
#[serial]
fn test_update_and_remove_of_unknown_id_change_nothing() {
  setup_tracing();
  let storage = memory_storage();
  let mut catalog = catalog_over(storage.clone());

  assert_eq!(catalog.update(ProductId(99), draft("Ghost", 1, &[])).unwrap(), None);
  assert_eq!(catalog.remove(ProductId(99)).unwrap(), None);
  assert_eq!(catalog.list(), seed_catalog().as_slice());
  assert!(!storage.contains_key(PRODUCTS_STORAGE_KEY));
}

#[test]
#[serial]
fn test_remove_deletes_product_and_persists() {
  setup_tracing();
  let storage = memory_storage();
  let mut catalog = catalog_over(storage.clone());

  let removed = catalog.remove(ProductId(1)).unwrap().unwrap();
  assert_eq!(removed.name, "Classic Shirt");
  assert_eq!(names(&catalog), vec!["Denim Jacket", "Kids T-Shirt"]);

  let reloaded = catalog_over(storage);
  assert_eq!(names(&reloaded), vec!["Denim Jacket", "Kids T-Shirt"]);
}

#[test]
#[serial]
fn test_removing_every_product_persists_an_empty_catalog() {
  setup_tracing();
  let storage = memory_storage();
  let mut catalog = catalog_over(storage.clone());
  for id in [1, 2, 3] {
    catalog.remove(ProductId(id)).unwrap();
  }
  assert!(catalog.is_empty());

  // An empty list is a valid catalog, not missing data.
  let reloaded = catalog_over(storage);
  assert!(reloaded.is_empty());
}

#[test]
#[serial]
fn test_reset_restores_seeds_and_clears_storage() {
  setup_tracing();
  let storage = memory_storage();
  let mut catalog = catalog_over(storage.clone());
  catalog.add(draft("Temp", 10, &[])).unwrap();
  assert!(storage.contains_key(PRODUCTS_STORAGE_KEY));

  catalog.reset().unwrap();

  assert_eq!(catalog.list(), seed_catalog().as_slice());
  assert!(!storage.contains_key(PRODUCTS_STORAGE_KEY));
  assert_eq!(catalog_over(storage).list(), seed_catalog().as_slice());
}

#[test]
#[serial]
fn test_legacy_records_are_migrated_and_written_back() {
  setup_tracing();
  let legacy = r#"[
    {"title": "Old Tee", "price": "₹349"},
    {"id": 7, "name": "Hoodie", "price": 999.0, "image": "https://img.example/h.png", "sizeOptions": ["M"]}
  ]"#;
  let storage = storage_with(PRODUCTS_STORAGE_KEY, legacy);
  let catalog = catalog_over(storage.clone());

  assert_eq!(names(&catalog), vec!["Old Tee", "Hoodie"]);
  let old_tee = &catalog.list()[0];
  assert_eq!(old_tee.id, ProductId(8));
  assert_eq!(old_tee.price, 349);
  assert_eq!(old_tee.image, PLACEHOLDER_IMAGE_URL);
  assert!(old_tee.size_options.is_empty());
  assert_eq!(catalog.get(ProductId(7)).unwrap().price, 999);

  // The normalized form replaces the legacy payload.
  assert_eq!(persisted(&storage), catalog.list());
}

#[test]
#[serial]
fn test_duplicate_ids_are_reassigned_on_load() {
  setup_tracing();
  let raw = r#"[
    {"id": 5, "name": "A", "price": 1, "image": "i", "sizeOptions": []},
    {"id": 5, "name": "B", "price": 2, "image": "i", "sizeOptions": []}
  ]"#;
  let catalog = catalog_over(storage_with(PRODUCTS_STORAGE_KEY, raw));

  let ids: Vec<ProductId> = catalog.list().iter().map(|p| p.id).collect();
  assert_eq!(ids, vec![ProductId(5), ProductId(6)]);
}

#[test]
#[serial]
fn test_fractional_price_makes_payload_unrecoverable() {
  setup_tracing();
  let raw = r#"[{"id": 1, "name": "A", "price": "799.50"}]"#;
  let catalog = catalog_over(storage_with(PRODUCTS_STORAGE_KEY, raw));
  assert_eq!(catalog.list(), seed_catalog().as_slice());
}

#[test]
#[serial]
fn test_exhausted_id_space_on_load_falls_back_to_seeds() {
  setup_tracing();
  let raw = r#"[
    {"id": 9223372036854775807, "name": "a", "price": 1, "image": "i", "sizeOptions": []},
    {"name": "b", "price": 2}
  ]"#;
  let catalog = catalog_over(storage_with(PRODUCTS_STORAGE_KEY, raw));
  assert_eq!(catalog.list(), seed_catalog().as_slice());
}

#[test]
#[serial]
fn test_largest_id_alone_still_loads() {
  setup_tracing();
  let raw = r#"[{"id": 9223372036854775807, "name": "a", "price": 1, "image": "i", "sizeOptions": []}]"#;
  let catalog = catalog_over(storage_with(PRODUCTS_STORAGE_KEY, raw));
  assert_eq!(catalog.list()[0].id, ProductId(i64::MAX));
}

#[test]
#[serial]
fn test_add_without_free_id_is_rejected() {
  setup_tracing();
  let raw = r#"[{"id": 9223372036854775807, "name": "a", "price": 1, "image": "i", "sizeOptions": []}]"#;
  let storage = storage_with(PRODUCTS_STORAGE_KEY, raw);
  let mut catalog = catalog_over(storage.clone());

  let result = catalog.add(draft("Overflow", 1, &[]));

  assert!(matches!(result, Err(AppError::Validation(_))));
  assert_eq!(catalog.len(), 1);
  assert_eq!(persisted(&storage).len(), 1);
}

#[test]
#[serial]
fn test_negative_stored_prices_make_payload_unrecoverable() {
  setup_tracing();
  for raw in [
    r#"[{"title": "a", "price": "-₹500"}]"#,
    r#"[{"id": 1, "name": "a", "price": -5, "image": "i", "sizeOptions": []}]"#,
    r#"[{"id": 1, "name": "a", "price": -5.0}]"#,
  ] {
    let catalog = catalog_over(storage_with(PRODUCTS_STORAGE_KEY, raw));
    assert_eq!(catalog.list(), seed_catalog().as_slice(), "payload: {}", raw);
  }
}
