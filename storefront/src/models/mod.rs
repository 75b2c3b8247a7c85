// vitrine/src/models/mod.rs

//! Data structures for the catalog and the cart, in their persisted shape.

pub mod cart_line;
pub mod product;

pub use cart_line::{lines_item_count, lines_total, CartLine, LineKey};
pub use product::{seed_catalog, Product, ProductDraft, ProductId};
