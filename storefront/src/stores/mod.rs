// vitrine/src/stores/mod.rs

//! The two session-wide stores. Each owns its list, persists every mutation
//! under its own storage key and degrades to a default on unreadable data.

pub mod cart;
pub mod catalog;
pub mod migration;

pub use cart::CartStore;
pub use catalog::{CatalogStore, IdClock};
