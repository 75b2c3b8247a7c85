// vitrine/src/presentation/mod.rs

//! Turns store state into markup and outbound links.

pub mod dom;
pub mod links;
pub mod render;

pub use links::MessageLinks;
pub use render::{CardView, CartLineView, CartView, CatalogView, Renderer};
