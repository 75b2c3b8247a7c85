// vitrine/src/lib.rs

//! vitrine: a small storefront widget.
//!
//! A product grid backed by a locally persisted catalog, a persisted cart,
//! pre-filled messaging links for ordering, and a prompt-driven admin flow
//! for curating the catalog.

pub mod admin;
pub mod config;
pub mod errors;
pub mod models;
pub mod presentation;
pub mod session;
pub mod storage;
pub mod stores;
pub mod telemetry;

pub use crate::admin::{AdminOutcome, CancelPoint, Prompter, ScriptedPrompter, TerminalPrompter};
pub use crate::config::StorefrontConfig;
pub use crate::errors::{AppError, Result};
pub use crate::models::{CartLine, LineKey, Product, ProductDraft, ProductId};
pub use crate::session::Storefront;
pub use crate::storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use crate::stores::{CartStore, CatalogStore};
