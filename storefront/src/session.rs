// vitrine/src/session.rs

//! One storefront session: the catalog, the cart, and the rendering around them,
//! sharing a single storage backend and configuration.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::admin::{self, AdminOutcome, EditTarget, Prompter};
use crate::config::StorefrontConfig;
use crate::errors::{AppError, Result};
use crate::models::{CartLine, LineKey, Product, ProductId};
use crate::presentation::{CartView, CatalogView, Renderer};
use crate::storage::KeyValueStorage;
use crate::stores::{CartStore, CatalogStore, IdClock};

pub struct Storefront {
  config: Arc<StorefrontConfig>,
  catalog: CatalogStore,
  cart: CartStore,
  renderer: Renderer,
}

impl Storefront {
  /// Loads both stores from `storage`. Unreadable persisted data never fails the
  /// open; only a broken template set does.
  #[instrument(name = "Storefront::open", skip_all)]
  pub fn open(config: Arc<StorefrontConfig>, storage: Arc<dyn KeyValueStorage>) -> Result<Self> {
    let renderer = Renderer::new(&config)?;
    let catalog = CatalogStore::load(storage.clone(), &config);
    let cart = CartStore::load(storage, &config);
    info!(products = catalog.len(), cart_lines = cart.len(), "Storefront session opened.");
    Ok(Self {
      config,
      catalog,
      cart,
      renderer,
    })
  }

  /// Swaps the catalog's id source.
  pub fn with_clock(mut self, clock: IdClock) -> Self {
    self.catalog = self.catalog.with_clock(clock);
    self
  }

  pub fn config(&self) -> &StorefrontConfig {
    &self.config
  }

  pub fn catalog(&self) -> &CatalogStore {
    &self.catalog
  }

  pub fn cart(&self) -> &CartStore {
    &self.cart
  }

  pub fn add_to_cart(&mut self, id: ProductId, size: &str) -> Result<CartLine> {
    let product = find_product(&self.catalog, id)?;
    let line = self.cart.add_item(product, size)?;
    Ok(line.clone())
  }

  pub fn remove_from_cart(&mut self, key: &LineKey) -> Result<Option<CartLine>> {
    self.cart.remove_line(key)
  }

  pub fn clear_cart(&mut self) -> Result<()> {
    self.cart.clear()
  }

  pub fn product_link(&self, id: ProductId, size: &str) -> Result<String> {
    let product = find_product(&self.catalog, id)?;
    let size = product.validate_size(size)?;
    Ok(self.renderer.links().product_link(product, size))
  }

  /// `None` while the cart is empty.
  pub fn checkout_link(&self) -> Option<String> {
    self.renderer.links().checkout_link(self.cart.lines())
  }

  pub fn checkout_message(&self) -> String {
    self.renderer.links().checkout_message(self.cart.lines())
  }

  pub fn render_catalog(&self) -> Result<CatalogView> {
    self.renderer.catalog(self.catalog.list())
  }

  pub fn render_cart(&self) -> Result<CartView> {
    self.renderer.cart(self.cart.lines())
  }

  pub fn render_page(&self) -> Result<String> {
    let catalog = self.render_catalog()?;
    let cart = self.render_cart()?;
    self.renderer.page(&catalog, &cart)
  }

  pub fn admin_toggle(&mut self, prompter: &mut dyn Prompter) -> Result<AdminOutcome> {
    admin::run_admin_toggle(prompter, &mut self.catalog, &self.config)
  }

  pub fn edit_product(&mut self, prompter: &mut dyn Prompter, id: ProductId) -> Result<AdminOutcome> {
    admin::run_editor(prompter, &mut self.catalog, &self.config, EditTarget::Existing(id))
  }

  pub fn delete_product(&mut self, prompter: &mut dyn Prompter, id: ProductId) -> Result<AdminOutcome> {
    admin::delete_product(prompter, &mut self.catalog, id)
  }
}

fn find_product(catalog: &CatalogStore, id: ProductId) -> Result<&Product> {
  catalog
    .get(id)
    .ok_or_else(|| AppError::NotFound(format!("Product {} does not exist", id)))
}
