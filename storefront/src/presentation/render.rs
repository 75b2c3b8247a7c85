// vitrine/src/presentation/render.rs

//! Markup for the product grid, the cart panel and the host page.
//!
//! Templates are `.html`, so minijinja escapes every interpolated value;
//! product names and image URLs typed into the admin prompts cannot inject markup.

use minijinja::{context, Environment};
use serde::Serialize;
use tracing::{debug, instrument};

use super::dom;
use super::links::MessageLinks;
use crate::config::StorefrontConfig;
use crate::errors::Result;
use crate::models::{lines_item_count, lines_total, CartLine, Product, ProductId};

const CATALOG_TEMPLATE: &str = "catalog.html";
const CART_ITEMS_TEMPLATE: &str = "cart_items.html";
const PAGE_TEMPLATE: &str = "page.html";

const PAGE_TITLE: &str = "Storefront";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
  pub id: ProductId,
  pub name: String,
  pub price_display: String,
  pub image: String,
  pub sizes: Vec<String>,
  pub selected_size: String,
  /// Order link for `selected_size`; the host refreshes it through
  /// `Storefront::product_link` when the selection changes.
  pub order_href: String,
  /// Staggered fade-in delay. Cosmetic only.
  pub reveal_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogView {
  pub cards: Vec<CardView>,
  pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineView {
  pub key: String,
  pub label: String,
  pub amount_display: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
  /// The panel is hidden while the cart is empty.
  pub visible: bool,
  pub lines: Vec<CartLineView>,
  pub item_count: u32,
  pub total_display: String,
  pub checkout_href: Option<String>,
  pub html: String,
}

#[derive(Serialize)]
struct DomIds {
  product_grid: &'static str,
  cart_panel: &'static str,
  cart_items: &'static str,
  cart_total: &'static str,
  checkout_link: &'static str,
  clear_cart: &'static str,
  admin_toggle: &'static str,
}

const DOM_IDS: DomIds = DomIds {
  product_grid: dom::PRODUCT_GRID_ID,
  cart_panel: dom::CART_PANEL_ID,
  cart_items: dom::CART_ITEMS_ID,
  cart_total: dom::CART_TOTAL_ID,
  checkout_link: dom::CHECKOUT_LINK_ID,
  clear_cart: dom::CLEAR_CART_ID,
  admin_toggle: dom::ADMIN_TOGGLE_ID,
};

pub struct Renderer {
  env: Environment<'static>,
  links: MessageLinks,
  placeholder_image: String,
  default_size: String,
  reveal_stagger_ms: u64,
}

impl Renderer {
  pub fn new(config: &StorefrontConfig) -> Result<Self> {
    let mut env = Environment::new();
    env.add_template(CATALOG_TEMPLATE, include_str!("../../templates/catalog.html"))?;
    env.add_template(CART_ITEMS_TEMPLATE, include_str!("../../templates/cart_items.html"))?;
    env.add_template(PAGE_TEMPLATE, include_str!("../../templates/page.html"))?;

    Ok(Self {
      env,
      links: MessageLinks::new(config),
      placeholder_image: config.placeholder_image.clone(),
      default_size: config.default_size.clone(),
      reveal_stagger_ms: config.reveal_stagger_ms,
    })
  }

  pub fn links(&self) -> &MessageLinks {
    &self.links
  }

  pub fn card(&self, index: usize, product: &Product) -> CardView {
    let sizes = product.effective_sizes(&self.default_size);
    // effective_sizes never returns an empty list
    let selected_size = sizes.first().cloned().unwrap_or_else(|| self.default_size.clone());
    let image = if product.image.trim().is_empty() {
      self.placeholder_image.clone()
    } else {
      product.image.clone()
    };

    CardView {
      id: product.id,
      name: product.name.clone(),
      price_display: self.links.money(product.price),
      image,
      order_href: self.links.product_link(product, &selected_size),
      selected_size,
      sizes,
      reveal_delay_ms: self.reveal_stagger_ms.saturating_mul(index as u64),
    }
  }

  #[instrument(name = "Renderer::catalog", skip_all, fields(products = products.len()))]
  pub fn catalog(&self, products: &[Product]) -> Result<CatalogView> {
    let cards: Vec<CardView> = products
      .iter()
      .enumerate()
      .map(|(index, product)| self.card(index, product))
      .collect();
    let html = self
      .env
      .get_template(CATALOG_TEMPLATE)?
      .render(context! { cards => &cards })?;
    debug!(bytes = html.len(), "Catalog rendered.");
    Ok(CatalogView { cards, html })
  }

  #[instrument(name = "Renderer::cart", skip_all, fields(lines = lines.len()))]
  pub fn cart(&self, lines: &[CartLine]) -> Result<CartView> {
    let line_views: Vec<CartLineView> = lines
      .iter()
      .map(|line| CartLineView {
        key: line.key.to_string(),
        label: format!("{} ({}) x{}", line.product.name, line.size, line.qty),
        amount_display: self.links.money(line.line_total()),
      })
      .collect();

    let html = self
      .env
      .get_template(CART_ITEMS_TEMPLATE)?
      .render(context! { lines => &line_views })?;

    Ok(CartView {
      visible: !lines.is_empty(),
      lines: line_views,
      item_count: lines_item_count(lines),
      total_display: self.links.money(lines_total(lines)),
      checkout_href: self.links.checkout_link(lines),
      html,
    })
  }

  /// Full host page with every element id the widget expects.
  pub fn page(&self, catalog: &CatalogView, cart: &CartView) -> Result<String> {
    let html = self.env.get_template(PAGE_TEMPLATE)?.render(context! {
      title => PAGE_TITLE,
      ids => &DOM_IDS,
      catalog_html => &catalog.html,
      cart => cart,
    })?;
    Ok(html)
  }
}
