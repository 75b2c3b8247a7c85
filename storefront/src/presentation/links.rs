// vitrine/src/presentation/links.rs

//! Pre-filled messaging deep links for ordering a single product or checking out the cart.

use crate::config::StorefrontConfig;
use crate::models::{lines_total, CartLine, Product};

#[derive(Debug, Clone)]
pub struct MessageLinks {
  base_url: String,
  contact_id: String,
  currency: String,
}

impl MessageLinks {
  pub fn new(config: &StorefrontConfig) -> Self {
    Self {
      base_url: config.messaging_base_url.trim_end_matches('/').to_string(),
      contact_id: config.contact_id.clone(),
      currency: config.currency_symbol.clone(),
    }
  }

  /// `"<currency><amount>"`, e.g. `₹799`.
  pub fn money(&self, amount: i64) -> String {
    format!("{}{}", self.currency, amount)
  }

  pub fn product_message(&self, product: &Product, size: &str) -> String {
    format!(
      "Hi, I want to order *{}* size {} at {}.",
      product.name,
      size,
      self.money(product.price)
    )
  }

  /// One line per cart line followed by the total; every line ends with a line break.
  pub fn checkout_message(&self, lines: &[CartLine]) -> String {
    let mut msg = String::from("Hi, I want to order:\n");
    for line in lines {
      msg.push_str(&format!(
        "- {} size {} x{} = {}\n",
        line.product.name,
        line.size,
        line.qty,
        self.money(line.line_total())
      ));
    }
    msg.push_str(&format!("Total: {}\n", self.money(lines_total(lines))));
    msg
  }

  pub fn product_link(&self, product: &Product, size: &str) -> String {
    self.link_for(&self.product_message(product, size))
  }

  /// `None` for an empty cart: there is nothing to order.
  pub fn checkout_link(&self, lines: &[CartLine]) -> Option<String> {
    if lines.is_empty() {
      return None;
    }
    Some(self.link_for(&self.checkout_message(lines)))
  }

  fn link_for(&self, message: &str) -> String {
    format!(
      "{}/{}?text={}",
      self.base_url,
      self.contact_id,
      urlencoding::encode(message)
    )
  }
}
