// vitrine/src/presentation/dom.rs

//! Element ids the host page must expose.

pub const PRODUCT_GRID_ID: &str = "product-grid";
pub const CART_PANEL_ID: &str = "cart-panel";
pub const CART_ITEMS_ID: &str = "cart-items";
pub const CART_TOTAL_ID: &str = "cart-total";
pub const CHECKOUT_LINK_ID: &str = "whatsapp-checkout";
pub const CLEAR_CART_ID: &str = "clear-cart";
pub const ADMIN_TOGGLE_ID: &str = "admin-toggle";

pub const ALL_IDS: [&str; 7] = [
  PRODUCT_GRID_ID,
  CART_PANEL_ID,
  CART_ITEMS_ID,
  CART_TOTAL_ID,
  CHECKOUT_LINK_ID,
  CLEAR_CART_ID,
  ADMIN_TOGGLE_ID,
];
