// trove_core/src/models/cart_item.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::product::Product;

/// A pending-purchase selection: a full product snapshot plus a quantity
/// counter. Entries are unique per product id; adding the same product again
/// increments the quantity. Quantity is always at least 1; removal deletes
/// the entry rather than zeroing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
  pub product: Product,
  pub quantity: u32,
  pub added_at: DateTime<Utc>,
}

impl CartItem {
  pub fn new(product: Product) -> Self {
    Self {
      product,
      quantity: 1,
      added_at: Utc::now(),
    }
  }

  pub fn line_total(&self) -> f64 {
    self.product.price * f64::from(self.quantity)
  }
}
