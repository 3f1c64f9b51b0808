// trove_core/src/models/purchase.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cart_item::CartItem;
use super::product::Product;

/// A finalized transaction: the purchased product snapshot, the quantity it
/// was bought at, and the moment the checkout ran. Never mutated or deleted
/// after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
  pub product: Product,
  pub quantity: u32,
  pub purchased_at: DateTime<Utc>,
}

impl Purchase {
  /// Snapshot a cart entry at checkout time. All entries of one checkout
  /// share the same timestamp.
  pub fn from_cart_item(item: &CartItem, purchased_at: DateTime<Utc>) -> Self {
    Self {
      product: item.product.clone(),
      quantity: item.quantity,
      purchased_at,
    }
  }

  pub fn line_total(&self) -> f64 {
    self.product.price * f64::from(self.quantity)
  }
}
