// trove_core/src/models/product.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// The fixed set of listing categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
  Electronics,
  Clothing,
  HomeGoods,
  Books,
  Sports,
  Toys,
}

impl Category {
  pub const ALL: [Category; 6] = [
    Category::Electronics,
    Category::Clothing,
    Category::HomeGoods,
    Category::Books,
    Category::Sports,
    Category::Toys,
  ];

  /// Human-readable label, as shown in category pickers.
  pub fn label(self) -> &'static str {
    match self {
      Category::Electronics => "Electronics",
      Category::Clothing => "Clothing",
      Category::HomeGoods => "Home Goods",
      Category::Books => "Books",
      Category::Sports => "Sports",
      Category::Toys => "Toys",
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
  type Err = UnknownCategory;

  /// Accepts the display label, case-insensitively, with or without spaces
  /// ("home goods", "HomeGoods" and "Home Goods" all parse).
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    Category::ALL
      .into_iter()
      .find(|c| {
        let label: String = c.label().chars().filter(|ch| !ch.is_whitespace()).collect();
        label.eq_ignore_ascii_case(&normalized)
      })
      .ok_or_else(|| UnknownCategory(s.to_string()))
  }
}

/// A marketplace listing.
///
/// `seller_id` and `seller_name` are stamped once at creation and are never
/// altered by edit operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  pub id: Uuid,
  pub title: String,
  pub description: String,
  pub category: Category,
  /// Positive decimal price. Positivity is enforced by the input layer
  /// before a draft ever reaches the store.
  pub price: f64,
  /// Ordered image references; the input layer guarantees at least one.
  pub image_urls: Vec<String>,
  pub seller_id: Uuid,
  pub seller_name: String,
}

/// The caller-supplied fields of a new listing: everything except the id and
/// the seller attribution, which the session store synthesizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
  pub title: String,
  pub description: String,
  pub category: Category,
  pub price: f64,
  pub image_urls: Vec<String>,
}

impl ProductDraft {
  pub fn into_product(self, id: Uuid, seller_id: Uuid, seller_name: String) -> Product {
    Product {
      id,
      title: self.title,
      description: self.description,
      category: self.category,
      price: self.price,
      image_urls: self.image_urls,
      seller_id,
      seller_name,
    }
  }
}
