// trove_core/src/catalog.rs

//! Pure query helpers over the product catalog.

use crate::models::{Category, Product};

/// A page-level browse filter: case-insensitive title search combined with
/// an optional category restriction. `None` in either field means
/// "match everything" (the "All" option of a category picker).
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
  pub query: Option<String>,
  pub category: Option<Category>,
}

impl CatalogFilter {
  pub fn by_query(query: impl Into<String>) -> Self {
    Self {
      query: Some(query.into()),
      category: None,
    }
  }

  pub fn by_category(category: Category) -> Self {
    Self {
      query: None,
      category: Some(category),
    }
  }

  pub fn matches(&self, product: &Product) -> bool {
    let category_ok = self.category.map_or(true, |c| product.category == c);
    let query_ok = match &self.query {
      Some(q) if !q.trim().is_empty() => product
        .title
        .to_lowercase()
        .contains(&q.trim().to_lowercase()),
      _ => true,
    };
    category_ok && query_ok
  }
}

pub fn filter_products<'a>(products: &'a [Product], filter: &CatalogFilter) -> Vec<&'a Product> {
  products.iter().filter(|p| filter.matches(p)).collect()
}
