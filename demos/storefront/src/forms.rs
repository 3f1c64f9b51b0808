// demos/storefront/src/forms.rs

//! Form validation for every page that accepts input.
//!
//! All checks run here, before any store operation is invoked; the session
//! store itself validates nothing. Error messages are the exact strings the
//! pages render inline.

use trove::models::{Category, ProductDraft};

use crate::errors::{AppError, Result};

#[derive(Debug, Clone)]
pub struct SignUpForm {
  pub username: String,
  pub email: String,
  pub password: String,
  pub confirm_password: String,
}

impl SignUpForm {
  pub fn validate(&self) -> Result<()> {
    if self.username.trim().is_empty()
      || self.email.trim().is_empty()
      || self.password.is_empty()
      || self.confirm_password.is_empty()
    {
      return Err(AppError::Validation("Please fill in all fields.".to_string()));
    }
    if !self.email.contains('@') {
      return Err(AppError::Validation("Valid email is required.".to_string()));
    }
    if self.password != self.confirm_password {
      return Err(AppError::Validation("Passwords do not match.".to_string()));
    }
    Ok(())
  }
}

#[derive(Debug, Clone)]
pub struct LoginForm {
  pub email: String,
  pub password: String,
}

impl LoginForm {
  pub fn validate(&self) -> Result<()> {
    if self.email.trim().is_empty() || self.password.is_empty() {
      return Err(AppError::Validation("Please fill in all fields.".to_string()));
    }
    Ok(())
  }
}

/// Raw field values of the listing form. `validate` turns them into a
/// well-typed draft or reports the first problem.
#[derive(Debug, Clone)]
pub struct ProductForm {
  pub title: String,
  pub description: String,
  pub category: String,
  pub price: String,
  /// Comma-separated image URLs.
  pub image_urls: String,
}

impl ProductForm {
  pub fn validate(&self) -> Result<ProductDraft> {
    if self.title.trim().is_empty()
      || self.description.trim().is_empty()
      || self.category.trim().is_empty()
      || self.price.trim().is_empty()
      || self.image_urls.trim().is_empty()
    {
      return Err(AppError::Validation("Please fill in all fields.".to_string()));
    }

    let category: Category = self
      .category
      .trim()
      .parse()
      .map_err(|e: trove::models::UnknownCategory| AppError::Validation(e.to_string()))?;

    let price: f64 = match self.price.trim().parse() {
      Ok(value) if value > 0.0 && f64::is_finite(value) => value,
      _ => return Err(AppError::Validation("Please enter a valid price.".to_string())),
    };

    let image_urls: Vec<String> = self
      .image_urls
      .split(',')
      .map(str::trim)
      .filter(|url| !url.is_empty())
      .map(str::to_string)
      .collect();
    if image_urls.is_empty() {
      return Err(AppError::Validation(
        "Please provide at least one valid image URL.".to_string(),
      ));
    }

    Ok(ProductDraft {
      title: self.title.trim().to_string(),
      description: self.description.trim().to_string(),
      category,
      price,
      image_urls,
    })
  }
}
