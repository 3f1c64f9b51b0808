// tests/common/mod.rs
#![allow(dead_code)] // Allow unused helpers in this common test module

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use trove::models::{Category, Product, ProductDraft, User};
use trove::storage::MemStore;
use trove::SessionStore;
use uuid::Uuid;

// --- Helper for tracing setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(tracing::Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Fixture builders ---

pub fn user(name: &str) -> User {
  User {
    id: Uuid::new_v4(),
    username: name.to_string(),
    email: format!("{name}@example.com"),
    password_hash: None,
    avatar_url: format!("https://i.pravatar.cc/150?u={name}"),
  }
}

pub fn draft(title: &str, price: f64, category: Category) -> ProductDraft {
  ProductDraft {
    title: title.to_string(),
    description: format!("{title} in good condition"),
    category,
    price,
    image_urls: vec![format!("https://img.example.com/{}.jpg", title.to_lowercase().replace(' ', "-"))],
  }
}

pub fn listing(title: &str, price: f64, category: Category, seller: &User) -> Product {
  draft(title, price, category).into_product(Uuid::new_v4(), seller.id, seller.username.clone())
}

/// A fresh in-memory session with an empty catalog.
pub fn empty_session() -> SessionStore<MemStore> {
  SessionStore::open(MemStore::new(), Vec::new()).expect("open in-memory session")
}

// --- Scratch directory for file-store tests ---

pub struct TempDir(PathBuf);

impl TempDir {
  pub fn new(tag: &str) -> Self {
    Self(std::env::temp_dir().join(format!("trove-{tag}-{}", Uuid::new_v4())))
  }

  pub fn path(&self) -> &Path {
    &self.0
  }
}

impl Drop for TempDir {
  fn drop(&mut self) {
    let _ = std::fs::remove_dir_all(&self.0);
  }
}
