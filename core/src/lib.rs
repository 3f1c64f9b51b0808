// trove_core/src/lib.rs

//! Trove: a local-first marketplace engine.
//!
//! Everything a small buy-and-sell marketplace needs to keep its state, with
//! no server behind it:
//!  - A [`SessionStore`] owning the current user, the shared product
//!    catalog, the user's cart, and their purchase history.
//!  - Write-through persistence: every mutation is durably saved, under a
//!    flat key-value layout, before the operation returns.
//!  - Per-user scoping of cart and purchase keys, re-read on every identity
//!    change so no state leaks between users.
//!  - A registered-account directory with Argon2 credential hashing.
//!  - Pure catalog query helpers for page-level search and filtering.
//!
//! The store performs no input validation and no authentication; the
//! consuming application validates forms and checks credentials (via
//! [`accounts`]) before invoking store operations. Preconditions that do not
//! hold are documented idempotent no-ops.

pub mod accounts;
pub mod catalog;
pub mod error;
pub mod models;
pub mod seed;
pub mod session;
pub mod storage;

// --- Re-exports for the public API ---

pub use crate::catalog::{filter_products, CatalogFilter};
pub use crate::error::{TroveError, TroveResult};
pub use crate::models::{CartItem, Category, Product, ProductDraft, Purchase, User};
pub use crate::session::SessionStore;
pub use crate::storage::{FileStore, KvStore, MemStore};
