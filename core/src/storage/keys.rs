// trove_core/src/storage/keys.rs

//! The logical key layout of the persisted state.
//!
//! Two global keys (the signed-in identity and the shared product catalog),
//! two per-user key families (cart and purchase history, scoped by user id),
//! and the account directory.

use uuid::Uuid;

/// Serialized `User` of the currently signed-in session, or absent.
pub const CURRENT_USER: &str = "current-user";

/// Serialized ordered sequence of `Product`, shared across all users.
pub const CATALOG: &str = "product-catalog";

/// Serialized ordered sequence of registered `User` accounts.
pub const ACCOUNTS: &str = "accounts";

/// Cart key for one user. Present only once that user has had cart activity.
pub fn cart(user_id: Uuid) -> String {
  format!("cart:{user_id}")
}

/// Purchase-history key for one user.
pub fn purchases(user_id: Uuid) -> String {
  format!("purchases:{user_id}")
}
