// trove_core/src/models/user.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The identity record for a registered account.
///
/// Exactly one user may be current in a session at a time; logging out clears
/// the current user without deleting the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
  pub id: Uuid,
  pub username: String,
  pub email: String,
  /// Argon2 hash of the account password, set by the account directory.
  /// Plaintext secrets are never stored.
  pub password_hash: Option<String>,
  /// Profile image reference.
  pub avatar_url: String,
}
