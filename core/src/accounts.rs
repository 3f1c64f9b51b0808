// trove_core/src/accounts.rs

//! The registered-account directory.
//!
//! Registration and credential checks live outside the session store: pages
//! consult the directory first and hand the resulting identity to
//! [`crate::SessionStore::login`]/[`crate::SessionStore::signup`]. Passwords
//! are hashed with Argon2 before they touch storage; the plaintext is
//! discarded.

use argon2::{
  password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
  Argon2,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{TroveError, TroveResult};
use crate::models::User;
use crate::storage::{keys, KvStore};

/// Creates a new account. Fails with [`TroveError::EmailTaken`] when an
/// account with the same email (case-insensitive) already exists. Returns
/// the stored `User`, hash set, ready to be handed to `signup`.
pub fn register(
  storage: &mut impl KvStore,
  username: &str,
  email: &str,
  password: &str,
  avatar_url: &str,
) -> TroveResult<User> {
  let mut accounts: Vec<User> = storage.get(keys::ACCOUNTS)?.unwrap_or_default();
  if accounts.iter().any(|a| a.email.eq_ignore_ascii_case(email)) {
    warn!(%email, "registration rejected: email already taken");
    return Err(TroveError::EmailTaken(email.to_string()));
  }

  let user = User {
    id: Uuid::new_v4(),
    username: username.to_string(),
    email: email.to_string(),
    password_hash: Some(hash_password(password)?),
    avatar_url: avatar_url.to_string(),
  };
  accounts.push(user.clone());
  storage.set(keys::ACCOUNTS, &accounts)?;

  info!(user_id = %user.id, %email, "account registered");
  Ok(user)
}

/// Looks up an account by email and verifies the password against the
/// stored hash. Returns `None` for an unknown email, a missing credential,
/// or a failed verification alike, so callers cannot distinguish which
/// (they all render as one "invalid email or password" message).
pub fn authenticate(storage: &impl KvStore, email: &str, password: &str) -> TroveResult<Option<User>> {
  let accounts: Vec<User> = storage.get(keys::ACCOUNTS)?.unwrap_or_default();
  let Some(account) = accounts.iter().find(|a| a.email.eq_ignore_ascii_case(email)) else {
    debug!(%email, "authentication failed: unknown email");
    return Ok(None);
  };
  let Some(hash) = &account.password_hash else {
    debug!(%email, "authentication failed: account has no credential");
    return Ok(None);
  };
  if verify_password(hash, password)? {
    Ok(Some(account.clone()))
  } else {
    debug!(%email, "authentication failed: password mismatch");
    Ok(None)
  }
}

pub fn find_by_email(storage: &impl KvStore, email: &str) -> TroveResult<Option<User>> {
  let accounts: Vec<User> = storage.get(keys::ACCOUNTS)?.unwrap_or_default();
  Ok(accounts.into_iter().find(|a| a.email.eq_ignore_ascii_case(email)))
}

/// Hashes a plaintext password with Argon2 and a fresh random salt.
pub fn hash_password(password: &str) -> TroveResult<String> {
  let salt = SaltString::generate(&mut OsRng);
  Argon2::default()
    .hash_password(password.as_bytes(), &salt)
    .map(|hash| hash.to_string())
    .map_err(|e| TroveError::CredentialHash(e.to_string()))
}

/// Verifies a plaintext password against a stored Argon2 hash string.
pub fn verify_password(hash: &str, password: &str) -> TroveResult<bool> {
  let parsed = PasswordHash::new(hash).map_err(|e| TroveError::CredentialHash(e.to_string()))?;
  Ok(Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok())
}
