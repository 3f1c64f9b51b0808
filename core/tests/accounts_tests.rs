// tests/accounts_tests.rs
mod common;

use common::*;
use trove::storage::{keys, KvStore, MemStore};
use trove::{accounts, TroveError, User};

#[test]
fn register_then_authenticate() {
  setup_tracing();
  let mut store = MemStore::new();
  let ana = accounts::register(&mut store, "ana", "ana@example.com", "hunter2-but-longer", "https://i.pravatar.cc/150?u=ana").unwrap();

  let found = accounts::authenticate(&store, "ana@example.com", "hunter2-but-longer").unwrap();
  assert_eq!(found.map(|u| u.id), Some(ana.id));

  // Email lookup is case-insensitive.
  let found = accounts::authenticate(&store, "ANA@example.com", "hunter2-but-longer").unwrap();
  assert!(found.is_some());
}

#[test]
fn wrong_password_and_unknown_email_both_come_back_empty() {
  setup_tracing();
  let mut store = MemStore::new();
  accounts::register(&mut store, "ana", "ana@example.com", "correct-password", "").unwrap();

  assert!(accounts::authenticate(&store, "ana@example.com", "wrong-password").unwrap().is_none());
  assert!(accounts::authenticate(&store, "nobody@example.com", "correct-password").unwrap().is_none());
}

#[test]
fn duplicate_email_is_rejected() {
  setup_tracing();
  let mut store = MemStore::new();
  accounts::register(&mut store, "ana", "ana@example.com", "password-one", "").unwrap();

  let err = accounts::register(&mut store, "other", "Ana@Example.com", "password-two", "").unwrap_err();
  assert!(matches!(err, TroveError::EmailTaken(_)));

  let stored: Vec<User> = store.get(keys::ACCOUNTS).unwrap().unwrap();
  assert_eq!(stored.len(), 1);
}

#[test]
fn passwords_are_stored_as_argon2_hashes() {
  setup_tracing();
  let mut store = MemStore::new();
  let ana = accounts::register(&mut store, "ana", "ana@example.com", "plaintext-secret", "").unwrap();

  let hash = ana.password_hash.expect("hash must be set");
  assert!(hash.starts_with("$argon2"));
  assert!(!hash.contains("plaintext-secret"));
  assert!(accounts::verify_password(&hash, "plaintext-secret").unwrap());
  assert!(!accounts::verify_password(&hash, "other").unwrap());
}

#[test]
fn find_by_email_does_not_need_a_credential() {
  setup_tracing();
  let mut store = MemStore::new();
  accounts::register(&mut store, "ana", "ana@example.com", "some-password", "").unwrap();

  let found = accounts::find_by_email(&store, "ana@example.com").unwrap();
  assert_eq!(found.map(|u| u.username), Some("ana".to_string()));
  assert!(accounts::find_by_email(&store, "missing@example.com").unwrap().is_none());
}
