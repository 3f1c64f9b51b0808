// trove_core/src/storage/mod.rs

//! String-keyed, JSON-valued durable storage.
//!
//! The session store mirrors its state into a flat key-value namespace:
//! text keys, text values, synchronous reads and writes. Two backends are
//! provided: [`FileStore`] keeps one file per key under a root directory,
//! [`MemStore`] keeps everything in a map and is what tests use.
//!
//! Typed access goes through the provided [`KvStore::get`]/[`KvStore::set`]
//! methods, which run values through `serde_json` so that every persisted
//! collection round-trips losslessly.

pub mod keys;

mod file_store;
mod mem_store;

pub use file_store::FileStore;
pub use mem_store::MemStore;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{TroveError, TroveResult};

/// A synchronous key-value store with string keys and string values.
pub trait KvStore {
  /// Returns the raw text under `key`, or `None` if the key is absent.
  fn get_raw(&self, key: &str) -> TroveResult<Option<String>>;

  /// Durably writes `value` under `key`, replacing any previous value.
  /// The write completes before this returns.
  fn set_raw(&mut self, key: &str, value: &str) -> TroveResult<()>;

  /// Removes `key`. Removing an absent key is not an error.
  fn remove(&mut self, key: &str) -> TroveResult<()>;

  /// Reads and decodes the JSON value under `key`.
  fn get<T: DeserializeOwned>(&self, key: &str) -> TroveResult<Option<T>> {
    match self.get_raw(key)? {
      Some(text) => {
        let value = serde_json::from_str(&text).map_err(|source| TroveError::Codec {
          key: key.to_string(),
          source,
        })?;
        Ok(Some(value))
      }
      None => Ok(None),
    }
  }

  /// Encodes `value` as JSON and durably writes it under `key`.
  fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> TroveResult<()> {
    let text = serde_json::to_string(value).map_err(|source| TroveError::Codec {
      key: key.to_string(),
      source,
    })?;
    self.set_raw(key, &text)
  }
}
