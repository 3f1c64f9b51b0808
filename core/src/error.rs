// trove_core/src/error.rs
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TroveError {
  #[error("Storage read failed for key '{key}'. Source: {source}")]
  StorageRead {
    key: String,
    #[source]
    source: io::Error,
  },

  #[error("Storage write failed for key '{key}'. Source: {source}")]
  StorageWrite {
    key: String,
    #[source]
    source: io::Error,
  },

  #[error("Value under key '{key}' could not be encoded or decoded. Source: {source}")]
  Codec {
    key: String,
    #[source]
    source: serde_json::Error,
  },

  #[error("An account with email '{0}' already exists")]
  EmailTaken(String),

  #[error("Credential hashing failed: {0}")]
  CredentialHash(String),
}

pub type TroveResult<T, E = TroveError> = std::result::Result<T, E>;
