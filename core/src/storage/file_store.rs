// trove_core/src/storage/file_store.rs

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::KvStore;
use crate::error::{TroveError, TroveResult};

/// File-backed storage: one UTF-8 JSON file per key under a root directory.
///
/// All key names used by the session store (fixed words, `prefix:<uuid>`)
/// are valid file names on the supported platforms, so keys map to file
/// names directly. Cloning a `FileStore` yields a second handle onto the
/// same directory.
#[derive(Debug, Clone)]
pub struct FileStore {
  root: PathBuf,
}

impl FileStore {
  /// Opens (and creates, if needed) the storage directory.
  pub fn open(root: impl Into<PathBuf>) -> TroveResult<Self> {
    let root = root.into();
    fs::create_dir_all(&root).map_err(|source| TroveError::StorageWrite {
      key: root.display().to_string(),
      source,
    })?;
    debug!(root = %root.display(), "file store opened");
    Ok(Self { root })
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  fn path_for(&self, key: &str) -> PathBuf {
    self.root.join(format!("{key}.json"))
  }
}

impl KvStore for FileStore {
  fn get_raw(&self, key: &str) -> TroveResult<Option<String>> {
    match fs::read_to_string(self.path_for(key)) {
      Ok(text) => Ok(Some(text)),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
      Err(source) => Err(TroveError::StorageRead {
        key: key.to_string(),
        source,
      }),
    }
  }

  fn set_raw(&mut self, key: &str, value: &str) -> TroveResult<()> {
    fs::write(self.path_for(key), value).map_err(|source| TroveError::StorageWrite {
      key: key.to_string(),
      source,
    })
  }

  fn remove(&mut self, key: &str) -> TroveResult<()> {
    match fs::remove_file(self.path_for(key)) {
      Ok(()) => Ok(()),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
      Err(source) => Err(TroveError::StorageWrite {
        key: key.to_string(),
        source,
      }),
    }
  }
}
