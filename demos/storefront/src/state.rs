// demos/storefront/src/state.rs

use trove::{FileStore, SessionStore};

/// Shared application state handed to every page.
pub struct App {
  pub session: SessionStore<FileStore>,
  /// Second handle onto the same storage directory, used by the account
  /// directory for registration and credential checks.
  pub directory: FileStore,
}
