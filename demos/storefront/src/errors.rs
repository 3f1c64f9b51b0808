// demos/storefront/src/errors.rs

use thiserror::Error;
use trove::TroveError;

/// Page-level error surface. Everything here renders as an inline message in
/// the terminal; nothing is thrown across component boundaries.
#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Authentication Failed: {0}")]
  Auth(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Storage Error: {0}")]
  Store(#[from] TroveError),

  #[error("Input Error: {0}")]
  Input(#[from] std::io::Error),
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
