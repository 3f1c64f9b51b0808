// demos/storefront/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
  /// Directory holding the key-value files of the session state.
  pub data_dir: PathBuf,
  /// Whether to install the starter catalog on a first launch.
  pub seed_catalog: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let data_dir: PathBuf = env::var("TROVE_DATA_DIR")
      .unwrap_or_else(|_| "./trove-data".to_string())
      .into();
    let seed_catalog = env::var("TROVE_SEED_CATALOG")
      .unwrap_or_else(|_| "true".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid TROVE_SEED_CATALOG value: {e}")))?;

    tracing::info!(data_dir = %data_dir.display(), seed_catalog, "configuration loaded");
    Ok(Self { data_dir, seed_catalog })
  }
}
