// demos/storefront/src/main.rs

// Declare modules for the application
mod config;
mod errors;
mod forms;
mod pages;
mod router;
mod state;

use crate::config::AppConfig;
use crate::router::Route;
use crate::state::App;

use tracing::{info, Level};
use trove::{seed, FileStore, SessionStore};

fn main() -> anyhow::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .init();

  info!("Starting Trove storefront...");

  let app_config = AppConfig::from_env()?;
  let directory = FileStore::open(&app_config.data_dir)?;
  info!(data_dir = %directory.root().display(), "storage ready");

  let seed_catalog = if app_config.seed_catalog {
    seed::starter_catalog()
  } else {
    Vec::new()
  };
  let session = SessionStore::open(directory.clone(), seed_catalog)?;
  let mut app = App { session, directory };

  println!("Trove: give your items a second life.");
  match app.session.current_user() {
    Some(user) => println!("Signed in as {}.", user.username),
    None => println!("Browsing as a guest. 'signup' to join in."),
  }
  pages::help();

  while let Some(line) = pages::read_command()? {
    if line.is_empty() {
      continue;
    }
    let route = match router::parse(&line) {
      Ok(route) => route,
      Err(e) => {
        println!("{e}");
        continue;
      }
    };
    if matches!(route, Route::Quit) {
      break;
    }
    // Page errors render inline and never end the session.
    if let Err(e) = router::dispatch(&mut app, route) {
      println!("{e}");
    }
  }

  info!("Storefront session closed.");
  Ok(())
}
