// demos/storefront/src/router.rs

//! Maps command input to pages.
//!
//! A fixed set of routes requires a signed-in user; dispatch checks the gate
//! once, before any page runs, and points the visitor at the login page
//! instead of executing the protected view.

use trove::models::Category;
use trove::CatalogFilter;

use crate::errors::{AppError, Result};
use crate::pages;
use crate::state::App;

#[derive(Debug, Clone)]
pub enum Route {
  Home(CatalogFilter),
  ProductDetail(usize),
  AddToCart(usize),
  SignUp,
  Login,
  Logout,
  Cart,
  RemoveFromCart(usize),
  Checkout,
  Profile,
  MyListings,
  EditListing(usize),
  DeleteListing(usize),
  MyPurchases,
  Sell,
  Help,
  Quit,
}

impl Route {
  /// Views reachable only with a signed-in user. Browsing, listing details
  /// and the auth pages are public.
  pub fn requires_user(&self) -> bool {
    matches!(
      self,
      Route::Cart
        | Route::RemoveFromCart(_)
        | Route::Checkout
        | Route::Profile
        | Route::MyListings
        | Route::EditListing(_)
        | Route::DeleteListing(_)
        | Route::MyPurchases
        | Route::Sell
    )
  }
}

fn index_arg(arg: Option<&str>, what: &str) -> Result<usize> {
  let raw = arg.ok_or_else(|| AppError::Validation(format!("Give the number of the {what}.")))?;
  let n: usize = raw
    .parse()
    .map_err(|_| AppError::Validation(format!("'{raw}' is not a number.")))?;
  n.checked_sub(1)
    .ok_or_else(|| AppError::Validation("Numbering starts at 1.".to_string()))
}

pub fn parse(line: &str) -> Result<Route> {
  let mut words = line.split_whitespace();
  let command = words.next().unwrap_or("");
  let rest: Vec<&str> = words.collect();
  let arg = rest.first().copied();

  let route = match command {
    "home" | "browse" => Route::Home(CatalogFilter::default()),
    "search" => {
      if rest.is_empty() {
        return Err(AppError::Validation("Search for what?".to_string()));
      }
      Route::Home(CatalogFilter::by_query(rest.join(" ")))
    }
    "category" => {
      let raw = rest.join(" ");
      if raw.is_empty() {
        return Err(AppError::Validation(
          "Give a category, or 'home' for everything.".to_string(),
        ));
      }
      let category: Category = raw
        .parse()
        .map_err(|e: trove::models::UnknownCategory| AppError::Validation(e.to_string()))?;
      Route::Home(CatalogFilter::by_category(category))
    }
    "view" => Route::ProductDetail(index_arg(arg, "listing")?),
    "add" => Route::AddToCart(index_arg(arg, "listing")?),
    "signup" => Route::SignUp,
    "login" => Route::Login,
    "logout" => Route::Logout,
    "cart" => Route::Cart,
    "remove" => Route::RemoveFromCart(index_arg(arg, "cart entry")?),
    "checkout" => Route::Checkout,
    "profile" => Route::Profile,
    "listings" => Route::MyListings,
    "edit" => Route::EditListing(index_arg(arg, "listing")?),
    "delete" => Route::DeleteListing(index_arg(arg, "listing")?),
    "purchases" => Route::MyPurchases,
    "sell" => Route::Sell,
    "help" => Route::Help,
    "quit" | "exit" => Route::Quit,
    other => {
      return Err(AppError::NotFound(format!(
        "Unknown command '{other}'. Type 'help' for the page list."
      )))
    }
  };
  Ok(route)
}

pub fn dispatch(app: &mut App, route: Route) -> Result<()> {
  if route.requires_user() && app.session.current_user().is_none() {
    // Redirect to the login view instead of running the protected page.
    println!("You need to be signed in for that ('signup' creates an account).");
    return pages::login(app);
  }

  match route {
    Route::Home(filter) => pages::home(app, &filter),
    Route::ProductDetail(i) => pages::product_detail(app, i),
    Route::AddToCart(i) => pages::add_to_cart(app, i),
    Route::SignUp => pages::signup(app),
    Route::Login => pages::login(app),
    Route::Logout => pages::logout(app),
    Route::Cart => pages::cart(app),
    Route::RemoveFromCart(i) => pages::remove_from_cart(app, i),
    Route::Checkout => pages::checkout(app),
    Route::Profile => pages::profile(app),
    Route::MyListings => pages::my_listings(app),
    Route::EditListing(i) => pages::edit_listing(app, i),
    Route::DeleteListing(i) => pages::delete_listing(app, i),
    Route::MyPurchases => pages::my_purchases(app),
    Route::Sell => pages::sell(app),
    Route::Help => {
      pages::help();
      Ok(())
    }
    Route::Quit => Ok(()), // handled by the caller before dispatch
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn protected_routes_require_a_user() {
    for line in ["cart", "checkout", "profile", "listings", "purchases", "sell", "remove 1", "edit 1", "delete 1"] {
      assert!(parse(line).unwrap().requires_user(), "'{line}' must be protected");
    }
    for line in ["home", "search bike", "view 1", "add 1", "login", "signup", "help"] {
      assert!(!parse(line).unwrap().requires_user(), "'{line}' must be public");
    }
  }

  #[test]
  fn indexes_are_one_based() {
    assert!(matches!(parse("view 1").unwrap(), Route::ProductDetail(0)));
    assert!(matches!(parse("view 0"), Err(AppError::Validation(_))));
    assert!(matches!(parse("view x"), Err(AppError::Validation(_))));
    assert!(matches!(parse("view"), Err(AppError::Validation(_))));
  }

  #[test]
  fn unknown_commands_are_not_found() {
    assert!(matches!(parse("teleport"), Err(AppError::NotFound(_))));
  }

  #[test]
  fn category_names_parse_into_filters() {
    let route = parse("category home goods").unwrap();
    match route {
      Route::Home(filter) => assert_eq!(filter.category, Some(Category::HomeGoods)),
      other => panic!("expected Home route, got {other:?}"),
    }
    assert!(matches!(parse("category gadgets"), Err(AppError::Validation(_))));
  }
}
