// demos/storefront/src/pages.rs

//! The page layer: terminal stand-ins for the storefront views.
//!
//! Pages validate their input, consult the account directory where needed,
//! and only then call into the session store. The signed-in gate for
//! protected pages lives in the router, before dispatch ever reaches here.

use std::io::{self, Write};

use tracing::info;
use trove::models::Product;
use trove::{accounts, CatalogFilter, TroveError};

use crate::errors::{AppError, Result};
use crate::forms::{LoginForm, ProductForm, SignUpForm};
use crate::state::App;

/// Reads the next top-level command. `None` means end of input.
pub fn read_command() -> Result<Option<String>> {
  print!("trove> ");
  io::stdout().flush()?;
  let mut line = String::new();
  if io::stdin().read_line(&mut line)? == 0 {
    return Ok(None);
  }
  Ok(Some(line.trim().to_string()))
}

/// Reads one line of form input after printing a label.
fn prompt(label: &str) -> Result<String> {
  print!("{label}: ");
  io::stdout().flush()?;
  let mut line = String::new();
  io::stdin().read_line(&mut line)?;
  Ok(line.trim().to_string())
}

fn listing_line(position: usize, product: &Product) -> String {
  format!(
    "{:>3}. {} [{}] ${:.2} (seller: {})",
    position + 1,
    product.title,
    product.category,
    product.price,
    product.seller_name
  )
}

pub fn help() {
  println!("Commands:");
  println!("  home | search <text> | category <name>   browse the catalog");
  println!("  view <n> | add <n>                       inspect a listing / add it to your cart");
  println!("  signup | login | logout | profile        account");
  println!("  cart | remove <n> | checkout             shopping");
  println!("  sell | listings | edit <n> | delete <n>  selling");
  println!("  purchases                                order history");
  println!("  help | quit");
  let labels: Vec<&str> = trove::Category::ALL.iter().map(|c| c.label()).collect();
  println!("Categories: {}", labels.join(", "));
}

pub fn home(app: &App, filter: &CatalogFilter) -> Result<()> {
  println!("== Featured Items ==");
  let mut shown = 0;
  // Numbering follows catalog positions so 'view <n>' works from any filter.
  for (position, product) in app.session.products().iter().enumerate() {
    if filter.matches(product) {
      println!("{}", listing_line(position, product));
      shown += 1;
    }
  }
  if shown == 0 {
    println!("No items found. Try adjusting your search or filter criteria.");
  }
  Ok(())
}

fn nth_product(app: &App, index: usize) -> Result<Product> {
  app
    .session
    .products()
    .get(index)
    .cloned()
    .ok_or_else(|| AppError::NotFound("No such listing.".to_string()))
}

pub fn product_detail(app: &App, index: usize) -> Result<()> {
  let product = nth_product(app, index)?;
  println!("== {} ==", product.title);
  println!("Category: {}", product.category);
  println!("Price:    ${:.2}", product.price);
  println!("Seller:   {}", product.seller_name);
  println!("{}", product.description);
  for url in &product.image_urls {
    println!("  image: {url}");
  }
  Ok(())
}

pub fn add_to_cart(app: &mut App, index: usize) -> Result<()> {
  let product = nth_product(app, index)?;
  let title = product.title.clone();
  app.session.add_to_cart(product)?;
  println!("Added \"{title}\" to your cart.");
  Ok(())
}

pub fn signup(app: &mut App) -> Result<()> {
  println!("== Sign Up ==");
  let form = SignUpForm {
    username: prompt("Username")?,
    email: prompt("Email")?,
    password: prompt("Password")?,
    confirm_password: prompt("Confirm password")?,
  };
  form.validate()?;

  let avatar_url = format!("https://i.pravatar.cc/150?u={}", form.email);
  let user = match accounts::register(
    &mut app.directory,
    &form.username,
    &form.email,
    &form.password,
    &avatar_url,
  ) {
    Ok(user) => user,
    Err(TroveError::EmailTaken(_)) => {
      return Err(AppError::Validation(
        "An account with this email already exists.".to_string(),
      ))
    }
    Err(e) => return Err(e.into()),
  };

  info!(user_id = %user.id, "signup complete");
  app.session.signup(user)?;
  println!("Welcome to Trove, {}!", form.username);
  Ok(())
}

pub fn login(app: &mut App) -> Result<()> {
  println!("== Login ==");
  let form = LoginForm {
    email: prompt("Email")?,
    password: prompt("Password")?,
  };
  form.validate()?;

  match accounts::authenticate(&app.directory, &form.email, &form.password)? {
    Some(user) => {
      let username = user.username.clone();
      app.session.login(user)?;
      println!("Welcome back, {username}!");
      Ok(())
    }
    None => Err(AppError::Auth("Invalid email or password.".to_string())),
  }
}

pub fn logout(app: &mut App) -> Result<()> {
  app.session.logout()?;
  println!("Signed out.");
  Ok(())
}

pub fn cart(app: &App) -> Result<()> {
  if app.session.cart().is_empty() {
    println!("Your cart is empty. Start shopping from the home page.");
    return Ok(());
  }
  println!("== Your Cart ==");
  for (i, item) in app.session.cart().iter().enumerate() {
    println!(
      "{:>3}. {} x {}  ${:.2}",
      i + 1,
      item.product.title,
      item.quantity,
      item.line_total()
    );
  }
  let subtotal = app.session.cart_subtotal();
  println!("Subtotal: ${subtotal:.2}");
  println!("Shipping: Free");
  println!("Total:    ${subtotal:.2}");
  println!("'checkout' to proceed, 'remove <n>' to drop an entry.");
  Ok(())
}

pub fn remove_from_cart(app: &mut App, index: usize) -> Result<()> {
  let item = app
    .session
    .cart()
    .get(index)
    .ok_or_else(|| AppError::NotFound("No such cart entry.".to_string()))?;
  let id = item.product.id;
  let title = item.product.title.clone();
  app.session.remove_from_cart(id)?;
  println!("Removed \"{title}\" from your cart.");
  Ok(())
}

pub fn checkout(app: &mut App) -> Result<()> {
  if app.session.cart().is_empty() {
    println!("Your cart is empty. Add items to your cart before proceeding to checkout.");
    return Ok(());
  }

  println!("== Checkout ==");
  for item in app.session.cart() {
    println!("  {} x {}  ${:.2}", item.product.title, item.quantity, item.line_total());
  }
  println!("Total: ${:.2}", app.session.cart_subtotal());

  println!("Payment information:");
  let full_name = prompt("Full name")?;
  let address = prompt("Shipping address")?;
  let card_number = prompt("Card number")?;
  let expiry = prompt("Expiry (MM/YY)")?;
  let cvc = prompt("CVC")?;
  if full_name.is_empty() || address.is_empty() || card_number.is_empty() || expiry.is_empty() || cvc.is_empty() {
    return Err(AppError::Validation("Please fill in all fields.".to_string()));
  }

  // The mock payment always succeeds. The cart-to-purchases transition runs
  // right here in the submit handler, before any confirmation is shown.
  info!(entries = app.session.cart_len(), "payment submitted, finalizing order");
  app.session.checkout()?;
  payment_status();
  Ok(())
}

fn payment_status() {
  println!("Payment Successful!");
  println!("Thank you for your purchase. Your order has been confirmed.");
  println!("'purchases' shows your order history; 'home' to continue shopping.");
}

pub fn profile(app: &mut App) -> Result<()> {
  let Some(current) = app.session.current_user().cloned() else {
    return Ok(());
  };
  println!("== Profile ==");
  println!("Username: {}", current.username);
  println!("Email:    {}", current.email);
  println!("Avatar:   {}", current.avatar_url);

  println!("Leave a field empty to keep the current value.");
  let username = prompt("New username")?;
  let email = prompt("New email")?;
  let avatar_url = prompt("New avatar URL")?;
  if username.is_empty() && email.is_empty() && avatar_url.is_empty() {
    println!("Profile unchanged.");
    return Ok(());
  }
  if !email.is_empty() && !email.contains('@') {
    return Err(AppError::Validation("Valid email is required.".to_string()));
  }

  let updated = trove::User {
    id: current.id,
    username: if username.is_empty() { current.username } else { username },
    email: if email.is_empty() { current.email } else { email },
    password_hash: current.password_hash,
    avatar_url: if avatar_url.is_empty() { current.avatar_url } else { avatar_url },
  };
  app.session.update_user(updated)?;
  println!("Profile updated.");
  Ok(())
}

pub fn my_listings(app: &App) -> Result<()> {
  let mine = app.session.my_listings();
  if mine.is_empty() {
    println!("You haven't listed any items yet. Start selling with 'sell'.");
    return Ok(());
  }
  println!("== My Listings ==");
  for (i, product) in mine.iter().enumerate() {
    println!("{}", listing_line(i, product));
  }
  println!("'edit <n>' or 'delete <n>' to manage a listing.");
  Ok(())
}

fn nth_own_listing(app: &App, index: usize) -> Result<Product> {
  app
    .session
    .my_listings()
    .get(index)
    .map(|p| (*p).clone())
    .ok_or_else(|| AppError::NotFound("No such listing.".to_string()))
}

pub fn delete_listing(app: &mut App, index: usize) -> Result<()> {
  let listing = nth_own_listing(app, index)?;
  app.session.delete_product(listing.id)?;
  println!("Deleted \"{}\".", listing.title);
  Ok(())
}

pub fn edit_listing(app: &mut App, index: usize) -> Result<()> {
  let existing = nth_own_listing(app, index)?;
  println!("Editing \"{}\". Leave a field empty to keep the current value.", existing.title);

  let title = prompt(&format!("Title [{}]", existing.title))?;
  let description = prompt("Description")?;
  let category = prompt(&format!("Category [{}]", existing.category))?;
  let price = prompt(&format!("Price [{:.2}]", existing.price))?;
  let image_urls = prompt("Image URLs (comma-separated)")?;

  let merged = ProductForm {
    title: if title.is_empty() { existing.title.clone() } else { title },
    description: if description.is_empty() { existing.description.clone() } else { description },
    category: if category.is_empty() { existing.category.to_string() } else { category },
    price: if price.is_empty() { existing.price.to_string() } else { price },
    image_urls: if image_urls.is_empty() { existing.image_urls.join(", ") } else { image_urls },
  };
  let draft = merged.validate()?;

  let updated = draft.into_product(existing.id, existing.seller_id, existing.seller_name.clone());
  app.session.update_product(updated)?;
  println!("Listing updated.");
  Ok(())
}

pub fn my_purchases(app: &App) -> Result<()> {
  if app.session.purchases().is_empty() {
    println!("No purchases yet.");
    return Ok(());
  }
  println!("== My Purchases ==");
  for (i, purchase) in app.session.purchases().iter().enumerate() {
    println!(
      "{:>3}. {} x {}  ${:.2}  on {}",
      i + 1,
      purchase.product.title,
      purchase.quantity,
      purchase.line_total(),
      purchase.purchased_at.format("%Y-%m-%d %H:%M UTC")
    );
  }
  Ok(())
}

pub fn sell(app: &mut App) -> Result<()> {
  println!("== List a New Item ==");
  let form = ProductForm {
    title: prompt("Title")?,
    description: prompt("Description")?,
    category: prompt("Category")?,
    price: prompt("Price ($)")?,
    image_urls: prompt("Image URLs (comma-separated)")?,
  };
  let draft = form.validate()?;
  let title = draft.title.clone();
  app.session.add_product(draft)?;
  println!("\"{title}\" is now listed. See it under 'listings'.");
  Ok(())
}
