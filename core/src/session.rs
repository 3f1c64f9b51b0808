// trove_core/src/session.rs

//! The session store: the one stateful component of the engine.
//!
//! A [`SessionStore`] owns four entities: the current user, the shared
//! product catalog, the current user's cart, and their purchase history.
//! Every mutation writes the affected collections back to storage before
//! returning, so the persisted state always reflects the in-memory state.
//!
//! Operations whose precondition does not hold (mutating the catalog with no
//! signed-in user, editing a listing that no longer exists) are idempotent
//! no-ops rather than errors; callers are expected to gate access upstream.
//! The only `Err` an operation can produce is a storage or serialization
//! failure from the write-through step.

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::catalog::{filter_products, CatalogFilter};
use crate::error::TroveResult;
use crate::models::{CartItem, Product, ProductDraft, Purchase, User};
use crate::storage::{keys, KvStore};

/// Process-wide session state, mirrored into a [`KvStore`] on every
/// mutation. The storage backend is injected, which keeps the store fully
/// testable without any rendering or filesystem environment.
pub struct SessionStore<S: KvStore> {
  storage: S,
  current_user: Option<User>,
  products: Vec<Product>,
  cart: Vec<CartItem>,
  purchases: Vec<Purchase>,
}

impl<S: KvStore> SessionStore<S> {
  /// Loads a session from storage.
  ///
  /// If a current user was persisted by a previous session, that user's cart
  /// and purchase history are loaded as well. The catalog loads from its
  /// global key; when no catalog has ever been persisted, `seed_catalog` is
  /// installed (and persisted) instead. The seed is fixture data supplied by
  /// the caller, not something the store invents.
  pub fn open(storage: S, seed_catalog: Vec<Product>) -> TroveResult<Self> {
    let mut store = Self {
      storage,
      current_user: None,
      products: Vec::new(),
      cart: Vec::new(),
      purchases: Vec::new(),
    };

    store.current_user = store.storage.get(keys::CURRENT_USER)?;
    store.products = match store.storage.get(keys::CATALOG)? {
      Some(products) => products,
      None => {
        store.storage.set(keys::CATALOG, &seed_catalog)?;
        seed_catalog
      }
    };
    if let Some(user_id) = store.current_user.as_ref().map(|u| u.id) {
      store.load_session_for(user_id)?;
    }

    info!(
      signed_in = store.current_user.is_some(),
      catalog_len = store.products.len(),
      "session opened"
    );
    Ok(store)
  }

  // --- Read surface -------------------------------------------------------

  pub fn current_user(&self) -> Option<&User> {
    self.current_user.as_ref()
  }

  pub fn products(&self) -> &[Product] {
    &self.products
  }

  pub fn product(&self, id: Uuid) -> Option<&Product> {
    self.products.iter().find(|p| p.id == id)
  }

  pub fn cart(&self) -> &[CartItem] {
    &self.cart
  }

  pub fn purchases(&self) -> &[Purchase] {
    &self.purchases
  }

  /// The current user's own listings, regardless of total catalog size.
  /// Empty when nobody is signed in.
  pub fn my_listings(&self) -> Vec<&Product> {
    match &self.current_user {
      Some(user) => self.products.iter().filter(|p| p.seller_id == user.id).collect(),
      None => Vec::new(),
    }
  }

  /// Catalog entries matching a page-level search/filter.
  pub fn search(&self, filter: &CatalogFilter) -> Vec<&Product> {
    filter_products(&self.products, filter)
  }

  /// Number of distinct cart entries.
  pub fn cart_len(&self) -> usize {
    self.cart.len()
  }

  pub fn cart_subtotal(&self) -> f64 {
    self.cart.iter().map(CartItem::line_total).sum()
  }

  // --- Identity -----------------------------------------------------------

  /// Makes `user` the current user and reloads that user's cart and
  /// purchase history from storage. The caller supplies a
  /// previously-registered identity; the store does not authenticate.
  pub fn login(&mut self, user: User) -> TroveResult<()> {
    info!(user_id = %user.id, username = %user.username, "signing in");
    self.storage.set(keys::CURRENT_USER, &user)?;
    let user_id = user.id;
    self.current_user = Some(user);
    self.load_session_for(user_id)
  }

  /// Entering the session with a freshly registered identity is the same
  /// transition as logging in.
  pub fn signup(&mut self, user: User) -> TroveResult<()> {
    self.login(user)
  }

  /// Clears the current user. The in-memory cart and purchase views become
  /// empty; the departed user's persisted keys are left untouched and will
  /// be re-read on their next login.
  pub fn logout(&mut self) -> TroveResult<()> {
    if let Some(user) = &self.current_user {
      info!(user_id = %user.id, "signing out");
    }
    self.storage.remove(keys::CURRENT_USER)?;
    self.current_user = None;
    self.cart.clear();
    self.purchases.clear();
    Ok(())
  }

  /// Replaces the current user record (profile edit). No-op when nobody is
  /// signed in.
  pub fn update_user(&mut self, user: User) -> TroveResult<()> {
    if self.current_user.is_none() {
      warn!("update_user ignored: no user is signed in");
      return Ok(());
    }
    self.storage.set(keys::CURRENT_USER, &user)?;
    self.current_user = Some(user);
    Ok(())
  }

  /// Re-reads the cart and purchase keys of `user_id`. Invoked on every
  /// identity change so that state from a previously signed-in user can
  /// never leak into the new session, and so that a returning user's
  /// persisted cart is restored rather than assumed empty.
  fn load_session_for(&mut self, user_id: Uuid) -> TroveResult<()> {
    self.cart = self.storage.get(&keys::cart(user_id))?.unwrap_or_default();
    self.purchases = self.storage.get(&keys::purchases(user_id))?.unwrap_or_default();
    debug!(
      %user_id,
      cart_entries = self.cart.len(),
      purchases = self.purchases.len(),
      "per-user session state loaded"
    );
    Ok(())
  }

  // --- Catalog ------------------------------------------------------------

  /// Lists a new product. The store synthesizes a fresh id and stamps the
  /// seller attribution from the current user; the new listing goes to the
  /// front of the catalog. No-op when nobody is signed in.
  pub fn add_product(&mut self, draft: ProductDraft) -> TroveResult<()> {
    let Some(seller) = &self.current_user else {
      warn!("add_product ignored: no user is signed in");
      return Ok(());
    };
    let product = draft.into_product(Uuid::new_v4(), seller.id, seller.username.clone());
    info!(product_id = %product.id, title = %product.title, "listing new product");
    self.products.insert(0, product);
    self.storage.set(keys::CATALOG, &self.products)
  }

  /// Replaces the catalog entry with the same id. The seller attribution of
  /// the existing entry is preserved; only the listing fields are editable.
  /// Silent no-op (nothing rewritten) when the id is not in the catalog.
  pub fn update_product(&mut self, updated: Product) -> TroveResult<()> {
    let Some(slot) = self.products.iter_mut().find(|p| p.id == updated.id) else {
      warn!(product_id = %updated.id, "update_product ignored: id not in catalog");
      return Ok(());
    };
    debug!(product_id = %updated.id, "updating catalog entry");
    *slot = Product {
      seller_id: slot.seller_id,
      seller_name: slot.seller_name.clone(),
      ..updated
    };
    self.storage.set(keys::CATALOG, &self.products)
  }

  /// Removes a listing. Silent no-op (nothing rewritten) when absent.
  pub fn delete_product(&mut self, id: Uuid) -> TroveResult<()> {
    if !self.products.iter().any(|p| p.id == id) {
      warn!(product_id = %id, "delete_product ignored: id not in catalog");
      return Ok(());
    }
    info!(product_id = %id, "deleting listing");
    self.products.retain(|p| p.id != id);
    self.storage.set(keys::CATALOG, &self.products)
  }

  // --- Cart ---------------------------------------------------------------

  /// Adds a product to the cart. A second add of the same product id
  /// increments the existing entry's quantity instead of creating a
  /// duplicate entry.
  pub fn add_to_cart(&mut self, product: Product) -> TroveResult<()> {
    match self.cart.iter().position(|item| item.product.id == product.id) {
      Some(index) => {
        let item = &mut self.cart[index];
        item.quantity += 1;
        debug!(product_id = %product.id, quantity = item.quantity, "cart quantity incremented");
      }
      None => {
        debug!(product_id = %product.id, "cart entry added");
        self.cart.push(CartItem::new(product));
      }
    }
    self.persist_cart()
  }

  /// Deletes the cart entry for `product_id` entirely (quantities are never
  /// decremented). No-op when absent.
  pub fn remove_from_cart(&mut self, product_id: Uuid) -> TroveResult<()> {
    if !self.cart.iter().any(|item| item.product.id == product_id) {
      warn!(%product_id, "remove_from_cart ignored: not in cart");
      return Ok(());
    }
    self.cart.retain(|item| item.product.id != product_id);
    self.persist_cart()
  }

  pub fn clear_cart(&mut self) -> TroveResult<()> {
    self.cart.clear();
    self.persist_cart()
  }

  // --- Checkout -----------------------------------------------------------

  /// Converts every cart entry into a purchase record and empties the cart.
  ///
  /// All purchases of one checkout carry the same timestamp and are
  /// prepended to the history as a batch. No-op when nobody is signed in,
  /// and a complete no-op (storage untouched) when the cart is empty, so an
  /// immediate second checkout cannot duplicate purchases.
  ///
  /// The new history and the emptied cart are persisted before the
  /// in-memory state is committed; on a storage failure the session still
  /// holds the un-checked-out cart.
  pub fn checkout(&mut self) -> TroveResult<()> {
    let Some(user) = &self.current_user else {
      warn!("checkout ignored: no user is signed in");
      return Ok(());
    };
    if self.cart.is_empty() {
      warn!("checkout ignored: cart is empty");
      return Ok(());
    }
    let user_id = user.id;

    let now = Utc::now();
    let mut history: Vec<Purchase> = self
      .cart
      .iter()
      .map(|item| Purchase::from_cart_item(item, now))
      .collect();
    history.extend(self.purchases.iter().cloned());

    self.storage.set(&keys::purchases(user_id), &history)?;
    self.storage.set(&keys::cart(user_id), &Vec::<CartItem>::new())?;

    info!(%user_id, entries = self.cart.len(), "checkout complete");
    self.purchases = history;
    self.cart.clear();
    Ok(())
  }

  // --- Persistence helpers ------------------------------------------------

  /// Writes the cart under the current user's key. With nobody signed in
  /// there is no key to scope the cart to, so the (purely in-memory) cart
  /// is not persisted.
  fn persist_cart(&mut self) -> TroveResult<()> {
    match &self.current_user {
      Some(user) => {
        let key = keys::cart(user.id);
        self.storage.set(&key, &self.cart)
      }
      None => Ok(()),
    }
  }
}
