// tests/persistence_tests.rs
mod common;

use common::*;
use chrono::Utc;
use trove::models::{CartItem, Category, Purchase, User};
use trove::storage::{keys, FileStore, KvStore, MemStore};
use trove::SessionStore;
use uuid::Uuid;

#[test]
fn every_collection_round_trips_through_json() {
  setup_tracing();
  let ana = User {
    id: Uuid::new_v4(),
    username: "ana".to_string(),
    email: "ana@example.com".to_string(),
    password_hash: Some("$argon2id$v=19$m=19456,t=2,p=1$placeholder$placeholder".to_string()),
    avatar_url: "https://i.pravatar.cc/150?u=ana".to_string(),
  };
  let users = vec![ana.clone(), user("bénédicte")];

  let mut bike = listing("Böcklin Bike (56cm)", 219.99, Category::Sports, &ana);
  bike.image_urls = vec![
    "https://img.example.com/bike-front.jpg".to_string(),
    "https://img.example.com/bike-side.jpg".to_string(),
  ];
  let catalog = vec![bike.clone(), listing("Lamp", 0.01, Category::HomeGoods, &ana)];

  let cart = vec![
    CartItem {
      product: bike.clone(),
      quantity: 3,
      added_at: Utc::now(),
    },
    CartItem::new(catalog[1].clone()),
  ];

  let purchases = vec![Purchase::from_cart_item(&cart[0], Utc::now())];

  let users_again: Vec<User> = serde_json::from_str(&serde_json::to_string(&users).unwrap()).unwrap();
  assert_eq!(users_again, users);

  let catalog_again: Vec<trove::Product> = serde_json::from_str(&serde_json::to_string(&catalog).unwrap()).unwrap();
  assert_eq!(catalog_again, catalog);

  let cart_again: Vec<CartItem> = serde_json::from_str(&serde_json::to_string(&cart).unwrap()).unwrap();
  assert_eq!(cart_again, cart);

  let purchases_again: Vec<Purchase> = serde_json::from_str(&serde_json::to_string(&purchases).unwrap()).unwrap();
  assert_eq!(purchases_again, purchases);
}

#[test]
fn file_store_reads_back_what_it_wrote() {
  setup_tracing();
  let dir = TempDir::new("kv");
  let mut store = FileStore::open(dir.path()).unwrap();

  assert_eq!(store.get_raw("missing").unwrap(), None);

  store.set_raw(keys::CURRENT_USER, "{\"hello\":1}").unwrap();
  assert_eq!(store.get_raw(keys::CURRENT_USER).unwrap().as_deref(), Some("{\"hello\":1}"));

  // Per-user keys contain a colon and map to plain files all the same.
  let cart_key = keys::cart(Uuid::new_v4());
  store.set_raw(&cart_key, "[]").unwrap();
  assert_eq!(store.get_raw(&cart_key).unwrap().as_deref(), Some("[]"));

  store.remove(&cart_key).unwrap();
  assert_eq!(store.get_raw(&cart_key).unwrap(), None);
  // Removing an absent key is fine.
  store.remove(&cart_key).unwrap();
}

#[test]
fn mem_store_behaves_like_a_map() {
  setup_tracing();
  let mut store = MemStore::new();
  assert!(store.is_empty());

  store.set_raw("k", "v").unwrap();
  assert!(store.contains_key("k"));
  assert_eq!(store.len(), 1);
  assert_eq!(store.get_raw("k").unwrap().as_deref(), Some("v"));

  store.remove("k").unwrap();
  assert!(!store.contains_key("k"));
  assert_eq!(store.get_raw("k").unwrap(), None);
}

#[test]
fn a_reopened_session_restores_user_catalog_and_cart() {
  setup_tracing();
  let dir = TempDir::new("reopen");
  let ana = user("ana");

  {
    let store = FileStore::open(dir.path()).unwrap();
    let mut session = SessionStore::open(store, Vec::new()).unwrap();
    session.signup(ana.clone()).unwrap();
    session.add_product(draft("Bike", 20.0, Category::Sports)).unwrap();
    let bike = session.products()[0].clone();
    session.add_to_cart(bike.clone()).unwrap();
    session.add_to_cart(bike).unwrap();
  }

  let store = FileStore::open(dir.path()).unwrap();
  let session = SessionStore::open(store, Vec::new()).unwrap();

  assert_eq!(session.current_user().map(|u| u.id), Some(ana.id));
  assert_eq!(session.products().len(), 1);
  assert_eq!(session.cart().len(), 1);
  assert_eq!(session.cart()[0].quantity, 2);
}

#[test]
fn a_logged_out_session_reopens_signed_out_but_keeps_user_data() {
  setup_tracing();
  let dir = TempDir::new("signed-out");
  let ana = user("ana");

  {
    let store = FileStore::open(dir.path()).unwrap();
    let mut session = SessionStore::open(store, Vec::new()).unwrap();
    session.signup(ana.clone()).unwrap();
    session.add_product(draft("Bike", 20.0, Category::Sports)).unwrap();
    let bike = session.products()[0].clone();
    session.add_to_cart(bike).unwrap();
    session.checkout().unwrap();
    session.logout().unwrap();
  }

  let store = FileStore::open(dir.path()).unwrap();
  let mut session = SessionStore::open(store, Vec::new()).unwrap();
  assert!(session.current_user().is_none());
  assert!(session.purchases().is_empty());

  session.login(ana).unwrap();
  assert_eq!(session.purchases().len(), 1);
}

#[test]
fn seed_catalog_applies_only_on_first_open() {
  setup_tracing();
  let seller = user("fixtures");
  let first_seed = vec![listing("Bike", 20.0, Category::Sports, &seller)];
  let second_seed = vec![
    listing("Lamp", 15.0, Category::HomeGoods, &seller),
    listing("Novel", 8.0, Category::Books, &seller),
  ];

  let dir = TempDir::new("seed");
  {
    let store = FileStore::open(dir.path()).unwrap();
    let session = SessionStore::open(store, first_seed.clone()).unwrap();
    assert_eq!(session.products(), &first_seed[..]);
  }

  // A persisted catalog wins over whatever seed the caller supplies.
  let store = FileStore::open(dir.path()).unwrap();
  let session = SessionStore::open(store, second_seed).unwrap();
  assert_eq!(session.products(), &first_seed[..]);
}

#[test]
fn every_mutation_is_visible_to_a_parallel_handle() {
  setup_tracing();
  // FileStore clones share a directory, so a second handle opened after a
  // mutation sees the write immediately: write-through, not write-back.
  let dir = TempDir::new("write-through");
  let store = FileStore::open(dir.path()).unwrap();
  let observer = store.clone();

  let ana = user("ana");
  let mut session = SessionStore::open(store, Vec::new()).unwrap();
  session.signup(ana.clone()).unwrap();

  let persisted: Option<User> = observer.get(keys::CURRENT_USER).unwrap();
  assert_eq!(persisted.map(|u| u.id), Some(ana.id));

  session.add_product(draft("Bike", 20.0, Category::Sports)).unwrap();
  let catalog: Option<Vec<trove::Product>> = observer.get(keys::CATALOG).unwrap();
  assert_eq!(catalog.map(|c| c.len()), Some(1));

  let bike = session.products()[0].clone();
  session.add_to_cart(bike).unwrap();
  let cart: Option<Vec<CartItem>> = observer.get(&keys::cart(ana.id)).unwrap();
  assert_eq!(cart.map(|c| c.len()), Some(1));

  session.checkout().unwrap();
  let cart: Option<Vec<CartItem>> = observer.get(&keys::cart(ana.id)).unwrap();
  assert_eq!(cart.map(|c| c.len()), Some(0));
  let history: Option<Vec<Purchase>> = observer.get(&keys::purchases(ana.id)).unwrap();
  assert_eq!(history.map(|h| h.len()), Some(1));
}

#[test]
fn cart_mutations_without_a_user_stay_in_memory() {
  setup_tracing();
  let seller = user("fixtures");
  let seed = vec![listing("Bike", 20.0, Category::Sports, &seller)];

  let mut store = MemStore::new();
  // Pre-populate the catalog key so open() does not write the seed.
  store.set(keys::CATALOG, &seed).unwrap();

  let mut session = SessionStore::open(store, Vec::new()).unwrap();
  let bike = session.products()[0].clone();
  session.add_to_cart(bike).unwrap();

  // No signed-in user means no cart key to write under.
  assert_eq!(session.cart().len(), 1);
}
