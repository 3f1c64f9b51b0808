// trove_core/src/seed.rs

//! Static fixture data: the starter catalog installed on first launch, when
//! no catalog has been persisted yet. Fixture products are attributed to a
//! well-known fixture seller rather than to any registered account.

use uuid::Uuid;

use crate::models::{Category, Product};

/// Identity of the fixture seller that owns the starter listings.
pub fn fixture_seller_id() -> Uuid {
  Uuid::from_u128(1)
}

const FIXTURE_SELLER_NAME: &str = "Trove Collective";

/// The starter catalog: a handful of second-hand listings across several
/// categories. Ids are freshly generated, so each installation gets its own.
pub fn starter_catalog() -> Vec<Product> {
  let listing = |title: &str, description: &str, category: Category, price: f64, image: &str| Product {
    id: Uuid::new_v4(),
    title: title.to_string(),
    description: description.to_string(),
    category,
    price,
    image_urls: vec![image.to_string()],
    seller_id: fixture_seller_id(),
    seller_name: FIXTURE_SELLER_NAME.to_string(),
  };

  vec![
    listing(
      "Vintage Film Camera",
      "Fully working 35mm rangefinder from the late 70s. Light meter tested, new seals.",
      Category::Electronics,
      89.50,
      "https://picsum.photos/seed/film-camera/600/400",
    ),
    listing(
      "Wool Overcoat",
      "Charcoal wool overcoat, barely worn, size M. Freshly dry-cleaned.",
      Category::Clothing,
      45.00,
      "https://picsum.photos/seed/overcoat/600/400",
    ),
    listing(
      "Mid-Century Table Lamp",
      "Teak base with the original shade. Rewired with a modern switch.",
      Category::HomeGoods,
      32.00,
      "https://picsum.photos/seed/table-lamp/600/400",
    ),
    listing(
      "Cookbook Bundle",
      "Six well-loved cookbooks, mostly Mediterranean. A few pencil notes in the margins.",
      Category::Books,
      18.00,
      "https://picsum.photos/seed/cookbooks/600/400",
    ),
    listing(
      "Road Bike",
      "Steel frame road bike, 56cm. New tires and bar tape, recently serviced.",
      Category::Sports,
      220.00,
      "https://picsum.photos/seed/road-bike/600/400",
    ),
    listing(
      "Wooden Train Set",
      "Complete wooden railway with bridges and a level crossing. All pieces present.",
      Category::Toys,
      25.00,
      "https://picsum.photos/seed/train-set/600/400",
    ),
  ]
}
