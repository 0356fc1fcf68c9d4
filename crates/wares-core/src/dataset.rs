//! The bundled demonstration dataset.
//!
//! Eleven fixed row sets, one per table, held as plain record vectors.
//! [`Dataset::verify`] checks the invariants the schema will enforce (and a
//! few it cannot) before any row reaches a database, so a data-entry typo
//! surfaces as a precise error instead of a storage-layer abort.

use std::collections::{HashMap, HashSet};

use chrono::{NaiveDate, NaiveDateTime};

use crate::{
  Error, Result,
  catalog::{Category, Product, Supplier},
  customer::{Customer, ShippingAddress},
  discount::{Discount, DiscountKind},
  inventory::Inventory,
  order::{Order, OrderItem, OrderStatus, Payment, PaymentMethod, PaymentStatus},
  review::{RATING_MAX, RATING_MIN, Review},
};

/// All seed rows, grouped by table, in insertion (dependency) order: parents
/// first, then children, then grandchildren.
#[derive(Debug, Clone)]
pub struct Dataset {
  pub customers:          Vec<Customer>,
  pub categories:         Vec<Category>,
  pub suppliers:          Vec<Supplier>,
  pub products:           Vec<Product>,
  pub orders:             Vec<Order>,
  pub order_items:        Vec<OrderItem>,
  pub reviews:            Vec<Review>,
  pub shipping_addresses: Vec<ShippingAddress>,
  pub payments:           Vec<Payment>,
  pub inventory:          Vec<Inventory>,
  pub discounts:          Vec<Discount>,
}

// Literal helpers; arguments only ever come from the fixed rows in `builtin`.
fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).expect("literal date")
}

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
  date(y, m, d).and_hms_opt(h, min, s).expect("literal time")
}

impl Dataset {
  /// The fixed demonstration row set: 76 rows across eleven tables.
  #[rustfmt::skip]
  pub fn builtin() -> Self {
    use DiscountKind::{Fixed, Percentage};
    use OrderStatus::{Completed, Pending, Shipped};
    use PaymentMethod::{CreditCard, DebitCard, PayPal};

    let customers = vec![
      Customer::new(1, "John", "Doe", "john.doe@email.com", "New York", "USA", date(2023, 1, 15)),
      Customer::new(2, "Jane", "Smith", "jane.smith@email.com", "London", "UK", date(2023, 2, 20)),
      Customer::new(3, "Carlos", "Rodriguez", "carlos.r@email.com", "Madrid", "Spain", date(2023, 3, 10)),
      Customer::new(4, "Emily", "Johnson", "emily.j@email.com", "Toronto", "Canada", date(2023, 4, 5)),
      Customer::new(5, "Michael", "Brown", "michael.b@email.com", "Sydney", "Australia", date(2023, 5, 12)),
    ];

    let categories = vec![
      Category::new(1, "Electronics", "Electronic devices and gadgets", None),
      Category::new(2, "Computers", "Computer hardware and accessories", Some(1)),
      Category::new(3, "Mobile Devices", "Smartphones and tablets", Some(1)),
      Category::new(4, "Home & Kitchen", "Home and kitchen appliances", None),
      Category::new(5, "Appliances", "Kitchen and home appliances", Some(4)),
      Category::new(6, "Sports & Outdoors", "Sports equipment and outdoor gear", None),
      Category::new(7, "Footwear", "Sports and casual shoes", Some(6)),
      Category::new(8, "Furniture", "Home and office furniture", None),
      Category::new(9, "Office Furniture", "Desks, chairs, and office equipment", Some(8)),
    ];

    let suppliers = vec![
      Supplier::new(101, "TechCorp Solutions", "Alice Johnson", "alice@techcorp.com", "+1-555-0101", "123 Tech St", "San Francisco", "USA"),
      Supplier::new(102, "Mobile Masters", "Bob Smith", "bob@mobilemasters.com", "+1-555-0102", "456 Mobile Ave", "Austin", "USA"),
      Supplier::new(103, "Kitchen Plus", "Carol Williams", "carol@kitchenplus.com", "+1-555-0103", "789 Kitchen Blvd", "Chicago", "USA"),
      Supplier::new(104, "SportsPro Ltd", "David Brown", "david@sportspro.com", "+44-20-5550104", "321 Sports Rd", "London", "UK"),
      Supplier::new(105, "FurniWorld", "Emma Davis", "emma@furniworld.com", "+1-555-0105", "654 Furniture Way", "New York", "USA"),
    ];

    let products = vec![
      Product::new(1, "Laptop Pro", "Electronics", 1299.99, 899.99, 50, 101),
      Product::new(2, "Smartphone X", "Electronics", 699.99, 489.99, 120, 102),
      Product::new(3, "Coffee Maker", "Appliances", 89.99, 62.99, 75, 103),
      Product::new(4, "Running Shoes", "Sports", 129.99, 89.99, 200, 104),
      Product::new(5, "Office Chair", "Furniture", 249.99, 174.99, 30, 105),
      Product::new(6, "Wireless Mouse", "Electronics", 29.99, 19.99, 150, 101),
      Product::new(7, "Water Bottle", "Sports", 19.99, 12.99, 300, 104),
    ];

    let orders = vec![
      Order::new(1, 1, date(2023, 6, 1), 1329.98, Completed),
      Order::new(2, 2, date(2023, 6, 2), 729.98, Completed),
      Order::new(3, 3, date(2023, 6, 3), 159.98, Pending),
      Order::new(4, 1, date(2023, 6, 4), 279.98, Completed),
      Order::new(5, 4, date(2023, 6, 5), 89.99, Shipped),
      Order::new(6, 5, date(2023, 6, 6), 149.98, Completed),
    ];

    let order_items = vec![
      OrderItem::new(1, 1, 1, 1, 1299.99),
      OrderItem::new(2, 1, 6, 1, 29.99),
      OrderItem::new(3, 2, 2, 1, 699.99),
      OrderItem::new(4, 2, 6, 1, 29.99),
      OrderItem::new(5, 3, 4, 1, 129.99),
      OrderItem::new(6, 3, 6, 1, 29.99),
      OrderItem::new(7, 4, 5, 1, 249.99),
      OrderItem::new(8, 4, 6, 1, 29.99),
      OrderItem::new(9, 5, 3, 1, 89.99),
      OrderItem::new(10, 6, 4, 1, 129.99),
      OrderItem::new(11, 6, 7, 1, 19.99),
    ];

    let reviews = vec![
      Review::new(1, 1, 1, 5, "Excellent laptop! Very fast and reliable.", date(2023, 6, 15)),
      Review::new(2, 1, 4, 4, "Great performance, but a bit pricey.", date(2023, 7, 1)),
      Review::new(3, 2, 2, 5, "Love this phone! Amazing camera quality.", date(2023, 6, 10)),
      Review::new(4, 3, 5, 4, "Good coffee maker, easy to use.", date(2023, 6, 20)),
      Review::new(5, 4, 1, 5, "Very comfortable running shoes.", date(2023, 6, 25)),
      Review::new(6, 4, 3, 4, "Good quality, fit perfectly.", date(2023, 7, 5)),
      Review::new(7, 5, 4, 3, "Chair is okay, could be more comfortable.", date(2023, 6, 30)),
      Review::new(8, 6, 2, 5, "Perfect mouse for work and gaming.", date(2023, 7, 10)),
      Review::new(9, 7, 5, 5, "Great water bottle, keeps drinks cold all day.", date(2023, 7, 15)),
    ];

    let shipping_addresses = vec![
      ShippingAddress::new(1, 1, "123 Main St", Some("Apt 4B"), "New York", Some("NY"), "10001", "USA", true),
      ShippingAddress::new(2, 1, "456 Work Plaza", Some("Suite 200"), "New York", Some("NY"), "10002", "USA", false),
      ShippingAddress::new(3, 2, "789 London St", None, "London", None, "SW1A 1AA", "UK", true),
      ShippingAddress::new(4, 3, "321 Madrid Ave", None, "Madrid", None, "28001", "Spain", true),
      ShippingAddress::new(5, 4, "654 Toronto Rd", Some("Unit 12"), "Toronto", Some("ON"), "M5V 3A1", "Canada", true),
      ShippingAddress::new(6, 5, "987 Sydney Blvd", None, "Sydney", Some("NSW"), "2000", "Australia", true),
    ];

    let payments = vec![
      Payment::new(1, 1, CreditCard, 1329.98, datetime(2023, 6, 1, 14, 30, 0), PaymentStatus::Completed, "TXN123456"),
      Payment::new(2, 2, PayPal, 729.98, datetime(2023, 6, 2, 16, 45, 0), PaymentStatus::Completed, "PP789012"),
      Payment::new(3, 3, CreditCard, 159.98, datetime(2023, 6, 3, 10, 15, 0), PaymentStatus::Pending, "TXN345678"),
      Payment::new(4, 4, DebitCard, 279.98, datetime(2023, 6, 4, 12, 20, 0), PaymentStatus::Completed, "DB901234"),
      Payment::new(5, 5, CreditCard, 89.99, datetime(2023, 6, 5, 9, 30, 0), PaymentStatus::Completed, "TXN567890"),
      Payment::new(6, 6, PayPal, 149.98, datetime(2023, 6, 6, 18, 10, 0), PaymentStatus::Completed, "PP234567"),
    ];

    let inventory = vec![
      Inventory::new(1, 1, "Warehouse A", 45, 5, 10, datetime(2023, 11, 1, 8, 0, 0)),
      Inventory::new(2, 2, "Warehouse A", 115, 5, 20, datetime(2023, 11, 1, 8, 0, 0)),
      Inventory::new(3, 3, "Warehouse B", 70, 5, 15, datetime(2023, 11, 1, 8, 0, 0)),
      Inventory::new(4, 4, "Warehouse C", 195, 5, 25, datetime(2023, 11, 1, 8, 0, 0)),
      Inventory::new(5, 5, "Warehouse B", 25, 5, 10, datetime(2023, 11, 1, 8, 0, 0)),
      Inventory::new(6, 6, "Warehouse A", 145, 5, 30, datetime(2023, 11, 1, 8, 0, 0)),
      Inventory::new(7, 7, "Warehouse C", 295, 5, 50, datetime(2023, 11, 1, 8, 0, 0)),
    ];

    let discounts = vec![
      Discount::new(1, "WELCOME10", Percentage, 10.00, 50.00, date(2023, 1, 1), date(2023, 12, 31), true, Some(1000), 45),
      Discount::new(2, "SUMMER20", Percentage, 20.00, 100.00, date(2023, 6, 1), date(2023, 8, 31), true, Some(500), 123),
      Discount::new(3, "NEWUSER25", Fixed, 25.00, 75.00, date(2023, 1, 1), date(2023, 12, 31), true, None, 67),
      Discount::new(4, "BLACKFRIDAY", Percentage, 30.00, 200.00, date(2023, 11, 24), date(2023, 11, 27), false, Some(200), 0),
      Discount::new(5, "FREESHIP", Fixed, 15.00, 30.00, date(2023, 1, 1), date(2023, 12, 31), true, None, 234),
    ];

    Self {
      customers,
      categories,
      suppliers,
      products,
      orders,
      order_items,
      reviews,
      shipping_addresses,
      payments,
      inventory,
      discounts,
    }
  }

  /// Check every cross-table reference, uniqueness constraint, rating bound,
  /// and the category forest. Returns the first violation found.
  pub fn verify(&self) -> Result<()> {
    let customers =
      unique_ids("customers", self.customers.iter().map(|c| c.customer_id))?;
    unique_texts("customers", self.customers.iter().map(|c| c.email.as_str()))?;

    let categories =
      unique_ids("categories", self.categories.iter().map(|c| c.category_id))?;
    let suppliers =
      unique_ids("suppliers", self.suppliers.iter().map(|s| s.supplier_id))?;
    let products =
      unique_ids("products", self.products.iter().map(|p| p.product_id))?;
    let orders = unique_ids("orders", self.orders.iter().map(|o| o.order_id))?;

    unique_ids(
      "order_items",
      self.order_items.iter().map(|i| i.order_item_id),
    )?;
    unique_ids("reviews", self.reviews.iter().map(|r| r.review_id))?;
    unique_ids(
      "shipping_addresses",
      self.shipping_addresses.iter().map(|a| a.address_id),
    )?;
    unique_ids("payments", self.payments.iter().map(|p| p.payment_id))?;
    unique_ids("inventory", self.inventory.iter().map(|i| i.inventory_id))?;
    unique_ids("discounts", self.discounts.iter().map(|d| d.discount_id))?;
    unique_texts(
      "discounts",
      self.discounts.iter().map(|d| d.discount_code.as_str()),
    )?;

    self.verify_category_forest(&categories)?;

    for p in &self.products {
      resolve("products", "supplier_id", p.supplier_id, &suppliers)?;
    }
    for o in &self.orders {
      resolve("orders", "customer_id", o.customer_id, &customers)?;
    }
    for item in &self.order_items {
      resolve("order_items", "order_id", item.order_id, &orders)?;
      resolve("order_items", "product_id", item.product_id, &products)?;
    }
    for r in &self.reviews {
      resolve("reviews", "product_id", r.product_id, &products)?;
      resolve("reviews", "customer_id", r.customer_id, &customers)?;
      if !(RATING_MIN..=RATING_MAX).contains(&r.rating) {
        return Err(Error::RatingOutOfRange {
          review_id: r.review_id,
          rating:    r.rating,
        });
      }
    }
    for a in &self.shipping_addresses {
      resolve("shipping_addresses", "customer_id", a.customer_id, &customers)?;
    }
    for p in &self.payments {
      resolve("payments", "order_id", p.order_id, &orders)?;
    }
    for inv in &self.inventory {
      resolve("inventory", "product_id", inv.product_id, &products)?;
    }

    Ok(())
  }

  /// Parent references must land on existing categories and never loop. Each
  /// chain is walked at most `categories.len()` steps; going past that means
  /// a cycle.
  fn verify_category_forest(&self, ids: &HashSet<i64>) -> Result<()> {
    let parents: HashMap<i64, Option<i64>> = self
      .categories
      .iter()
      .map(|c| (c.category_id, c.parent_category_id))
      .collect();

    for c in &self.categories {
      if let Some(parent) = c.parent_category_id {
        resolve("categories", "parent_category_id", parent, ids)?;
      }

      let mut cursor = c.parent_category_id;
      let mut steps = 0;
      while let Some(id) = cursor {
        steps += 1;
        if steps > self.categories.len() {
          return Err(Error::CategoryCycle { category_id: c.category_id });
        }
        cursor = parents.get(&id).copied().flatten();
      }
    }

    Ok(())
  }
}

// ─── Verification helpers ────────────────────────────────────────────────────

fn unique_ids(
  table: &'static str,
  ids: impl Iterator<Item = i64>,
) -> Result<HashSet<i64>> {
  let mut seen = HashSet::new();
  for id in ids {
    if !seen.insert(id) {
      return Err(Error::DuplicateKey { table, key: id.to_string() });
    }
  }
  Ok(seen)
}

fn unique_texts<'a>(
  table: &'static str,
  values: impl Iterator<Item = &'a str>,
) -> Result<()> {
  let mut seen = HashSet::new();
  for value in values {
    if !seen.insert(value) {
      return Err(Error::DuplicateKey { table, key: value.to_owned() });
    }
  }
  Ok(())
}

fn resolve(
  table: &'static str,
  column: &'static str,
  id: i64,
  parents: &HashSet<i64>,
) -> Result<()> {
  if parents.contains(&id) {
    Ok(())
  } else {
    Err(Error::DanglingReference { table, column, id })
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builtin_dataset_verifies() {
    Dataset::builtin().verify().expect("builtin dataset");
  }

  #[test]
  fn builtin_row_counts() {
    let ds = Dataset::builtin();
    assert_eq!(ds.customers.len(), 5);
    assert_eq!(ds.categories.len(), 9);
    assert_eq!(ds.suppliers.len(), 5);
    assert_eq!(ds.products.len(), 7);
    assert_eq!(ds.orders.len(), 6);
    assert_eq!(ds.order_items.len(), 11);
    assert_eq!(ds.reviews.len(), 9);
    assert_eq!(ds.shipping_addresses.len(), 6);
    assert_eq!(ds.payments.len(), 6);
    assert_eq!(ds.inventory.len(), 7);
    assert_eq!(ds.discounts.len(), 5);
  }

  #[test]
  fn category_roots_are_the_four_top_levels() {
    let ds = Dataset::builtin();
    let roots: Vec<&str> = ds
      .categories
      .iter()
      .filter(|c| c.parent_category_id.is_none())
      .map(|c| c.category_name.as_str())
      .collect();
    assert_eq!(
      roots,
      ["Electronics", "Home & Kitchen", "Sports & Outdoors", "Furniture"]
    );
  }

  #[test]
  fn non_root_categories_sit_one_level_deep() {
    let ds = Dataset::builtin();
    let roots: HashSet<i64> = ds
      .categories
      .iter()
      .filter(|c| c.parent_category_id.is_none())
      .map(|c| c.category_id)
      .collect();
    for c in &ds.categories {
      if let Some(parent) = c.parent_category_id {
        assert!(roots.contains(&parent), "{} should hang off a root", c.category_name);
      }
    }
  }

  #[test]
  fn duplicate_email_is_rejected() {
    let mut ds = Dataset::builtin();
    ds.customers[1].email = ds.customers[0].email.clone();
    assert!(matches!(
      ds.verify(),
      Err(Error::DuplicateKey { table: "customers", .. })
    ));
  }

  #[test]
  fn duplicate_discount_code_is_rejected() {
    let mut ds = Dataset::builtin();
    ds.discounts[1].discount_code = ds.discounts[0].discount_code.clone();
    assert!(matches!(
      ds.verify(),
      Err(Error::DuplicateKey { table: "discounts", .. })
    ));
  }

  #[test]
  fn dangling_order_customer_is_rejected() {
    let mut ds = Dataset::builtin();
    ds.orders[0].customer_id = 999;
    assert!(matches!(
      ds.verify(),
      Err(Error::DanglingReference { table: "orders", column: "customer_id", id: 999 })
    ));
  }

  #[test]
  fn dangling_order_item_product_is_rejected() {
    let mut ds = Dataset::builtin();
    ds.order_items[0].product_id = 42;
    assert!(matches!(
      ds.verify(),
      Err(Error::DanglingReference { table: "order_items", column: "product_id", id: 42 })
    ));
  }

  #[test]
  fn out_of_range_rating_is_rejected() {
    let mut ds = Dataset::builtin();
    ds.reviews[0].rating = 6;
    assert!(matches!(
      ds.verify(),
      Err(Error::RatingOutOfRange { rating: 6, .. })
    ));
  }

  #[test]
  fn category_cycle_is_rejected() {
    let mut ds = Dataset::builtin();
    // Electronics (1) already parents Computers (2); closing the loop makes
    // 1 -> 2 -> 1.
    ds.categories[0].parent_category_id = Some(2);
    assert!(matches!(ds.verify(), Err(Error::CategoryCycle { .. })));
  }

  #[test]
  fn status_text_matches_stored_columns() {
    assert_eq!(OrderStatus::Completed.as_str(), "Completed");
    assert_eq!(PaymentMethod::CreditCard.as_str(), "Credit Card");
    assert_eq!(DiscountKind::Percentage.as_str(), "percentage");
  }
}
