//! Catalog records — categories, suppliers, and the products they carry.

use serde::{Deserialize, Serialize};

/// A product category. `parent_category_id` builds a forest: top-level
/// categories have no parent, every other category sits one level deep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
  pub category_id:        i64,
  pub category_name:      String,
  pub description:        String,
  pub parent_category_id: Option<i64>,
}

impl Category {
  pub fn new(
    category_id: i64,
    category_name: &str,
    description: &str,
    parent_category_id: Option<i64>,
  ) -> Self {
    Self {
      category_id,
      category_name: category_name.to_owned(),
      description: description.to_owned(),
      parent_category_id,
    }
  }
}

/// A product supplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
  pub supplier_id:    i64,
  pub supplier_name:  String,
  pub contact_person: String,
  pub email:          String,
  pub phone:          String,
  pub address:        String,
  pub city:           String,
  pub country:        String,
}

impl Supplier {
  #[allow(clippy::too_many_arguments)]
  pub fn new(
    supplier_id: i64,
    supplier_name: &str,
    contact_person: &str,
    email: &str,
    phone: &str,
    address: &str,
    city: &str,
    country: &str,
  ) -> Self {
    Self {
      supplier_id,
      supplier_name: supplier_name.to_owned(),
      contact_person: contact_person.to_owned(),
      email: email.to_owned(),
      phone: phone.to_owned(),
      address: address.to_owned(),
      city: city.to_owned(),
      country: country.to_owned(),
    }
  }
}

/// A sellable product. `category` holds a display name, not a key into
/// `categories`; `supplier_id` is a real reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
  pub product_id:     i64,
  pub product_name:   String,
  pub category:       String,
  pub price:          f64,
  pub cost:           f64,
  pub stock_quantity: i64,
  pub supplier_id:    i64,
}

impl Product {
  pub fn new(
    product_id: i64,
    product_name: &str,
    category: &str,
    price: f64,
    cost: f64,
    stock_quantity: i64,
    supplier_id: i64,
  ) -> Self {
    Self {
      product_id,
      product_name: product_name.to_owned(),
      category: category.to_owned(),
      price,
      cost,
      stock_quantity,
      supplier_id,
    }
  }
}
