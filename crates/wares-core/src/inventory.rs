//! Warehouse stock levels per product.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
  pub inventory_id:       i64,
  pub product_id:         i64,
  pub warehouse_location: String,
  pub quantity_available: i64,
  pub quantity_reserved:  i64,
  pub reorder_level:      i64,
  pub last_updated:       NaiveDateTime,
}

impl Inventory {
  pub fn new(
    inventory_id: i64,
    product_id: i64,
    warehouse_location: &str,
    quantity_available: i64,
    quantity_reserved: i64,
    reorder_level: i64,
    last_updated: NaiveDateTime,
  ) -> Self {
    Self {
      inventory_id,
      product_id,
      warehouse_location: warehouse_location.to_owned(),
      quantity_available,
      quantity_reserved,
      reorder_level,
      last_updated,
    }
  }
}
