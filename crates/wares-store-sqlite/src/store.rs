//! [`SqliteStore`] — opens the database file and seeds it.

use std::path::Path;

use rusqlite::{Connection, Transaction, params};

use wares_core::{
  Dataset,
  catalog::{Category, Product, Supplier},
  customer::{Customer, ShippingAddress},
  discount::Discount,
  inventory::Inventory,
  order::{Order, OrderItem, Payment},
  review::Review,
};

use crate::{
  Result,
  encode::{encode_date, encode_datetime},
  report::{SeedReport, TableGroup},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// The sample commerce database, backed by a single SQLite file.
pub struct SqliteStore {
  pub(crate) conn: Connection,
}

impl SqliteStore {
  /// Open (or create) the database at `path` and run schema initialisation.
  /// Missing parent directories are created first.
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
      std::fs::create_dir_all(parent)?;
    }

    let conn = Connection::open(path)?;
    let store = Self { conn };
    store.init_schema()?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub fn open_in_memory() -> Result<Self> {
    let conn = Connection::open_in_memory()?;
    let store = Self { conn };
    store.init_schema()?;
    Ok(store)
  }

  fn init_schema(&self) -> Result<()> {
    self.conn.execute_batch(SCHEMA)?;
    Ok(())
  }

  /// Insert `dataset` into the eleven tables, parents before children, inside
  /// a single transaction. Rows whose primary key or unique column already
  /// exists are skipped silently; the dataset is verified up front, so a
  /// malformed literal aborts before anything is written.
  pub fn seed(&mut self, dataset: &Dataset) -> Result<SeedReport> {
    dataset.verify()?;

    let tx = self.conn.transaction()?;
    let mut report = SeedReport::default();

    let n = insert_customers(&tx, &dataset.customers)?;
    record(&tx, &mut report, "customers", TableGroup::Core, n)?;

    let n = insert_categories(&tx, &dataset.categories)?;
    record(&tx, &mut report, "categories", TableGroup::Extended, n)?;

    let n = insert_suppliers(&tx, &dataset.suppliers)?;
    record(&tx, &mut report, "suppliers", TableGroup::Extended, n)?;

    let n = insert_products(&tx, &dataset.products)?;
    record(&tx, &mut report, "products", TableGroup::Core, n)?;

    let n = insert_orders(&tx, &dataset.orders)?;
    record(&tx, &mut report, "orders", TableGroup::Core, n)?;

    let n = insert_order_items(&tx, &dataset.order_items)?;
    record(&tx, &mut report, "order_items", TableGroup::Core, n)?;

    let n = insert_reviews(&tx, &dataset.reviews)?;
    record(&tx, &mut report, "reviews", TableGroup::Extended, n)?;

    let n = insert_shipping_addresses(&tx, &dataset.shipping_addresses)?;
    record(&tx, &mut report, "shipping_addresses", TableGroup::Extended, n)?;

    let n = insert_payments(&tx, &dataset.payments)?;
    record(&tx, &mut report, "payments", TableGroup::Business, n)?;

    let n = insert_inventory(&tx, &dataset.inventory)?;
    record(&tx, &mut report, "inventory", TableGroup::Business, n)?;

    let n = insert_discounts(&tx, &dataset.discounts)?;
    record(&tx, &mut report, "discounts", TableGroup::Business, n)?;

    tx.commit()?;
    Ok(report)
  }
}

/// Append one table's outcome to the report, reading the post-insert count.
fn record(
  tx: &Transaction<'_>,
  report: &mut SeedReport,
  name: &'static str,
  group: TableGroup,
  inserted: usize,
) -> Result<()> {
  // Table names come from the fixed call sites above, never from input.
  let rows: i64 =
    tx.query_row(&format!("SELECT COUNT(*) FROM {name}"), [], |r| r.get(0))?;
  report.push(name, group, inserted, rows as usize);
  Ok(())
}

// ─── Table inserts ───────────────────────────────────────────────────────────

fn insert_customers(tx: &Transaction<'_>, rows: &[Customer]) -> Result<usize> {
  let mut stmt = tx.prepare(
    "INSERT OR IGNORE INTO customers (
       customer_id, first_name, last_name, email, city, country, created_date
     ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
  )?;

  let mut inserted = 0;
  for c in rows {
    inserted += stmt.execute(params![
      c.customer_id,
      c.first_name,
      c.last_name,
      c.email,
      c.city,
      c.country,
      encode_date(c.created_date),
    ])?;
  }
  Ok(inserted)
}

fn insert_categories(tx: &Transaction<'_>, rows: &[Category]) -> Result<usize> {
  let mut stmt = tx.prepare(
    "INSERT OR IGNORE INTO categories (
       category_id, category_name, description, parent_category_id
     ) VALUES (?1, ?2, ?3, ?4)",
  )?;

  let mut inserted = 0;
  for c in rows {
    inserted += stmt.execute(params![
      c.category_id,
      c.category_name,
      c.description,
      c.parent_category_id,
    ])?;
  }
  Ok(inserted)
}

fn insert_suppliers(tx: &Transaction<'_>, rows: &[Supplier]) -> Result<usize> {
  let mut stmt = tx.prepare(
    "INSERT OR IGNORE INTO suppliers (
       supplier_id, supplier_name, contact_person, email, phone, address,
       city, country
     ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
  )?;

  let mut inserted = 0;
  for s in rows {
    inserted += stmt.execute(params![
      s.supplier_id,
      s.supplier_name,
      s.contact_person,
      s.email,
      s.phone,
      s.address,
      s.city,
      s.country,
    ])?;
  }
  Ok(inserted)
}

fn insert_products(tx: &Transaction<'_>, rows: &[Product]) -> Result<usize> {
  let mut stmt = tx.prepare(
    "INSERT OR IGNORE INTO products (
       product_id, product_name, category, price, cost, stock_quantity,
       supplier_id
     ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
  )?;

  let mut inserted = 0;
  for p in rows {
    inserted += stmt.execute(params![
      p.product_id,
      p.product_name,
      p.category,
      p.price,
      p.cost,
      p.stock_quantity,
      p.supplier_id,
    ])?;
  }
  Ok(inserted)
}

fn insert_orders(tx: &Transaction<'_>, rows: &[Order]) -> Result<usize> {
  let mut stmt = tx.prepare(
    "INSERT OR IGNORE INTO orders (
       order_id, customer_id, order_date, total_amount, status
     ) VALUES (?1, ?2, ?3, ?4, ?5)",
  )?;

  let mut inserted = 0;
  for o in rows {
    inserted += stmt.execute(params![
      o.order_id,
      o.customer_id,
      encode_date(o.order_date),
      o.total_amount,
      o.status.as_str(),
    ])?;
  }
  Ok(inserted)
}

fn insert_order_items(
  tx: &Transaction<'_>,
  rows: &[OrderItem],
) -> Result<usize> {
  let mut stmt = tx.prepare(
    "INSERT OR IGNORE INTO order_items (
       order_item_id, order_id, product_id, quantity, unit_price
     ) VALUES (?1, ?2, ?3, ?4, ?5)",
  )?;

  let mut inserted = 0;
  for item in rows {
    inserted += stmt.execute(params![
      item.order_item_id,
      item.order_id,
      item.product_id,
      item.quantity,
      item.unit_price,
    ])?;
  }
  Ok(inserted)
}

fn insert_reviews(tx: &Transaction<'_>, rows: &[Review]) -> Result<usize> {
  let mut stmt = tx.prepare(
    "INSERT OR IGNORE INTO reviews (
       review_id, product_id, customer_id, rating, review_text, review_date
     ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
  )?;

  let mut inserted = 0;
  for r in rows {
    inserted += stmt.execute(params![
      r.review_id,
      r.product_id,
      r.customer_id,
      r.rating,
      r.review_text,
      encode_date(r.review_date),
    ])?;
  }
  Ok(inserted)
}

fn insert_shipping_addresses(
  tx: &Transaction<'_>,
  rows: &[ShippingAddress],
) -> Result<usize> {
  let mut stmt = tx.prepare(
    "INSERT OR IGNORE INTO shipping_addresses (
       address_id, customer_id, address_line1, address_line2, city, state,
       postal_code, country, is_default
     ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
  )?;

  let mut inserted = 0;
  for a in rows {
    inserted += stmt.execute(params![
      a.address_id,
      a.customer_id,
      a.address_line1,
      a.address_line2,
      a.city,
      a.state,
      a.postal_code,
      a.country,
      a.is_default,
    ])?;
  }
  Ok(inserted)
}

fn insert_payments(tx: &Transaction<'_>, rows: &[Payment]) -> Result<usize> {
  let mut stmt = tx.prepare(
    "INSERT OR IGNORE INTO payments (
       payment_id, order_id, payment_method, amount, payment_date, status,
       transaction_id
     ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
  )?;

  let mut inserted = 0;
  for p in rows {
    inserted += stmt.execute(params![
      p.payment_id,
      p.order_id,
      p.payment_method.as_str(),
      p.amount,
      encode_datetime(p.payment_date),
      p.status.as_str(),
      p.transaction_id,
    ])?;
  }
  Ok(inserted)
}

fn insert_inventory(tx: &Transaction<'_>, rows: &[Inventory]) -> Result<usize> {
  let mut stmt = tx.prepare(
    "INSERT OR IGNORE INTO inventory (
       inventory_id, product_id, warehouse_location, quantity_available,
       quantity_reserved, reorder_level, last_updated
     ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
  )?;

  let mut inserted = 0;
  for inv in rows {
    inserted += stmt.execute(params![
      inv.inventory_id,
      inv.product_id,
      inv.warehouse_location,
      inv.quantity_available,
      inv.quantity_reserved,
      inv.reorder_level,
      encode_datetime(inv.last_updated),
    ])?;
  }
  Ok(inserted)
}

fn insert_discounts(tx: &Transaction<'_>, rows: &[Discount]) -> Result<usize> {
  let mut stmt = tx.prepare(
    "INSERT OR IGNORE INTO discounts (
       discount_id, discount_code, discount_type, discount_value,
       minimum_order_amount, start_date, end_date, is_active, usage_limit,
       usage_count
     ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
  )?;

  let mut inserted = 0;
  for d in rows {
    inserted += stmt.execute(params![
      d.discount_id,
      d.discount_code,
      d.discount_type.as_str(),
      d.discount_value,
      d.minimum_order_amount,
      encode_date(d.start_date),
      encode_date(d.end_date),
      d.is_active,
      d.usage_limit,
      d.usage_count,
    ])?;
  }
  Ok(inserted)
}
