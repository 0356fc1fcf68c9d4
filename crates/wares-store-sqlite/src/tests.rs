//! Integration tests for `SqliteStore` against in-memory and on-disk files.

use wares_core::Dataset;

use crate::{Error, SeedReport, SqliteStore, TableGroup};

fn seeded() -> (SqliteStore, SeedReport) {
  let mut store = SqliteStore::open_in_memory().expect("in-memory store");
  let report = store.seed(&Dataset::builtin()).expect("seed");
  (store, report)
}

const EXPECTED_ROWS: &[(&str, usize)] = &[
  ("customers", 5),
  ("categories", 9),
  ("suppliers", 5),
  ("products", 7),
  ("orders", 6),
  ("order_items", 11),
  ("reviews", 9),
  ("shipping_addresses", 6),
  ("payments", 6),
  ("inventory", 7),
  ("discounts", 5),
];

// ─── Seeding ─────────────────────────────────────────────────────────────────

#[test]
fn seed_populates_all_eleven_tables() {
  let (_store, report) = seeded();

  assert_eq!(report.table_count(), 11);
  for (name, rows) in EXPECTED_ROWS {
    let table = report
      .tables()
      .iter()
      .find(|t| t.name == *name)
      .unwrap_or_else(|| panic!("missing table {name}"));
    assert_eq!(table.rows, *rows, "{name} rows");
    assert_eq!(table.inserted, *rows, "{name} inserted");
  }
  assert_eq!(report.total_rows(), 76);
}

#[test]
fn reseeding_changes_nothing() {
  let (mut store, _) = seeded();

  let second = store.seed(&Dataset::builtin()).expect("second seed");
  assert_eq!(second.total_inserted(), 0);
  assert_eq!(second.total_rows(), 76);
}

#[test]
fn report_groups_core_extended_business() {
  let (_store, report) = seeded();

  assert_eq!(
    report.group_members(TableGroup::Core),
    ["customers", "products", "orders", "order_items"]
  );
  assert_eq!(
    report.group_members(TableGroup::Extended),
    ["categories", "suppliers", "reviews", "shipping_addresses"]
  );
  assert_eq!(
    report.group_members(TableGroup::Business),
    ["payments", "inventory", "discounts"]
  );
}

#[test]
fn report_display_lists_groups_and_totals() {
  let (_store, report) = seeded();

  let text = report.to_string();
  assert!(text.contains("core tables: customers, products, orders, order_items"));
  assert!(text.contains("business tables: payments, inventory, discounts"));
  assert!(text.contains("11 tables, 76 rows (76 inserted this run)"));
}

// ─── Data invariants ─────────────────────────────────────────────────────────

#[test]
fn order_items_reference_existing_rows() {
  let (store, _) = seeded();

  let orphans: i64 = store
    .conn
    .query_row(
      "SELECT COUNT(*) FROM order_items oi
       LEFT JOIN orders o   ON o.order_id   = oi.order_id
       LEFT JOIN products p ON p.product_id = oi.product_id
       WHERE o.order_id IS NULL OR p.product_id IS NULL",
      [],
      |r| r.get(0),
    )
    .unwrap();
  assert_eq!(orphans, 0);
}

#[test]
fn ratings_stay_within_bounds() {
  let (store, _) = seeded();

  let out_of_range: i64 = store
    .conn
    .query_row(
      "SELECT COUNT(*) FROM reviews WHERE rating < 1 OR rating > 5",
      [],
      |r| r.get(0),
    )
    .unwrap();
  assert_eq!(out_of_range, 0);
}

#[test]
fn emails_and_discount_codes_are_unique() {
  let (store, _) = seeded();

  let (emails, distinct_emails): (i64, i64) = store
    .conn
    .query_row(
      "SELECT COUNT(email), COUNT(DISTINCT email) FROM customers",
      [],
      |r| Ok((r.get(0)?, r.get(1)?)),
    )
    .unwrap();
  assert_eq!(emails, distinct_emails);

  let (codes, distinct_codes): (i64, i64) = store
    .conn
    .query_row(
      "SELECT COUNT(discount_code), COUNT(DISTINCT discount_code) FROM discounts",
      [],
      |r| Ok((r.get(0)?, r.get(1)?)),
    )
    .unwrap();
  assert_eq!(codes, distinct_codes);
}

#[test]
fn category_forest_has_the_expected_roots() {
  let (store, _) = seeded();

  let mut stmt = store
    .conn
    .prepare(
      "SELECT category_name FROM categories
       WHERE parent_category_id IS NULL ORDER BY category_id",
    )
    .unwrap();
  let roots: Vec<String> = stmt
    .query_map([], |r| r.get(0))
    .unwrap()
    .collect::<rusqlite::Result<_>>()
    .unwrap();

  assert_eq!(
    roots,
    ["Electronics", "Home & Kitchen", "Sports & Outdoors", "Furniture"]
  );
}

// ─── Constraint behavior ─────────────────────────────────────────────────────

#[test]
fn colliding_unique_values_are_skipped() {
  let (store, _) = seeded();

  // Fresh primary key, email already taken: OR IGNORE drops the row.
  let changed = store
    .conn
    .execute(
      "INSERT OR IGNORE INTO customers
         (customer_id, first_name, last_name, email, city, country, created_date)
       VALUES (6, 'Johnny', 'Doe', 'john.doe@email.com', 'Boston', 'USA', '2023-08-01')",
      [],
    )
    .unwrap();
  assert_eq!(changed, 0);
}

#[test]
fn rating_check_rejects_direct_insert() {
  let (store, _) = seeded();

  let err = store
    .conn
    .execute(
      "INSERT INTO reviews
         (review_id, product_id, customer_id, rating, review_text, review_date)
       VALUES (100, 1, 1, 6, 'six stars', '2023-08-01')",
      [],
    )
    .unwrap_err();
  assert!(err.to_string().contains("CHECK"));
}

#[test]
fn foreign_keys_are_enforced() {
  let (store, _) = seeded();

  let err = store
    .conn
    .execute(
      "INSERT INTO orders (order_id, customer_id, order_date, total_amount, status)
       VALUES (100, 999, '2023-08-01', 10.0, 'Pending')",
      [],
    )
    .unwrap_err();
  assert!(err.to_string().contains("FOREIGN KEY"));
}

#[test]
fn malformed_dataset_leaves_database_untouched() {
  let (mut store, _) = seeded();

  let mut bad = Dataset::builtin();
  bad.reviews[0].rating = 9;
  let err = store.seed(&bad).unwrap_err();
  assert!(matches!(err, Error::Dataset(_)));

  let rows: i64 = store
    .conn
    .query_row("SELECT COUNT(*) FROM reviews", [], |r| r.get(0))
    .unwrap();
  assert_eq!(rows, 9);
}

// ─── On-disk behavior ────────────────────────────────────────────────────────

#[test]
fn open_creates_missing_directories() {
  let dir = tempfile::tempdir().expect("tempdir");
  let path = dir.path().join("nested").join("db").join("sample.db");

  let mut store = SqliteStore::open(&path).expect("open");
  let report = store.seed(&Dataset::builtin()).expect("seed");

  assert!(path.is_file());
  assert_eq!(report.table_count(), 11);
}

#[test]
fn reopening_a_seeded_file_preserves_counts() {
  let dir = tempfile::tempdir().expect("tempdir");
  let path = dir.path().join("sample.db");

  {
    let mut store = SqliteStore::open(&path).expect("first open");
    store.seed(&Dataset::builtin()).expect("first seed");
  }

  let mut store = SqliteStore::open(&path).expect("second open");
  let report = store.seed(&Dataset::builtin()).expect("second seed");
  assert_eq!(report.total_inserted(), 0);
  assert_eq!(report.total_rows(), 76);
}
