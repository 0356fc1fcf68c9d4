//! SQL schema for the Wares sample database.
//!
//! Executed on every open. `CREATE TABLE IF NOT EXISTS` keeps re-runs from
//! failing or duplicating schema objects.

/// Full schema DDL, in dependency order — parents before children, so the
/// enabled foreign-key enforcement holds at insert time.
pub const SCHEMA: &str = "
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS customers (
    customer_id  INTEGER PRIMARY KEY,
    first_name   TEXT NOT NULL,
    last_name    TEXT NOT NULL,
    email        TEXT UNIQUE NOT NULL,
    city         TEXT,
    country      TEXT,
    created_date DATE
);

CREATE TABLE IF NOT EXISTS categories (
    category_id        INTEGER PRIMARY KEY,
    category_name      TEXT NOT NULL,
    description        TEXT,
    parent_category_id INTEGER REFERENCES categories(category_id)
);

CREATE TABLE IF NOT EXISTS suppliers (
    supplier_id    INTEGER PRIMARY KEY,
    supplier_name  TEXT NOT NULL,
    contact_person TEXT,
    email          TEXT,
    phone          TEXT,
    address        TEXT,
    city           TEXT,
    country        TEXT
);

-- category holds a display name, not a key into categories.
CREATE TABLE IF NOT EXISTS products (
    product_id     INTEGER PRIMARY KEY,
    product_name   TEXT NOT NULL,
    category       TEXT,
    price          DECIMAL(10,2),
    cost           DECIMAL(10,2),
    stock_quantity INTEGER,
    supplier_id    INTEGER REFERENCES suppliers(supplier_id)
);

CREATE TABLE IF NOT EXISTS orders (
    order_id     INTEGER PRIMARY KEY,
    customer_id  INTEGER REFERENCES customers(customer_id),
    order_date   DATE,
    total_amount DECIMAL(10,2),
    status       TEXT
);

CREATE TABLE IF NOT EXISTS order_items (
    order_item_id INTEGER PRIMARY KEY,
    order_id      INTEGER REFERENCES orders(order_id),
    product_id    INTEGER REFERENCES products(product_id),
    quantity      INTEGER,
    unit_price    DECIMAL(10,2)
);

CREATE TABLE IF NOT EXISTS reviews (
    review_id   INTEGER PRIMARY KEY,
    product_id  INTEGER REFERENCES products(product_id),
    customer_id INTEGER REFERENCES customers(customer_id),
    rating      INTEGER CHECK(rating >= 1 AND rating <= 5),
    review_text TEXT,
    review_date DATE
);

CREATE TABLE IF NOT EXISTS shipping_addresses (
    address_id    INTEGER PRIMARY KEY,
    customer_id   INTEGER REFERENCES customers(customer_id),
    address_line1 TEXT NOT NULL,
    address_line2 TEXT,
    city          TEXT NOT NULL,
    state         TEXT,
    postal_code   TEXT,
    country       TEXT NOT NULL,
    is_default    BOOLEAN DEFAULT 0
);

CREATE TABLE IF NOT EXISTS payments (
    payment_id     INTEGER PRIMARY KEY,
    order_id       INTEGER REFERENCES orders(order_id),
    payment_method TEXT,
    amount         DECIMAL(10,2),
    payment_date   DATETIME,
    status         TEXT,
    transaction_id TEXT
);

CREATE TABLE IF NOT EXISTS inventory (
    inventory_id       INTEGER PRIMARY KEY,
    product_id         INTEGER REFERENCES products(product_id),
    warehouse_location TEXT,
    quantity_available INTEGER,
    quantity_reserved  INTEGER,
    reorder_level      INTEGER,
    last_updated       DATETIME
);

CREATE TABLE IF NOT EXISTS discounts (
    discount_id          INTEGER PRIMARY KEY,
    discount_code        TEXT UNIQUE,
    discount_type        TEXT,    -- 'percentage' | 'fixed'
    discount_value       DECIMAL(10,2),
    minimum_order_amount DECIMAL(10,2),
    start_date           DATE,
    end_date             DATE,
    is_active            BOOLEAN DEFAULT 1,
    usage_limit          INTEGER,
    usage_count          INTEGER DEFAULT 0
);

CREATE INDEX IF NOT EXISTS orders_customer_idx     ON orders(customer_id);
CREATE INDEX IF NOT EXISTS order_items_order_idx   ON order_items(order_id);
CREATE INDEX IF NOT EXISTS order_items_product_idx ON order_items(product_id);
CREATE INDEX IF NOT EXISTS reviews_product_idx     ON reviews(product_id);

PRAGMA user_version = 1;
";
