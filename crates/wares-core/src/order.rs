//! Order records — orders, their line items, and the payments against them.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ─── Orders ──────────────────────────────────────────────────────────────────

/// Fulfilment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
  Pending,
  Shipped,
  Completed,
}

impl OrderStatus {
  /// The text stored in the `status` column.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Pending => "Pending",
      Self::Shipped => "Shipped",
      Self::Completed => "Completed",
    }
  }
}

/// A customer order. `total_amount` is the sum the customer was charged, not
/// derived from the line items at seed time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
  pub order_id:     i64,
  pub customer_id:  i64,
  pub order_date:   NaiveDate,
  pub total_amount: f64,
  pub status:       OrderStatus,
}

impl Order {
  pub fn new(
    order_id: i64,
    customer_id: i64,
    order_date: NaiveDate,
    total_amount: f64,
    status: OrderStatus,
  ) -> Self {
    Self { order_id, customer_id, order_date, total_amount, status }
  }
}

/// One product line within an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
  pub order_item_id: i64,
  pub order_id:      i64,
  pub product_id:    i64,
  pub quantity:      i64,
  pub unit_price:    f64,
}

impl OrderItem {
  pub fn new(
    order_item_id: i64,
    order_id: i64,
    product_id: i64,
    quantity: i64,
    unit_price: f64,
  ) -> Self {
    Self { order_item_id, order_id, product_id, quantity, unit_price }
  }
}

// ─── Payments ────────────────────────────────────────────────────────────────

/// How an order was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
  CreditCard,
  DebitCard,
  PayPal,
}

impl PaymentMethod {
  /// The text stored in the `payment_method` column.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::CreditCard => "Credit Card",
      Self::DebitCard => "Debit Card",
      Self::PayPal => "PayPal",
    }
  }
}

/// Settlement state of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
  Pending,
  Completed,
}

impl PaymentStatus {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Pending => "Pending",
      Self::Completed => "Completed",
    }
  }
}

/// A payment recorded against an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
  pub payment_id:     i64,
  pub order_id:       i64,
  pub payment_method: PaymentMethod,
  pub amount:         f64,
  pub payment_date:   NaiveDateTime,
  pub status:         PaymentStatus,
  pub transaction_id: String,
}

impl Payment {
  pub fn new(
    payment_id: i64,
    order_id: i64,
    payment_method: PaymentMethod,
    amount: f64,
    payment_date: NaiveDateTime,
    status: PaymentStatus,
    transaction_id: &str,
  ) -> Self {
    Self {
      payment_id,
      order_id,
      payment_method,
      amount,
      payment_date,
      status,
      transaction_id: transaction_id.to_owned(),
    }
  }
}
