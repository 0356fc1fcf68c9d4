//! Discount codes and their validity windows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether a discount takes a percentage off or a fixed amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
  Percentage,
  Fixed,
}

impl DiscountKind {
  /// The text stored in the `discount_type` column.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Percentage => "percentage",
      Self::Fixed => "fixed",
    }
  }
}

/// A discount code. `discount_code` is unique; `usage_limit` of `None` means
/// unlimited redemptions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Discount {
  pub discount_id:          i64,
  pub discount_code:        String,
  pub discount_type:        DiscountKind,
  pub discount_value:       f64,
  pub minimum_order_amount: f64,
  pub start_date:           NaiveDate,
  pub end_date:             NaiveDate,
  pub is_active:            bool,
  pub usage_limit:          Option<i64>,
  pub usage_count:          i64,
}

impl Discount {
  #[allow(clippy::too_many_arguments)]
  pub fn new(
    discount_id: i64,
    discount_code: &str,
    discount_type: DiscountKind,
    discount_value: f64,
    minimum_order_amount: f64,
    start_date: NaiveDate,
    end_date: NaiveDate,
    is_active: bool,
    usage_limit: Option<i64>,
    usage_count: i64,
  ) -> Self {
    Self {
      discount_id,
      discount_code: discount_code.to_owned(),
      discount_type,
      discount_value,
      minimum_order_amount,
      start_date,
      end_date,
      is_active,
      usage_limit,
      usage_count,
    }
  }
}
