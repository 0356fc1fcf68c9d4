//! Product reviews left by customers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive rating bounds; the schema repeats these as a CHECK constraint.
pub const RATING_MIN: i64 = 1;
pub const RATING_MAX: i64 = 5;

/// A star rating with free-text commentary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
  pub review_id:   i64,
  pub product_id:  i64,
  pub customer_id: i64,
  pub rating:      i64,
  pub review_text: String,
  pub review_date: NaiveDate,
}

impl Review {
  pub fn new(
    review_id: i64,
    product_id: i64,
    customer_id: i64,
    rating: i64,
    review_text: &str,
    review_date: NaiveDate,
  ) -> Self {
    Self {
      review_id,
      product_id,
      customer_id,
      rating,
      review_text: review_text.to_owned(),
      review_date,
    }
  }
}
