//! Customer records and the shipping addresses attached to them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A registered customer. `email` is unique across the table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
  pub customer_id:  i64,
  pub first_name:   String,
  pub last_name:    String,
  pub email:        String,
  pub city:         String,
  pub country:      String,
  pub created_date: NaiveDate,
}

impl Customer {
  /// Convenience constructor; keeps dataset literals one row per line.
  pub fn new(
    customer_id: i64,
    first_name: &str,
    last_name: &str,
    email: &str,
    city: &str,
    country: &str,
    created_date: NaiveDate,
  ) -> Self {
    Self {
      customer_id,
      first_name: first_name.to_owned(),
      last_name: last_name.to_owned(),
      email: email.to_owned(),
      city: city.to_owned(),
      country: country.to_owned(),
      created_date,
    }
  }
}

/// A delivery address for a customer. At most one per customer carries the
/// default flag in the bundled dataset, though the schema does not enforce
/// that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingAddress {
  pub address_id:    i64,
  pub customer_id:   i64,
  pub address_line1: String,
  pub address_line2: Option<String>,
  pub city:          String,
  pub state:         Option<String>,
  pub postal_code:   String,
  pub country:       String,
  pub is_default:    bool,
}

impl ShippingAddress {
  #[allow(clippy::too_many_arguments)]
  pub fn new(
    address_id: i64,
    customer_id: i64,
    address_line1: &str,
    address_line2: Option<&str>,
    city: &str,
    state: Option<&str>,
    postal_code: &str,
    country: &str,
    is_default: bool,
  ) -> Self {
    Self {
      address_id,
      customer_id,
      address_line1: address_line1.to_owned(),
      address_line2: address_line2.map(str::to_owned),
      city: city.to_owned(),
      state: state.map(str::to_owned),
      postal_code: postal_code.to_owned(),
      country: country.to_owned(),
      is_default,
    }
  }
}
