//! Encoding helpers between chrono types and the plain-text representations
//! stored in SQLite columns.
//!
//! Dates are stored as `YYYY-MM-DD`, timestamps as `YYYY-MM-DD HH:MM:SS`.

use chrono::{NaiveDate, NaiveDateTime};

pub fn encode_date(d: NaiveDate) -> String { d.format("%Y-%m-%d").to_string() }

pub fn encode_datetime(dt: NaiveDateTime) -> String {
  dt.format("%Y-%m-%d %H:%M:%S").to_string()
}
