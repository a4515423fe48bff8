//! Shared helpers used across the domain crate.

mod datetime;

pub use datetime::{parse_datetime, parse_datetime_or};
