//! Minimal async client for the FRED (Federal Reserve Economic Data) API.
//!
//! Only the `fred/series/observations` endpoint is covered: it returns the
//! dated values of a single economic time series.

mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, DEFAULT_BASE_URL};
pub use self::errors::Error;
pub use self::query::{ObservationQuery, Query, SortOrder};
