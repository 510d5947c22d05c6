//! Inflation adjustment engine: date validation, CPI retrieval from FRED,
//! and forward/reverse purchasing-power arithmetic.
//!
//! Wraps the `fred_api` crate with a CPI-specific provider, a pure
//! calculator, and a serverless gateway adapter that maps typed errors to
//! HTTP status codes.

pub mod calculator;
pub mod config;
pub mod engine;
pub mod error;
pub mod gateway;
pub mod provider;
pub mod types;
pub mod validation;

pub use fred_api;

pub use config::Config;
pub use engine::InflationEngine;
pub use error::{ErrorKind, InflationError};
pub use gateway::{GatewayEvent, GatewayResponse};
pub use provider::{CpiProvider, CPI_SERIES_ID};
pub use types::{
    AdjustmentRequest, AdjustmentResult, CpiObservation, CpiSeries, Direction,
    InflationRateResult,
};
