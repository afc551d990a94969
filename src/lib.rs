//! Numeral conversion service.
//!
//! Converts integers between decimal, binary and hexadecimal textual
//! representations over plain HTTP:
//!
//! ```text
//! GET /convert/1010/bin/dec  -> 200 "10"
//! GET /convert/1010/oct/dec  -> 400 "Invalid input format: oct"
//! GET /health                -> 200 "OK"
//! GET /anything-else         -> 200 usage guide
//! ```
//!
//! # Modules
//!
//! - [`converter`]: Radix parsing and rendering
//! - [`error`]: Unified error types
//! - [`api`]: HTTP routes and handlers
//! - [`config`]: Configuration loading from environment
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod converter;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use converter::{convert, Radix};
pub use error::{ConvertError, Result, ServiceError};
