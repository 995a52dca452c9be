//! Conference Feed Library
//!
//! Scrapes a conference's standings and calendar pages and serves them as JSON

pub mod config;
pub mod dates;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod middleware;
pub mod rows;
pub mod scrapers;
pub mod server;
pub mod types;

pub use types::*;
