#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod error;
mod helpers;
mod parsed_url;
mod parser;
mod query_store;
mod query_value;
mod url_parser;

// Public API
pub use error::{Result, StoreError};
pub use parsed_url::ParsedUrl;
pub use query_store::QueryStore;
pub use query_value::QueryValue;
pub use url_parser::{UrlParser, parse};
