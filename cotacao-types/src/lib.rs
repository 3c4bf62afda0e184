//! # Cotação Types
//!
//! Domain types and port traits for the quote service.
//! This crate has ZERO external IO dependencies - only data structures
//! and trait definitions.
//!
//! ## Architecture
//!
//! This crate is the innermost core of the hexagonal layout:
//! - `domain/` - the `Quote` value itself
//! - `ports/` - trait definitions that adapters must implement
//! - `error/` - per-layer error types

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::Quote;
pub use error::{AppError, FetchError, StoreError};
pub use ports::{QuoteSource, QuoteStore};
