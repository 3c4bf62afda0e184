//! # Cotação Repository
//!
//! Concrete persistence adapter for the quote service. This crate provides
//! the SQLite adapter that implements the `QuoteStore` port.

mod sqlite;
mod types;


pub use sqlite::SqliteStore;
pub use types::StoredQuote;
