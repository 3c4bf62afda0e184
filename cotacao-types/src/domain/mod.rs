//! Domain models for the quote service.

pub mod quote;

pub use quote::Quote;
