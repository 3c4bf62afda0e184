//! # Cotação Hex
//!
//! Application service layer and HTTP adapter for the quote service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (the fetch → persist pipeline and its
//!   per-hop time budgets)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `S: QuoteSource` and `P: QuoteStore`,
//! allowing different adapters to be injected.

pub mod inbound;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::{Budgets, QuoteService};
