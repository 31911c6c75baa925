//! REST client for the upstream odds feed.
//!
//! Fetches game-level and player-prop quote rows and converts them into
//! the shared [`fairline_core::QuoteRow`] shape. Requests are rate-limited
//! and the client implements [`fairline_core::OddsSource`] so the scan
//! pipeline can swap in stubs for tests.

pub mod client;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use client::{OddsApiClient, OddsApiConfig, ODDS_API_URL};
pub use error::{OddsApiError, Result};
pub use types::RawQuoteRow;
