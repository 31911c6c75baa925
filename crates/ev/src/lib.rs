//! Market pairing and positive-EV detection.
//!
//! This crate is the computational core of fairline: it pairs opposing
//! sides of two-outcome wagers, removes the bookmaker margin from a sharp
//! reference book, and flags target-book prices whose implied probability
//! sits below the fair probability.
//!
//! # Overview
//!
//! ```text
//! Pinnacle:   Over 5.5 @ -120,  Under 5.5 @ +100
//!             implied:  0.5455           0.5000   (sums to 1.0455, the vig)
//!             fair:     0.5217           0.4783   (normalized to 1.0)
//!
//! DraftKings: Over 5.5 @ +100 -> implied 0.5000
//!
//! Edge on the Over: (0.5217 - 0.5000) * 100 = +2.17 points
//! ```
//!
//! # Modules
//!
//! - [`types`]: paired quotes, the cross-book matrix, EV records
//! - [`normalize`]: team-label extraction from bet descriptions
//! - [`pairer`]: per-family hash-joins (spreads outer, totals/props inner)
//! - [`prob`]: American-odds probability math and two-way de-vig
//! - [`matrix`]: widening pairs across sportsbooks
//! - [`evaluator`]: the EV filter itself
//! - [`format`]: recommendation text rendering
//! - [`pipeline`]: the staged fetch-pair-pivot-filter-format scan
//! - [`audit`]: the table-shaped audit sink boundary
//! - [`error`]: per-stage error kinds

pub mod audit;
pub mod error;
pub mod evaluator;
pub mod format;
pub mod matrix;
pub mod normalize;
pub mod pairer;
pub mod pipeline;
pub mod prob;
pub mod types;

// Re-export main types for convenience
pub use audit::{AuditSink, NullAuditSink};
pub use error::{Result, ScanError, ScanStage};
pub use evaluator::EvEvaluator;
pub use format::{ScanReport, NO_OPPORTUNITIES_MESSAGE};
pub use matrix::build_matrix;
pub use normalize::extract_team_name;
pub use pairer::{combine_pairs, pair_player_props, pair_spreads, pair_totals};
pub use pipeline::{run_scan, ScanRequest};
pub use prob::{implied_probability, no_vig_pair};
pub use types::{CrossBookRow, EvRecord, MarketKey, PairedQuote, QuoteSide};
