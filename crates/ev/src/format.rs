//! Rendering EV records into recommendation text.
//!
//! Pure presentation: one fixed-template block per record, blank lines
//! between blocks, order preserved from the evaluator's sort. An empty
//! record set renders as a distinguished no-opportunities message so a
//! caller can tell "ran fine, nothing found" from a failure.

use fairline_core::Sportsbook;

use crate::types::EvRecord;

/// Rendered when a scan completes without finding any edge.
pub const NO_OPPORTUNITIES_MESSAGE: &str = "No positive EV bets found.";

/// Placeholder for a comparison book that does not quote a row.
const MISSING_ODDS: &str = "-";

/// Outcome of a completed scan.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanReport {
    /// At least one positive-EV side, sorted best first.
    Opportunities(Vec<EvRecord>),
    /// The scan ran to completion and found nothing.
    NoOpportunities,
}

impl ScanReport {
    #[must_use]
    pub fn from_records(records: Vec<EvRecord>) -> Self {
        if records.is_empty() {
            Self::NoOpportunities
        } else {
            Self::Opportunities(records)
        }
    }

    /// Number of records carried.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Opportunities(records) => records.len(),
            Self::NoOpportunities => 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoOpportunities)
    }

    /// Renders the report for the chat-facing caller.
    #[must_use]
    pub fn render(&self, target: &Sportsbook, reference: &Sportsbook) -> String {
        match self {
            Self::NoOpportunities => NO_OPPORTUNITIES_MESSAGE.to_string(),
            Self::Opportunities(records) => {
                let blocks: Vec<String> = records
                    .iter()
                    .map(|record| format_record(record, target, reference))
                    .collect();
                blocks.join("\n\n")
            }
        }
    }
}

fn format_record(record: &EvRecord, target: &Sportsbook, reference: &Sportsbook) -> String {
    let mut lines = vec![
        record.game_name.clone(),
        record.bet_name.clone(),
        record.market_name.clone(),
        format!("{} Odds: {}", target, record.target_odds),
        format!("{} Odds: {}", reference, record.reference_odds),
    ];
    for (book, odds) in &record.comparison_odds {
        match odds {
            Some(value) => lines.push(format!("{book} Odds: {value}")),
            None => lines.push(format!("{book} Odds: {MISSING_ODDS}")),
        }
    }
    lines.push(format!("EV: {:.2}%", record.ev));
    lines.join("\n")
}
