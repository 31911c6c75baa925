//! Positive-EV detection over the cross-book matrix.
//!
//! The reference (sharp) book is treated as the efficient baseline: its
//! two-sided quote is de-vigged into fair probabilities, and each side of
//! the target book's quote is compared against fair with no de-vig applied
//! to the target. A side qualifies when fair exceeds implied.

use tracing::{debug, info};

use fairline_core::{Side, Sportsbook};

use crate::prob::{implied_probability, no_vig_pair};
use crate::types::{CrossBookRow, EvRecord};

/// Compares a target book against a reference book across matrix rows.
#[derive(Debug, Clone)]
pub struct EvEvaluator {
    target: Sportsbook,
    reference: Sportsbook,
    /// Books surfaced as price context on every record, in order.
    comparison_books: Vec<Sportsbook>,
}

impl EvEvaluator {
    #[must_use]
    pub fn new(target: Sportsbook, reference: Sportsbook) -> Self {
        Self {
            target,
            reference,
            comparison_books: Vec::new(),
        }
    }

    /// Sets the ordered comparison-book list.
    #[must_use]
    pub fn with_comparison_books(mut self, books: Vec<Sportsbook>) -> Self {
        self.comparison_books = books;
        self
    }

    #[must_use]
    pub fn target(&self) -> &Sportsbook {
        &self.target
    }

    #[must_use]
    pub fn reference(&self) -> &Sportsbook {
        &self.reference
    }

    /// Fair and implied probabilities for one side of a row, when the
    /// target quotes it. The row must already carry both reference prices.
    fn side_edge(&self, row: &CrossBookRow, side: Side, fair: f64) -> Option<EvRecord> {
        let target_odds = row.odds_for(side, &self.target)?;
        let implied = implied_probability(target_odds);
        let ev = (fair - implied) * 100.0;
        // Written as a negated positive check so NaN (degenerate 0/0
        // reference quotes de-vig to NaN) fails the filter too.
        if !(ev > 0.0) {
            return None;
        }

        // Reference odds exist: the caller filtered on has_both_sides.
        let reference_odds = row.odds_for(side, &self.reference)?;

        Some(EvRecord {
            game_name: row.key.game_name.clone(),
            bet_name: row.bet_name(side).to_string(),
            market_name: row.key.market_name.clone(),
            target_odds,
            reference_odds,
            comparison_odds: self
                .comparison_books
                .iter()
                .map(|book| (book.clone(), row.odds_for(side, book)))
                .collect(),
            fair_probability: fair,
            implied_probability: implied,
            ev,
        })
    }

    fn row_records(&self, row: &CrossBookRow) -> Vec<EvRecord> {
        if !row.has_both_sides(&self.reference) {
            // De-vig is undefined without both reference prices.
            return Vec::new();
        }
        let ref_a = row.odds_for(Side::A, &self.reference).unwrap_or_default();
        let ref_b = row.odds_for(Side::B, &self.reference).unwrap_or_default();
        let (fair_a, fair_b) = no_vig_pair(ref_a, ref_b);

        let mut records = Vec::new();
        if let Some(record) = self.side_edge(row, Side::A, fair_a) {
            records.push(record);
        }
        if let Some(record) = self.side_edge(row, Side::B, fair_b) {
            records.push(record);
        }
        records
    }

    /// Rows where at least one side qualifies as positive EV.
    ///
    /// This is the row-level subset handed to the audit sink before
    /// formatting.
    #[must_use]
    pub fn positive_rows<'a>(&self, rows: &'a [CrossBookRow]) -> Vec<&'a CrossBookRow> {
        rows.iter()
            .filter(|row| !self.row_records(row).is_empty())
            .collect()
    }

    /// Emits one record per qualifying side, best EV first.
    ///
    /// A single row can yield zero, one, or two records. The sort is
    /// stable, so ties keep the matrix row order.
    #[must_use]
    pub fn evaluate(&self, rows: &[CrossBookRow]) -> Vec<EvRecord> {
        let mut records: Vec<EvRecord> = rows.iter().flat_map(|row| self.row_records(row)).collect();

        records.sort_by(|a, b| {
            b.ev.partial_cmp(&a.ev)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        debug!(
            rows = rows.len(),
            records = records.len(),
            target = %self.target,
            reference = %self.reference,
            "EV evaluation complete"
        );
        if let Some(best) = records.first() {
            info!(bet = %best.bet_name, ev = best.ev, "best edge found");
        }

        records
    }
}
