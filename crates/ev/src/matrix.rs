//! Widening paired quotes into the cross-book matrix.
//!
//! Each matrix row is one market instance (plus both bet descriptions)
//! with every book's odds keyed by (side, book). Only fully two-sided
//! pairs contribute: a one-sided spread pair has no opposite price to
//! compare, so it exists in the paired table for visibility but not here.

use std::collections::HashMap;

use tracing::debug;

use fairline_core::{Side, Sportsbook};

use crate::types::{CrossBookRow, MarketKey, PairedQuote};

/// Row identity inside the matrix: market instance plus both descriptions.
#[derive(PartialEq, Eq, Hash)]
struct RowKey {
    key: MarketKey,
    bet_name_a: String,
    bet_name_b: String,
}

#[derive(Default)]
struct OddsAccumulator {
    entries: HashMap<(Side, Sportsbook), (i64, u32)>,
}

impl OddsAccumulator {
    fn add(&mut self, side: Side, book: Sportsbook, odds: i32) {
        let entry = self.entries.entry((side, book)).or_insert((0, 0));
        entry.0 += i64::from(odds);
        entry.1 += 1;
    }

    /// Collapses duplicate quotes for the same (side, book) to their mean.
    fn finish(self) -> HashMap<(Side, Sportsbook), i32> {
        self.entries
            .into_iter()
            .map(|(key, (sum, count))| {
                let mean = (sum as f64 / f64::from(count)).round() as i32;
                (key, mean)
            })
            .collect()
    }
}

/// Builds the cross-book matrix from the combined paired table.
///
/// Output row order follows first appearance in the input, so downstream
/// stable sorts keep the original row order on ties.
#[must_use]
pub fn build_matrix(pairs: &[PairedQuote]) -> Vec<CrossBookRow> {
    let mut order: Vec<RowKey> = Vec::new();
    let mut accumulators: HashMap<usize, OddsAccumulator> = HashMap::new();
    let mut index: HashMap<RowKey, usize> = HashMap::new();

    let mut one_sided = 0usize;
    for pair in pairs {
        let (Some(side_a), Some(side_b)) = (&pair.side_a, &pair.side_b) else {
            one_sided += 1;
            continue;
        };

        let row_key = RowKey {
            key: pair.key.clone(),
            bet_name_a: side_a.bet_name.clone(),
            bet_name_b: side_b.bet_name.clone(),
        };

        let slot = match index.get(&row_key) {
            Some(&slot) => slot,
            None => {
                let slot = order.len();
                order.push(RowKey {
                    key: pair.key.clone(),
                    bet_name_a: side_a.bet_name.clone(),
                    bet_name_b: side_b.bet_name.clone(),
                });
                index.insert(row_key, slot);
                slot
            }
        };

        let acc = accumulators.entry(slot).or_default();
        acc.add(Side::A, pair.sportsbook.clone(), side_a.odds);
        acc.add(Side::B, pair.sportsbook.clone(), side_b.odds);
    }

    if one_sided > 0 {
        debug!(skipped = one_sided, "one-sided pairs left out of matrix");
    }

    order
        .into_iter()
        .enumerate()
        .map(|(slot, row_key)| CrossBookRow {
            key: row_key.key,
            bet_name_a: row_key.bet_name_a,
            bet_name_b: row_key.bet_name_b,
            odds: accumulators
                .remove(&slot)
                .map(OddsAccumulator::finish)
                .unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::QuoteSide;
    use rust_decimal_macros::dec;

    fn total_pair(book: &str, over_odds: i32, under_odds: i32) -> PairedQuote {
        PairedQuote {
            key: MarketKey {
                game_id: "g1".to_string(),
                game_name: "Stars vs Blues".to_string(),
                market_name: "Total".to_string(),
                line: Some(dec!(5.5)),
                player: None,
            },
            sportsbook: Sportsbook::from(book),
            side_a: Some(QuoteSide {
                bet_name: "Over 5.5".to_string(),
                odds: over_odds,
            }),
            side_b: Some(QuoteSide {
                bet_name: "Under 5.5".to_string(),
                odds: under_odds,
            }),
        }
    }

    #[test]
    fn test_widens_across_books() {
        let pairs = vec![
            total_pair("Pinnacle", -110, -110),
            total_pair("DraftKings", 100, -120),
        ];

        let matrix = build_matrix(&pairs);
        assert_eq!(matrix.len(), 1);

        let row = &matrix[0];
        assert_eq!(row.odds_for(Side::A, &Sportsbook::from("Pinnacle")), Some(-110));
        assert_eq!(row.odds_for(Side::A, &Sportsbook::from("DraftKings")), Some(100));
        assert_eq!(row.odds_for(Side::B, &Sportsbook::from("DraftKings")), Some(-120));
    }

    #[test]
    fn test_one_sided_pairs_excluded() {
        let mut one_sided = total_pair("Pinnacle", -110, -110);
        one_sided.side_b = None;

        let matrix = build_matrix(&[one_sided]);
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_duplicate_quotes_averaged() {
        let pairs = vec![
            total_pair("Pinnacle", -110, -110),
            total_pair("Pinnacle", -114, -106),
        ];

        let matrix = build_matrix(&pairs);
        assert_eq!(matrix.len(), 1);
        assert_eq!(
            matrix[0].odds_for(Side::A, &Sportsbook::from("Pinnacle")),
            Some(-112)
        );
        assert_eq!(
            matrix[0].odds_for(Side::B, &Sportsbook::from("Pinnacle")),
            Some(-108)
        );
    }

    #[test]
    fn test_distinct_lines_stay_distinct_rows() {
        let mut other_line = total_pair("Pinnacle", -105, -115);
        other_line.key.line = Some(dec!(6.5));
        other_line.side_a.as_mut().unwrap().bet_name = "Over 6.5".to_string();
        other_line.side_b.as_mut().unwrap().bet_name = "Under 6.5".to_string();

        let matrix = build_matrix(&[total_pair("Pinnacle", -110, -110), other_line]);
        assert_eq!(matrix.len(), 2);
        // Input order preserved.
        assert_eq!(matrix[0].bet_name_a, "Over 5.5");
        assert_eq!(matrix[1].bet_name_a, "Over 6.5");
    }
}
