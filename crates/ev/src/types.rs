//! Shared types for market pairing and EV detection.
//!
//! This module defines the data structures that flow through the scan
//! pipeline: paired two-sided quotes, the cross-book matrix, and the
//! per-side EV records handed to the formatter.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fairline_core::{Side, Sportsbook};

// =============================================================================
// Market Key
// =============================================================================

/// Composite identity of one market instance.
///
/// For spreads `line` holds the absolute line magnitude, so both the +1.5
/// and -1.5 rows of the same wager share a key. For props `player` is part
/// of the identity since multiple players can share a line value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarketKey {
    pub game_id: String,
    pub game_name: String,
    pub market_name: String,
    pub line: Option<Decimal>,
    pub player: Option<String>,
}

// =============================================================================
// Paired Quote
// =============================================================================

/// One side of a paired wager: the bet text and its price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteSide {
    pub bet_name: String,
    /// American odds, signed.
    pub odds: i32,
}

/// A Side-A and Side-B quote joined on {market instance, sportsbook}.
///
/// Totals and props are always two-sided here (inner join); spreads may be
/// one-sided because legitimately one-sided markets surface from the outer
/// join with the opposite side missing rather than vanishing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairedQuote {
    pub key: MarketKey,
    pub sportsbook: Sportsbook,
    pub side_a: Option<QuoteSide>,
    pub side_b: Option<QuoteSide>,
}

impl PairedQuote {
    /// Returns true if both sides of the wager are quoted.
    #[must_use]
    pub fn is_two_sided(&self) -> bool {
        self.side_a.is_some() && self.side_b.is_some()
    }
}

// =============================================================================
// Cross-Book Matrix
// =============================================================================

/// A paired wager widened across every sportsbook quoting it.
///
/// Odds live in an explicit (side, book) keyed map; lookups are typed key
/// accesses, never string-built column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossBookRow {
    pub key: MarketKey,
    pub bet_name_a: String,
    pub bet_name_b: String,
    pub odds: HashMap<(Side, Sportsbook), i32>,
}

impl CrossBookRow {
    /// Looks up one book's odds for one side.
    #[must_use]
    pub fn odds_for(&self, side: Side, book: &Sportsbook) -> Option<i32> {
        self.odds.get(&(side, book.clone())).copied()
    }

    /// Returns true if `book` quotes both sides of this row.
    #[must_use]
    pub fn has_both_sides(&self, book: &Sportsbook) -> bool {
        self.odds_for(Side::A, book).is_some() && self.odds_for(Side::B, book).is_some()
    }

    /// Books appearing in this row, sorted by name.
    #[must_use]
    pub fn books(&self) -> Vec<&Sportsbook> {
        let mut books: Vec<&Sportsbook> = self.odds.keys().map(|(_, book)| book).collect();
        books.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        books.dedup();
        books
    }

    /// Bet description for the given side.
    #[must_use]
    pub fn bet_name(&self, side: Side) -> &str {
        match side {
            Side::A => &self.bet_name_a,
            Side::B => &self.bet_name_b,
        }
    }
}

// =============================================================================
// EV Record
// =============================================================================

/// One qualifying side of one cross-book row.
///
/// Computed once per scan and not persisted beyond the response (the audit
/// CSV aside).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvRecord {
    pub game_name: String,
    /// Description of the winning bet, e.g. "Over 5.5".
    pub bet_name: String,
    pub market_name: String,
    /// The target book's price for this side.
    pub target_odds: i32,
    /// The reference book's price for this side.
    pub reference_odds: i32,
    /// Odds from the configured comparison books, in configured order.
    /// `None` when a book does not quote this row.
    pub comparison_odds: Vec<(Sportsbook, Option<i32>)>,
    /// Vig-free probability from the reference book.
    pub fair_probability: f64,
    /// The target book's implied probability.
    pub implied_probability: f64,
    /// Edge in percentage points: `(fair - implied) * 100`.
    pub ev: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_key() -> MarketKey {
        MarketKey {
            game_id: "g1".to_string(),
            game_name: "Stars vs Blues".to_string(),
            market_name: "Total".to_string(),
            line: Some(dec!(5.5)),
            player: None,
        }
    }

    #[test]
    fn test_paired_quote_two_sided() {
        let pair = PairedQuote {
            key: sample_key(),
            sportsbook: Sportsbook::from("Pinnacle"),
            side_a: Some(QuoteSide {
                bet_name: "Over 5.5".to_string(),
                odds: -110,
            }),
            side_b: Some(QuoteSide {
                bet_name: "Under 5.5".to_string(),
                odds: -110,
            }),
        };
        assert!(pair.is_two_sided());

        let one_sided = PairedQuote {
            side_b: None,
            ..pair
        };
        assert!(!one_sided.is_two_sided());
    }

    #[test]
    fn test_cross_book_row_lookups() {
        let pinnacle = Sportsbook::from("Pinnacle");
        let draftkings = Sportsbook::from("DraftKings");

        let mut odds = HashMap::new();
        odds.insert((Side::A, pinnacle.clone()), -110);
        odds.insert((Side::B, pinnacle.clone()), -110);
        odds.insert((Side::A, draftkings.clone()), 100);

        let row = CrossBookRow {
            key: sample_key(),
            bet_name_a: "Over 5.5".to_string(),
            bet_name_b: "Under 5.5".to_string(),
            odds,
        };

        assert_eq!(row.odds_for(Side::A, &pinnacle), Some(-110));
        assert_eq!(row.odds_for(Side::B, &draftkings), None);
        assert!(row.has_both_sides(&pinnacle));
        assert!(!row.has_both_sides(&draftkings));
        assert_eq!(row.bet_name(Side::A), "Over 5.5");
        assert_eq!(row.bet_name(Side::B), "Under 5.5");

        let books = row.books();
        assert_eq!(books, vec![&draftkings, &pinnacle]);
    }

    #[test]
    fn test_market_key_hash_distinguishes_player() {
        use std::collections::HashSet;

        let base = MarketKey {
            game_id: "g1".to_string(),
            game_name: "Stars vs Blues".to_string(),
            market_name: "Player Shots".to_string(),
            line: Some(dec!(2.5)),
            player: Some("J. Robertson".to_string()),
        };
        let other_player = MarketKey {
            player: Some("R. Hintz".to_string()),
            ..base.clone()
        };

        let mut set = HashSet::new();
        set.insert(base);
        set.insert(other_player);
        assert_eq!(set.len(), 2);
    }
}
