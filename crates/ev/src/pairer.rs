//! Pairing raw quote rows into two-sided wagers.
//!
//! Each market family gets its own join rule, implemented as explicit
//! hash-joins over composite keys rather than a data-frame merge. The
//! inner-vs-outer choice per family encodes a real domain rule:
//!
//! - Spreads may legitimately be one-sided, so they use an OUTER join and
//!   unmatched rows surface with the opposite side missing.
//! - Totals and player props are only meaningful two-sided, so they use an
//!   INNER join and unmatched rows are dropped.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use fairline_core::{QuoteRow, Sportsbook};

use crate::normalize::extract_team_name;
use crate::types::{MarketKey, PairedQuote, QuoteSide};

// =============================================================================
// Spreads
// =============================================================================

/// Join key for spread rows: side-agnostic (absolute line), per book.
#[derive(PartialEq, Eq, Hash, Clone)]
struct SpreadKey {
    game_id: String,
    market_name: String,
    abs_line: Decimal,
    sportsbook: Sportsbook,
}

impl SpreadKey {
    fn from_row(row: &QuoteRow) -> Option<Self> {
        // Rows without a numeric line cannot join.
        let line = row.line?;
        Some(Self {
            game_id: row.game_id.clone(),
            market_name: row.market_name.clone(),
            abs_line: line.abs(),
            sportsbook: row.sportsbook.clone(),
        })
    }
}

fn spread_pair(key: &SpreadKey, from_row: &QuoteRow) -> PairedQuote {
    PairedQuote {
        key: MarketKey {
            game_id: key.game_id.clone(),
            game_name: from_row.game_name.clone(),
            market_name: key.market_name.clone(),
            line: Some(key.abs_line),
            player: None,
        },
        sportsbook: key.sportsbook.clone(),
        side_a: None,
        side_b: None,
    }
}

/// Pairs spread / puck-line rows.
///
/// Side A is the positive-line side (description contains `+`), side B the
/// negative-line side. The join is outer on {game, market, |line|, book}.
/// Joined rows where both sides' extracted team labels match are artifacts
/// of the sign-blind join (the same team quoted under both signs) and are
/// dropped.
#[must_use]
pub fn pair_spreads(rows: &[QuoteRow]) -> Vec<PairedQuote> {
    let mut positives: HashMap<SpreadKey, Vec<&QuoteRow>> = HashMap::new();
    let mut negatives: HashMap<SpreadKey, Vec<&QuoteRow>> = HashMap::new();

    for row in rows {
        let Some(key) = SpreadKey::from_row(row) else {
            continue;
        };
        if row.bet_name.contains('+') {
            positives.entry(key.clone()).or_default().push(row);
        }
        if row.bet_name.contains('-') {
            negatives.entry(key).or_default().push(row);
        }
    }

    let mut pairs = Vec::new();
    let mut self_paired = 0usize;

    // Matched and left-only keys.
    for (key, pos_rows) in &positives {
        match negatives.get(key) {
            Some(neg_rows) => {
                for pos in pos_rows {
                    for neg in neg_rows {
                        if extract_team_name(&pos.bet_name) == extract_team_name(&neg.bet_name) {
                            self_paired += 1;
                            continue;
                        }
                        let mut pair = spread_pair(key, pos);
                        pair.side_a = Some(QuoteSide {
                            bet_name: pos.bet_name.clone(),
                            odds: pos.odds,
                        });
                        pair.side_b = Some(QuoteSide {
                            bet_name: neg.bet_name.clone(),
                            odds: neg.odds,
                        });
                        pairs.push(pair);
                    }
                }
            }
            None => {
                for pos in pos_rows {
                    let mut pair = spread_pair(key, pos);
                    pair.side_a = Some(QuoteSide {
                        bet_name: pos.bet_name.clone(),
                        odds: pos.odds,
                    });
                    pairs.push(pair);
                }
            }
        }
    }

    // Right-only keys.
    for (key, neg_rows) in &negatives {
        if positives.contains_key(key) {
            continue;
        }
        for neg in neg_rows {
            let mut pair = spread_pair(key, neg);
            pair.side_b = Some(QuoteSide {
                bet_name: neg.bet_name.clone(),
                odds: neg.odds,
            });
            pairs.push(pair);
        }
    }

    if self_paired > 0 {
        debug!(dropped = self_paired, "dropped self-paired spread rows");
    }

    pairs
}

// =============================================================================
// Totals and player props
// =============================================================================

/// Join key for Over/Under rows. `player` stays `None` for game totals and
/// carries the player identity for props.
#[derive(PartialEq, Eq, Hash, Clone)]
struct OverUnderKey {
    game_id: String,
    game_name: String,
    market_name: String,
    line: Decimal,
    player: Option<String>,
    sportsbook: Sportsbook,
}

impl OverUnderKey {
    fn from_row(row: &QuoteRow, keyed_by_player: bool) -> Option<Self> {
        let line = row.line?;
        if keyed_by_player && row.player.is_none() {
            return None;
        }
        Some(Self {
            game_id: row.game_id.clone(),
            game_name: row.game_name.clone(),
            market_name: row.market_name.clone(),
            line,
            player: if keyed_by_player {
                row.player.clone()
            } else {
                None
            },
            sportsbook: row.sportsbook.clone(),
        })
    }
}

fn pair_over_under(rows: &[QuoteRow], keyed_by_player: bool) -> Vec<PairedQuote> {
    let mut unders: HashMap<OverUnderKey, Vec<&QuoteRow>> = HashMap::new();
    for row in rows {
        if !row.bet_name.contains("Under") {
            continue;
        }
        if let Some(key) = OverUnderKey::from_row(row, keyed_by_player) {
            unders.entry(key).or_default().push(row);
        }
    }

    let mut pairs = Vec::new();
    for row in rows {
        if !row.bet_name.contains("Over") {
            continue;
        }
        let Some(key) = OverUnderKey::from_row(row, keyed_by_player) else {
            continue;
        };
        let Some(matching_unders) = unders.get(&key) else {
            // Inner join: an Over with no matching Under is dropped.
            continue;
        };
        for under in matching_unders {
            pairs.push(PairedQuote {
                key: MarketKey {
                    game_id: key.game_id.clone(),
                    game_name: key.game_name.clone(),
                    market_name: key.market_name.clone(),
                    line: Some(key.line),
                    player: key.player.clone(),
                },
                sportsbook: key.sportsbook.clone(),
                side_a: Some(QuoteSide {
                    bet_name: row.bet_name.clone(),
                    odds: row.odds,
                }),
                side_b: Some(QuoteSide {
                    bet_name: under.bet_name.clone(),
                    odds: under.odds,
                }),
            });
        }
    }

    pairs
}

/// Pairs game-total rows: Over vs Under, inner join on
/// {game, game name, market, line, book}.
#[must_use]
pub fn pair_totals(rows: &[QuoteRow]) -> Vec<PairedQuote> {
    pair_over_under(rows, false)
}

/// Pairs player-prop rows. Identical to totals except the player identity
/// is part of the join key, since several players can share a line value.
#[must_use]
pub fn pair_player_props(rows: &[QuoteRow]) -> Vec<PairedQuote> {
    pair_over_under(rows, true)
}

/// Concatenates paired frames from all families, preserving every row.
#[must_use]
pub fn combine_pairs(
    totals: Vec<PairedQuote>,
    spreads: Vec<PairedQuote>,
    props: Vec<PairedQuote>,
) -> Vec<PairedQuote> {
    let mut combined = totals;
    combined.extend(spreads);
    combined.extend(props);
    combined
}
