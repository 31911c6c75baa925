//! American-odds probability math.
//!
//! Two pure functions: converting a signed American price to its implied
//! probability, and removing the bookmaker margin from a two-sided quote
//! so the pair sums to exactly 1.0 (the standard two-way de-vig, which
//! assumes exactly two outcomes and no draw).

/// Converts American odds to the probability the price implies.
///
/// Positive (underdog) odds: `100 / (odds + 100)`. Negative (favorite)
/// odds: `|odds| / (|odds| + 100)`. Odds of exactly 0 are a degenerate
/// input that takes the favorite branch and yields 0.0.
#[must_use]
pub fn implied_probability(odds: i32) -> f64 {
    if odds > 0 {
        100.0 / (f64::from(odds) + 100.0)
    } else {
        let magnitude = f64::from(odds).abs();
        magnitude / (magnitude + 100.0)
    }
}

/// Removes the vig from a two-sided quote.
///
/// Computes both sides' implied probabilities and normalizes by their sum,
/// so the returned pair adds to 1.0. Both sides must be genuine quotes;
/// callers drop rows with a missing side before reaching this.
#[must_use]
pub fn no_vig_pair(odds_a: i32, odds_b: i32) -> (f64, f64) {
    let prob_a = implied_probability(odds_a);
    let prob_b = implied_probability(odds_b);
    let total = prob_a + prob_b;
    (prob_a / total, prob_b / total)
}
