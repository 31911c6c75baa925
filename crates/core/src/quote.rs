use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A sportsbook identifier.
///
/// Book names come from configuration and command tokens and may contain
/// spaces ("Circa Sports"), so this stays a string newtype rather than an
/// enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sportsbook(pub String);

impl Sportsbook {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Sportsbook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Sportsbook {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Sportsbook {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Logical side of a two-outcome market.
///
/// Side A is the positive-line / Over side, side B the negative-line /
/// Under side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Market family a quote belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketFamily {
    /// Point spread / puck line.
    Spread,
    /// Game total (Over/Under).
    Total,
    /// Player proposition (Over/Under on a player stat).
    PlayerProp,
    /// Two-outcome moneyline.
    Moneyline,
}

impl MarketFamily {
    /// Classifies an upstream market name.
    ///
    /// Player-prop rows arrive on a separate feed and are classified by the
    /// caller, so this only distinguishes game-level families.
    #[must_use]
    pub fn from_market_name(name: &str) -> Option<Self> {
        if name.contains("Point Spread") || name.contains("Puck Line") {
            Some(Self::Spread)
        } else if name.contains("Total") {
            Some(Self::Total)
        } else if name.contains("Moneyline") {
            Some(Self::Moneyline)
        } else {
            None
        }
    }
}

/// One book's price for one side of one market instance.
///
/// Produced by the upstream odds feed; immutable once fetched. `line` is
/// `None` when the feed sent null or something non-numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRow {
    pub game_id: String,
    pub game_name: String,
    pub market_name: String,
    /// Free-text bet description, e.g. "Dallas Stars +1.5" or "Over 5.5".
    pub bet_name: String,
    pub line: Option<Decimal>,
    /// Player the quote refers to; present on prop rows only.
    pub player: Option<String>,
    pub sportsbook: Sportsbook,
    /// American odds, signed.
    pub odds: i32,
}

/// Parameters for one odds-feed fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OddsRequest {
    pub sport: String,
    pub league: String,
    pub sportsbook: Sportsbook,
    pub live: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::A.opposite(), Side::B);
        assert_eq!(Side::B.opposite(), Side::A);
    }

    #[test]
    fn test_market_family_from_name() {
        assert_eq!(
            MarketFamily::from_market_name("Point Spread"),
            Some(MarketFamily::Spread)
        );
        assert_eq!(
            MarketFamily::from_market_name("Puck Line"),
            Some(MarketFamily::Spread)
        );
        assert_eq!(
            MarketFamily::from_market_name("Total Goals"),
            Some(MarketFamily::Total)
        );
        assert_eq!(
            MarketFamily::from_market_name("Moneyline"),
            Some(MarketFamily::Moneyline)
        );
        assert_eq!(MarketFamily::from_market_name("Race To 3 Goals"), None);
    }

    #[test]
    fn test_sportsbook_display() {
        let book = Sportsbook::from("Circa Sports");
        assert_eq!(book.to_string(), "Circa Sports");
        assert_eq!(book.as_str(), "Circa Sports");
    }

    #[test]
    fn test_quote_row_serde_roundtrip() {
        use rust_decimal_macros::dec;

        let row = QuoteRow {
            game_id: "g1".to_string(),
            game_name: "Stars vs Blues".to_string(),
            market_name: "Puck Line".to_string(),
            bet_name: "Dallas Stars +1.5".to_string(),
            line: Some(dec!(1.5)),
            player: None,
            sportsbook: Sportsbook::from("Pinnacle"),
            odds: -180,
        };

        let json = serde_json::to_string(&row).unwrap();
        let back: QuoteRow = serde_json::from_str(&json).unwrap();
        assert_eq!(row, back);
    }
}
