//! Wire types for the odds feed.
//!
//! The feed returns flat JSON arrays of quote rows. Numeric lines arrive
//! inconsistently (number, numeric string, or null depending on market),
//! so deserialization is lenient: anything that does not parse as a
//! number becomes `None` and the row simply never joins.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use fairline_core::{QuoteRow, Sportsbook};

/// One quote row as the feed serves it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawQuoteRow {
    pub game_id: String,
    pub game_name: String,
    pub market_name: String,
    pub bet_name: String,
    #[serde(default, deserialize_with = "deserialize_line")]
    pub line: Option<Decimal>,
    #[serde(default)]
    pub player_name: Option<String>,
    pub sportsbook: String,
    pub odds: i32,
}

impl From<RawQuoteRow> for QuoteRow {
    fn from(raw: RawQuoteRow) -> Self {
        Self {
            game_id: raw.game_id,
            game_name: raw.game_name,
            market_name: raw.market_name,
            bet_name: raw.bet_name,
            line: raw.line,
            player: raw.player_name,
            sportsbook: Sportsbook::from(raw.sportsbook),
            odds: raw.odds,
        }
    }
}

/// Accepts a JSON number, a numeric string, or null for the line field.
fn deserialize_line<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.to_string().parse::<Decimal>().ok(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<Decimal>().ok(),
        _ => None,
    })
}
