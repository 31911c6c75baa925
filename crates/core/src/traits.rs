use crate::quote::{OddsRequest, QuoteRow};
use anyhow::Result;
use async_trait::async_trait;

/// Upstream odds feed.
///
/// Implementations must tolerate missing or non-numeric line values and
/// must not assume a fixed row count.
#[async_trait]
pub trait OddsSource: Send + Sync {
    /// Fetches game-level market quotes (spreads, totals, moneylines).
    async fn fetch_game_quotes(&self, request: &OddsRequest) -> Result<Vec<QuoteRow>>;

    /// Fetches player-prop market quotes.
    async fn fetch_player_quotes(&self, request: &OddsRequest) -> Result<Vec<QuoteRow>>;
}
