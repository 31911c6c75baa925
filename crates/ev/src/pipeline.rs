//! The end-to-end scan pipeline.
//!
//! One scan is sequential: fetch game and player quotes, pair each market
//! family, widen across books, evaluate EV against the reference book,
//! dump the positive rows to the audit sink, and render the report. Each
//! invocation works on freshly fetched data; nothing is cached across
//! scans.

use tracing::{debug, info};

use fairline_core::{MarketFamily, OddsRequest, OddsSource, QuoteRow, Sportsbook};

use crate::audit::AuditSink;
use crate::error::{Result, ScanError};
use crate::evaluator::EvEvaluator;
use crate::format::ScanReport;
use crate::matrix::build_matrix;
use crate::pairer::{combine_pairs, pair_player_props, pair_spreads, pair_totals};
use crate::types::CrossBookRow;

/// One scan request: which market to look at and which books to compare.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    pub sport: String,
    pub league: String,
    /// The sharp book whose prices are de-vigged into fair probabilities.
    pub reference: Sportsbook,
    /// The book being evaluated for mispricing.
    pub target: Sportsbook,
    /// Books surfaced as price context on every recommendation, in order.
    pub comparison_books: Vec<Sportsbook>,
}

/// Runs one scan to completion.
///
/// # Errors
///
/// Returns a [`ScanError`] classified by stage; fetch and audit are the
/// fallible stages, everything between handles missing data by exclusion.
pub async fn run_scan(
    source: &dyn OddsSource,
    sink: &dyn AuditSink,
    request: &ScanRequest,
) -> Result<ScanReport> {
    let odds_request = OddsRequest {
        sport: request.sport.clone(),
        league: request.league.clone(),
        sportsbook: request.target.clone(),
        live: false,
    };

    let game_rows = source
        .fetch_game_quotes(&odds_request)
        .await
        .map_err(ScanError::Fetch)?;
    let player_rows = source
        .fetch_player_quotes(&odds_request)
        .await
        .map_err(ScanError::Fetch)?;
    info!(
        game_rows = game_rows.len(),
        player_rows = player_rows.len(),
        sport = %request.sport,
        league = %request.league,
        "quotes fetched"
    );

    let spreads: Vec<QuoteRow> = game_rows
        .iter()
        .filter(|row| MarketFamily::from_market_name(&row.market_name) == Some(MarketFamily::Spread))
        .cloned()
        .collect();
    let totals: Vec<QuoteRow> = game_rows
        .iter()
        .filter(|row| MarketFamily::from_market_name(&row.market_name) == Some(MarketFamily::Total))
        .cloned()
        .collect();

    let paired = combine_pairs(
        pair_totals(&totals),
        pair_spreads(&spreads),
        pair_player_props(&player_rows),
    );
    debug!(pairs = paired.len(), "markets paired");

    let matrix = build_matrix(&paired);
    debug!(rows = matrix.len(), "cross-book matrix built");

    let evaluator = EvEvaluator::new(request.target.clone(), request.reference.clone())
        .with_comparison_books(request.comparison_books.clone());

    let positive: Vec<CrossBookRow> = evaluator
        .positive_rows(&matrix)
        .into_iter()
        .cloned()
        .collect();
    // Audit columns cover every book present in the flagged rows, not
    // just the configured comparison list: the target and reference
    // prices are the ones that produced the flag.
    let mut audit_books: Vec<Sportsbook> = positive
        .iter()
        .flat_map(|row| row.books().into_iter().cloned())
        .collect();
    audit_books.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    audit_books.dedup();
    sink.write_rows(&positive, &audit_books)
        .await
        .map_err(ScanError::Audit)?;

    let records = evaluator.evaluate(&matrix);
    Ok(ScanReport::from_records(records))
}
