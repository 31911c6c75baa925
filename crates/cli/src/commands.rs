//! The `scan` command.
//!
//! Mirrors the chat-command contract: a free token list, a usage message
//! when too few tokens arrive, and one generic failure message when the
//! pipeline errors. Multi-word reference book names are supported by
//! treating every token between the league and the final token as the
//! reference book.

use anyhow::Result;

use fairline_core::{AppConfig, Sportsbook};
use fairline_ev::{run_scan, ScanRequest};
use fairline_odds_api::{OddsApiClient, OddsApiConfig};

use crate::audit_csv::CsvAuditSink;

/// Printed when the scan cannot even start.
pub const USAGE_MESSAGE: &str =
    "Usage: fairline scan <sport> <league> <reference book> <target book>";

/// Printed on any pipeline failure; details go to the log, not the user.
pub const FAILURE_MESSAGE: &str = "An error occurred.";

/// Header printed above a non-empty recommendation list.
const REPORT_HEADER: &str = "Here are your +EV bets:";

/// Parsed form of the free scan token list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTokens {
    pub sport: String,
    pub league: String,
    pub reference: Sportsbook,
    pub target: Sportsbook,
}

/// Splits the token list into sport, league, reference and target book.
///
/// Returns `None` when fewer than four tokens arrive.
#[must_use]
pub fn parse_scan_tokens(tokens: &[String]) -> Option<ScanTokens> {
    if tokens.len() < 4 {
        return None;
    }

    let target = Sportsbook::from(tokens[tokens.len() - 1].clone());
    let reference = Sportsbook::from(tokens[2..tokens.len() - 1].join(" "));

    Some(ScanTokens {
        sport: tokens[0].clone(),
        league: tokens[1].clone(),
        reference,
        target,
    })
}

/// Runs one scan and returns the text to print.
///
/// Pipeline failures are logged and collapsed into [`FAILURE_MESSAGE`];
/// the returned `Result` is only for setup errors that should abort.
pub async fn scan(tokens: &[String], config: &AppConfig) -> Result<String> {
    let Some(parsed) = parse_scan_tokens(tokens) else {
        return Ok(USAGE_MESSAGE.to_string());
    };

    let client = OddsApiClient::new(OddsApiConfig::from_settings(&config.odds_api))?;
    let sink = CsvAuditSink::new(&config.scan.audit_path);

    let request = ScanRequest {
        sport: parsed.sport,
        league: parsed.league,
        reference: parsed.reference.clone(),
        target: parsed.target.clone(),
        comparison_books: config
            .scan
            .comparison_books
            .iter()
            .map(|name| Sportsbook::from(name.clone()))
            .collect(),
    };

    match run_scan(&client, &sink, &request).await {
        Ok(report) => {
            let body = report.render(&parsed.target, &parsed.reference);
            if report.is_empty() {
                Ok(body)
            } else {
                Ok(format!("{REPORT_HEADER}\n\n{body}"))
            }
        }
        Err(err) => {
            tracing::error!(stage = %err.stage(), error = %err, "scan failed");
            Ok(FAILURE_MESSAGE.to_string())
        }
    }
}
