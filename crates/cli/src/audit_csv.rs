//! CSV audit sink.
//!
//! Writes the positive-EV subset of the cross-book matrix to a CSV file,
//! one file per scan with overwrite semantics. The (side, book) odds map
//! is flattened into `Odds_A_{book}` / `Odds_B_{book}` columns.

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;

use fairline_core::{Side, Sportsbook};
use fairline_ev::{AuditSink, CrossBookRow};

/// Audit sink backed by a CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvAuditSink {
    path: PathBuf,
}

impl CsvAuditSink {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl AuditSink for CsvAuditSink {
    async fn write_rows(&self, rows: &[CrossBookRow], books: &[Sportsbook]) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.path)
            .with_context(|| format!("failed to create audit file {}", self.path.display()))?;

        let mut headers = vec![
            "Game ID".to_string(),
            "Game Name".to_string(),
            "Market Name".to_string(),
            "Line".to_string(),
            "Player".to_string(),
            "Bet Name A".to_string(),
            "Bet Name B".to_string(),
        ];
        for book in books {
            headers.push(format!("Odds_A_{book}"));
            headers.push(format!("Odds_B_{book}"));
        }
        writer.write_record(&headers)?;

        for row in rows {
            let mut record = vec![
                row.key.game_id.clone(),
                row.key.game_name.clone(),
                row.key.market_name.clone(),
                row.key.line.map(|l| l.to_string()).unwrap_or_default(),
                row.key.player.clone().unwrap_or_default(),
                row.bet_name_a.clone(),
                row.bet_name_b.clone(),
            ];
            for book in books {
                for side in [Side::A, Side::B] {
                    record.push(
                        row.odds_for(side, book)
                            .map(|o| o.to_string())
                            .unwrap_or_default(),
                    );
                }
            }
            writer.write_record(&record)?;
        }

        writer
            .flush()
            .with_context(|| format!("failed to flush audit file {}", self.path.display()))?;
        tracing::debug!(rows = rows.len(), path = %self.path.display(), "audit CSV written");
        Ok(())
    }
}
