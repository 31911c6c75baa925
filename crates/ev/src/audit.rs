//! Audit sink boundary.
//!
//! Before formatting, the positive-EV subset of the cross-book matrix is
//! handed to a table-shaped sink for audit. The concrete sink (a CSV
//! writer in the CLI) lives outside this crate; the pipeline only needs
//! the seam.

use anyhow::Result;
use async_trait::async_trait;
use fairline_core::Sportsbook;

use crate::types::CrossBookRow;

/// A table-shaped destination for the positive-EV matrix subset.
///
/// One write per scan, overwrite semantics. Implementations flatten the
/// (side, book) odds map into widened column names.
#[async_trait]
pub trait AuditSink: Send + Sync {
    async fn write_rows(&self, rows: &[CrossBookRow], books: &[Sportsbook]) -> Result<()>;
}

/// Sink that discards everything; used when no audit output is wanted.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAuditSink;

#[async_trait]
impl AuditSink for NullAuditSink {
    async fn write_rows(&self, _rows: &[CrossBookRow], _books: &[Sportsbook]) -> Result<()> {
        Ok(())
    }
}
