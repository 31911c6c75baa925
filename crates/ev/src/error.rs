//! Error types for the scan pipeline.
//!
//! Each pipeline stage has its own error kind so failures stay
//! distinguishable in logs and tests, even though the chat-facing caller
//! collapses all of them into one generic failure message. Missing data
//! inside a stage is handled by exclusion (join semantics) and is never an
//! error.

use thiserror::Error;

/// Pipeline stage a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStage {
    Fetch,
    Pairing,
    Pivot,
    Evaluate,
    Audit,
    Format,
}

impl ScanStage {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fetch => "fetch",
            Self::Pairing => "pairing",
            Self::Pivot => "pivot",
            Self::Evaluate => "evaluate",
            Self::Audit => "audit",
            Self::Format => "format",
        }
    }
}

impl std::fmt::Display for ScanStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur while running a scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The odds feed could not be fetched.
    #[error("odds fetch failed: {0}")]
    Fetch(anyhow::Error),

    /// Quote pairing failed.
    #[error("market pairing failed: {0}")]
    Pairing(String),

    /// Cross-book widening failed.
    #[error("cross-book pivot failed: {0}")]
    Pivot(String),

    /// EV evaluation failed.
    #[error("EV evaluation failed: {0}")]
    Evaluate(String),

    /// The audit sink rejected the positive-EV rows.
    #[error("audit write failed: {0}")]
    Audit(anyhow::Error),

    /// Report rendering failed.
    #[error("report formatting failed: {0}")]
    Format(String),
}

impl ScanError {
    /// The stage this error belongs to.
    #[must_use]
    pub fn stage(&self) -> ScanStage {
        match self {
            Self::Fetch(_) => ScanStage::Fetch,
            Self::Pairing(_) => ScanStage::Pairing,
            Self::Pivot(_) => ScanStage::Pivot,
            Self::Evaluate(_) => ScanStage::Evaluate,
            Self::Audit(_) => ScanStage::Audit,
            Self::Format(_) => ScanStage::Format,
        }
    }
}

/// Result type alias for scan operations.
pub type Result<T> = std::result::Result<T, ScanError>;
