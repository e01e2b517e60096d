//! Error types for the Extractor

use prospector_gatekeeper::GatekeeperError;
use thiserror::Error;

/// Errors that can occur during extraction
///
/// Only [`ExtractorError::Config`] ever reaches a caller. The other variants
/// describe why a single block was dropped; the pipeline records them as
/// failures and carries on with the next block.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Candidate block failed block-level validation
    #[error("Block rejected: {0}")]
    BlockRejected(String),

    /// Assembled record failed record-level validation
    #[error("Record rejected: {0}")]
    RecordRejected(String),

    /// Record could not be normalized into valid output
    #[error("Malformed record: {0}")]
    Malformed(String),

    /// Company already extracted earlier in the same report
    #[error("Duplicate company: {0}")]
    Duplicate(String),
}

impl From<GatekeeperError> for ExtractorError {
    fn from(e: GatekeeperError) -> Self {
        ExtractorError::Config(e.to_string())
    }
}
