//! Provenance tracking

/// Source tag for records produced from agent reports
pub const AGENT_REPORT_SOURCE: &str = "agent_report";

/// Where a prospect record came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    /// Source tag (e.g., "agent_report")
    pub source: String,

    /// Segmentation strategy that produced the block (e.g., "numbered_emphasis")
    pub strategy: String,

    /// Position of the block in the report, starting at 0
    pub block_index: usize,
}

impl Provenance {
    /// Create a new provenance entry for an agent report block
    pub fn new(strategy: impl Into<String>, block_index: usize) -> Self {
        Self {
            source: AGENT_REPORT_SOURCE.to_string(),
            strategy: strategy.into(),
            block_index,
        }
    }

    /// Override the source tag
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }
}
