//! Trait definitions for external interactions
//!
//! The extraction core takes no campaign context and performs no I/O.
//! Whatever stores its output implements this trait outside the core.

use crate::ProspectRecord;

/// Downstream consumer of extracted prospects
///
/// Implementations assign durable identity and commit storage.
pub trait ProspectSink {
    /// Error type for sink operations
    type Error;

    /// Accept a batch of records, returning how many were stored
    fn accept(&mut self, records: &[ProspectRecord]) -> Result<usize, Self::Error>;

    /// Flush any buffered output
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
