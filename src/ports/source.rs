//! Sample-feed port: the ingestion boundary.

use crate::domain::VitalSample;

/// Errors a sample feed can raise.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("feed disconnected")]
    Disconnected,

    #[error("malformed reading: {0}")]
    Malformed(String),
}

/// Trait for producers of vital-sign samples.
///
/// One call produces one sample; the presenter decides when to call. A feed
/// may deliver partial samples — the core scores them with missing criteria
/// counted as unmatched, but the store rejects them at append.
pub trait SampleSource {
    /// Produce the next sample.
    ///
    /// # Errors
    /// Returns error if the feed cannot deliver a reading.
    fn next_sample(&mut self) -> Result<VitalSample, SourceError>;
}
