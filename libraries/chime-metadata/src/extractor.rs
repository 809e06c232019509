//! Best-effort metadata extraction

use crate::reader;
use chime_core::types::{Song, SongMetadata};
use std::time::Duration;

/// Default ceiling on the duration probe
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Best-effort metadata extractor.
///
/// `extract` never fails. Tag parsing and duration probing run as
/// independent paths; each degrades to its default on failure without
/// affecting the other.
pub struct MetadataExtractor {
    probe_timeout: Duration,
}

impl MetadataExtractor {
    /// Create an extractor with the default probe timeout
    pub fn new() -> Self {
        Self {
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }

    /// Create an extractor with a custom probe timeout
    pub fn with_probe_timeout(probe_timeout: Duration) -> Self {
        Self { probe_timeout }
    }

    /// Extract title, artist, and duration from a raw audio payload.
    ///
    /// Defaults on failure: `None` title/artist, zero duration.
    pub async fn extract(&self, payload: &[u8]) -> SongMetadata {
        let fields = match reader::read_tags(payload) {
            Ok(fields) => fields,
            Err(e) => {
                tracing::debug!("tag parsing failed, using defaults: {e}");
                reader::TagFields::default()
            }
        };

        let duration_seconds = self.probe_duration(payload.to_vec()).await;

        SongMetadata {
            title: fields.title,
            artist: fields.artist,
            duration_seconds,
        }
    }

    /// Measure the payload's duration on a blocking worker, bounded by the
    /// probe timeout.
    ///
    /// The worker owns its cursor over the payload copy; it is dropped on
    /// success, error, panic, and timeout alike, so the probe never leaves a
    /// transient resource behind. Non-finite and negative readings collapse
    /// to zero.
    async fn probe_duration(&self, payload: Vec<u8>) -> f64 {
        let worker = tokio::task::spawn_blocking(move || reader::read_duration(&payload));

        match tokio::time::timeout(self.probe_timeout, worker).await {
            Ok(Ok(Ok(duration))) => Song::sanitize_duration(duration),
            Ok(Ok(Err(e))) => {
                tracing::debug!("duration probe failed: {e}");
                0.0
            }
            Ok(Err(join_error)) => {
                tracing::debug!("duration probe worker died: {join_error}");
                0.0
            }
            Err(_) => {
                tracing::debug!("duration probe timed out after {:?}", self.probe_timeout);
                0.0
            }
        }
    }
}

impl Default for MetadataExtractor {
    fn default() -> Self {
        Self::new()
    }
}
