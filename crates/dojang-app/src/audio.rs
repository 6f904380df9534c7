/// Seam for pronunciation playback. The app resolves a term's sound
/// URI and hands it over; audio content is never inspected here.
pub trait AudioSink: Send + Sync {
    fn play(&self, uri: &str);
}

/// Default sink: records the dispatch in the log. Wiring an actual
/// player process is a deployment concern.
pub struct TracingSink;

impl AudioSink for TracingSink {
    fn play(&self, uri: &str) {
        tracing::info!("pronunciation audio dispatched: {uri}");
    }
}
