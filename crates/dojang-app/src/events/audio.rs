use crate::audio::AudioSink;
use crate::state::AppState;

/// Resolve a term's pronunciation URI and hand it to the sink.
pub async fn handle_play(
    state: &AppState,
    term_id: &str,
    sink: &dyn AudioSink,
) -> anyhow::Result<()> {
    let (enabled, base_path) = {
        let config = state.config.read().await;
        (config.audio.enabled, config.audio.base_path.clone())
    };

    if !enabled {
        tracing::debug!("audio disabled, ignoring play request for {term_id}");
        return Ok(());
    }

    match state.index.get(term_id) {
        Some(term) => {
            let uri = resolve(&base_path, &term.sound);
            sink.play(&uri);
        }
        None => tracing::warn!("play requested for unknown term id: {term_id}"),
    }

    Ok(())
}

fn resolve(base_path: &str, sound: &str) -> String {
    if base_path.is_empty() {
        sound.to_string()
    } else {
        format!(
            "{}/{}",
            base_path.trim_end_matches('/'),
            sound.trim_start_matches('/')
        )
    }
}
