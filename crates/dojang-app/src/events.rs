use std::sync::Arc;
use std::time::Duration;

use dojang_core::preprocess::{Preprocessor, QueryPreprocessor};
use dojang_types::{AppEvent, QueryState, UiEvent};
use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;

use crate::audio::AudioSink;
use crate::debounce::Debouncer;
use crate::state::AppState;

pub mod audio;
pub mod search;

/// App's main loop. Owns the transient query state and recomputes the
/// filtered view whenever the (debounced) search text or the selected
/// category changes.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    sink: Arc<dyn AudioSink>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let debounce_ms = {
        let config = state.config.read().await;
        config.search.debounce_ms
    };

    let mut debouncer = Debouncer::new(Duration::from_millis(debounce_ms));
    let mut query_state = QueryState::default();
    let preprocessor = QueryPreprocessor;

    // initial full listing
    search::handle_search(&state, &query_state, &app_to_ui_tx).await?;

    tracing::info!("event loop started, waiting for events");
    loop {
        tokio::select! {
            event = ui_to_app_rx.recv() => {
                let event = event?;
                match event {
                    AppEvent::SearchInput(text) => {
                        debouncer.offer(preprocessor.process(&text));
                    }
                    AppEvent::SubmitSearch => {
                        if let Some(text) = debouncer.flush() {
                            query_state.search_text = text;
                            search::handle_search(&state, &query_state, &app_to_ui_tx).await?;
                        }
                    }
                    AppEvent::CategorySelected(category) => {
                        // a chip click also applies any pending text
                        if let Some(text) = debouncer.flush() {
                            query_state.search_text = text;
                        }
                        query_state.selected_category = category;
                        search::handle_search(&state, &query_state, &app_to_ui_tx).await?;
                    }
                    AppEvent::PlayAudio { term_id } => {
                        audio::handle_play(&state, &term_id, sink.as_ref()).await?;
                    }
                    AppEvent::UiEvent(UiEvent::Close) => {
                        tracing::info!("close requested, stopping event loop");
                        break;
                    }
                    AppEvent::UiEvent(_) | AppEvent::ConfigChanged => {}
                    // UI-bound, nothing to do on the backend
                    AppEvent::ShowResults(_) => {}
                }
            }
            text = debouncer.released() => {
                query_state.search_text = text;
                search::handle_search(&state, &query_state, &app_to_ui_tx).await?;
            }
            _ = cancel.cancelled() => {
                tracing::info!("cancellation requested, stopping event loop");
                break;
            }
        }
    }

    Ok(())
}
