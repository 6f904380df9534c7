use dojang_core::query;
use dojang_core::types::Term;
use dojang_types::{AppEvent, QueryState, TermRow};
use kanal::AsyncSender;

use crate::state::AppState;

/// Recompute the visible subset for the current query state and ship
/// it to the UI. No-match is a normal outcome and still ships, so the
/// UI can render its empty state.
pub async fn handle_search(
    state: &AppState,
    query_state: &QueryState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let hits = query::filter(
        state.index.terms(),
        &query_state.search_text,
        &query_state.selected_category,
    );

    tracing::debug!(
        "query `{}` in `{}`: {} of {} terms",
        query_state.search_text,
        query_state.selected_category,
        hits.len(),
        state.index.len()
    );

    let rows = to_rows(&hits);
    app_to_ui_tx.send(AppEvent::ShowResults(rows)).await?;

    Ok(())
}

pub fn to_rows(terms: &[&Term]) -> Vec<TermRow> {
    terms.iter().map(|t| to_row(t)).collect()
}

fn to_row(term: &Term) -> TermRow {
    TermRow {
        id: term.id.clone(),
        english_name: term.english_name.clone(),
        korean_name: term.korean_name.clone(),
        romanized: term.romanized.clone(),
        belt_learnt: term.belt_learnt.clone(),
        meaning: term.meaning.clone(),
        category: term.category.clone(),
        sound: term.sound.clone(),
    }
}
