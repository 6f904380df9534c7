use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    ConfigChanged,
    UiEvent(UiEvent),
    /// A keystroke-level change to the search text; subject to debouncing
    SearchInput(String),
    /// Explicit submit: flush any pending debounced search immediately
    SubmitSearch,
    /// A category chip selection; "all" clears the category predicate
    CategorySelected(String),
    ShowResults(Vec<TermRow>),
    PlayAudio { term_id: String },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    Show,
    Hide,
    Close,
}

/// Display projection of a glossary term, sent to the UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermRow {
    pub id: String,
    pub english_name: String,
    pub korean_name: String,
    pub romanized: String,
    pub belt_learnt: String,
    pub meaning: String,
    pub category: String,
    pub sound: String,
}

/// Transient filter inputs owned by the presentation layer. Created
/// with the empty/"all" defaults, discarded on exit, never persisted.
#[derive(Debug, Clone)]
pub struct QueryState {
    pub search_text: String,
    pub selected_category: String,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            selected_category: "all".to_string(),
        }
    }
}
