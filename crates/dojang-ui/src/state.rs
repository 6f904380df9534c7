use dojang_types::TermRow;

/// UI-side state (separate from AppState). `results` is `None` until
/// the first `ShowResults` arrives, so an empty result set renders as
/// an explicit "no matches" rather than as the initial blank screen.
#[derive(Default)]
pub struct UiState {
    pub results: Option<Vec<TermRow>>,
    pub categories: Vec<String>,
}

impl UiState {
    pub fn new(categories: Vec<String>) -> Self {
        Self {
            results: None,
            categories,
        }
    }
}
