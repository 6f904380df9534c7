use unicode_normalization::UnicodeNormalization;

/// Normalization applied to raw search input before it reaches the
/// query engine. Matching itself stays ASCII-case-insensitive only;
/// this pass folds compatibility forms (full-width latin, composed
/// jamo input) so pasted text behaves like typed text.
pub trait Preprocessor {
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        // Unicode normalization (NFKC)
        text = text.nfkc().collect();

        text = text.replace(['\n', '\r'], " ").trim().to_string();

        text
    }
}

pub struct QueryPreprocessor;
impl Preprocessor for QueryPreprocessor {}
