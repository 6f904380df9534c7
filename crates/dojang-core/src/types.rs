use serde::{Deserialize, Serialize};

/// One glossary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    /// Stable identity, unique within an index
    pub id: String,
    /// English gloss, e.g. "Front Kick"
    pub english_name: String,
    /// Hangul representation, e.g. "앞차기"
    pub korean_name: String,
    /// Romanized transliteration, e.g. "Ap Chagi"
    pub romanized: String,
    /// Pronunciation audio URI or path
    pub sound: String,
    /// Belt rank at which the term is introduced
    pub belt_learnt: String,
    /// Explanatory gloss
    pub meaning: String,
    /// Classification tag, e.g. "Kicks"
    pub category: String,
}
