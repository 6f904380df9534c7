use std::collections::HashSet;

use serde::Deserialize;

use crate::error::GlossaryError;
use crate::types::Term;

/// On-disk glossary shape: the dataset separately declares its
/// canonical category list alongside the terms.
#[derive(Debug, Deserialize)]
struct GlossaryJson {
    categories: Vec<String>,
    terms: Vec<Term>,
}

/// Immutable, ordered collection of glossary terms, loaded once at
/// startup. Term ids are unique; the category list is the dataset's
/// declared one, not derived per query.
#[derive(Debug)]
pub struct TermIndex {
    terms: Vec<Term>,
    categories: Vec<String>,
}

impl TermIndex {
    /// Parse a glossary document. Fails fast on malformed records:
    /// duplicate ids or empty required fields reject the whole load
    /// rather than silently dropping entries.
    pub fn from_json(json_str: &str) -> Result<Self, GlossaryError> {
        let data: GlossaryJson = serde_json::from_str(json_str)?;
        Self::build(data.terms, data.categories)
    }

    fn build(terms: Vec<Term>, categories: Vec<String>) -> Result<Self, GlossaryError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for term in &terms {
            validate(term)?;
            if !seen.insert(&term.id) {
                return Err(GlossaryError::DuplicateId(term.id.clone()));
            }
        }

        Ok(Self { terms, categories })
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Canonical category list as declared by the dataset.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Term> {
        self.terms.iter().find(|t| t.id == id)
    }

    /// Merge another glossary into this one. A merged-in term whose id
    /// already exists replaces the earlier entry; its position moves to
    /// the end, matching append order. Categories not yet declared are
    /// appended in the other glossary's order.
    pub fn merge(mut self, other: TermIndex) -> Result<Self, GlossaryError> {
        for term in other.terms {
            self.terms.retain(|t| t.id != term.id);
            self.terms.push(term);
        }

        for category in other.categories {
            if !self.categories.contains(&category) {
                self.categories.push(category);
            }
        }

        Self::build(self.terms, self.categories)
    }
}

/// Required fields are the id and everything matching operates on.
fn validate(term: &Term) -> Result<(), GlossaryError> {
    let required: [(&'static str, &str); 6] = [
        ("id", &term.id),
        ("englishName", &term.english_name),
        ("koreanName", &term.korean_name),
        ("romanized", &term.romanized),
        ("beltLearnt", &term.belt_learnt),
        ("category", &term.category),
    ];

    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(GlossaryError::EmptyField {
                id: term.id.clone(),
                field,
            });
        }
    }

    Ok(())
}
