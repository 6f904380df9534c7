use std::path::Path;

use dojang_core::error::GlossaryError;
use dojang_core::index::TermIndex;

pub struct GlossaryLoader;

impl GlossaryLoader {
    /// Load the glossary shipped with the binary
    pub fn load_embedded() -> Result<TermIndex, GlossaryError> {
        let json = include_str!("../data/glossary.json");
        tracing::info!("Loading embedded glossary...");
        let index = TermIndex::from_json(json)?;
        tracing::info!("Loaded {} glossary terms", index.len());
        Ok(index)
    }

    /// Load a glossary from a file path
    pub fn load_from_file(path: &Path) -> Result<TermIndex, GlossaryError> {
        tracing::info!("Loading glossary from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let index = TermIndex::from_json(&json)?;
        tracing::info!("Loaded {} glossary terms from file", index.len());
        Ok(index)
    }

    /// Load the embedded glossary and merge every additional file on
    /// top of it, later files winning on id collision. A malformed
    /// additional file fails the whole load.
    pub fn load_with_additional(paths: &[String]) -> Result<TermIndex, GlossaryError> {
        let mut index = Self::load_embedded()?;

        for path in paths {
            let additional = Self::load_from_file(Path::new(path))?;
            tracing::info!("Merging additional glossary from: {path}");
            index = index.merge(additional)?;
        }

        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_glossary_loads_and_validates() {
        let index = GlossaryLoader::load_embedded().unwrap();
        assert!(!index.is_empty());
        assert!(index.categories().contains(&"Kicks".to_string()));
        assert!(index.get("ap-chagi").is_some());
    }

    #[test]
    fn every_embedded_belt_is_a_known_rank() {
        let index = GlossaryLoader::load_embedded().unwrap();
        for term in index.terms() {
            assert!(
                crate::belt::BeltRank::from_str(&term.belt_learnt).is_some(),
                "unknown belt `{}` on term `{}`",
                term.belt_learnt,
                term.id
            );
        }
    }

    #[test]
    fn every_embedded_category_is_declared() {
        let index = GlossaryLoader::load_embedded().unwrap();
        for term in index.terms() {
            assert!(
                index.categories().contains(&term.category),
                "undeclared category `{}` on term `{}`",
                term.category,
                term.id
            );
        }
    }

    #[test]
    fn missing_additional_file_fails_the_load() {
        let paths = vec!["/nonexistent/glossary.json".to_string()];
        assert!(matches!(
            GlossaryLoader::load_with_additional(&paths),
            Err(GlossaryError::Io(_))
        ));
    }
}
