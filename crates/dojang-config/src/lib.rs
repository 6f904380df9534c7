use std::env;

use serde::{Deserialize, Serialize};

use self::audio::AudioConfig;
use self::glossary::GlossaryConfig;
use self::search::SearchConfig;
use self::ui::UiConfig;

pub mod audio;
pub mod glossary;
pub mod search;
pub mod ui;

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub search: SearchConfig,
    pub audio: AudioConfig,
    pub glossary: GlossaryConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Config::default();

        if let Some(ms) = env::var("DEBOUNCE_MS").ok().and_then(|v| v.parse().ok()) {
            config.search.debounce_ms = ms;
        }

        if let Ok(path) = env::var("GLOSSARY_PATH") {
            config.glossary.additional_paths.push(path);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.search.debounce_ms, config.search.debounce_ms);
    }

    #[test]
    fn partial_document_fills_in_defaults() {
        let config: Config = serde_json::from_str(r#"{ "ui": { "table_width": 100 } }"#).unwrap();
        assert_eq!(config.ui.table_width, 100);
        assert!(config.glossary.enabled);
    }
}
