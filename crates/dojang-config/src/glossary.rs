use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GlossaryConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Extra glossary files merged over the embedded one
    #[serde(default)]
    pub additional_paths: Vec<String>,
}

impl Default for GlossaryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            additional_paths: vec![],
        }
    }
}
