use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AudioConfig {
    /// Dispatch pronunciation audio to the configured sink
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Base URL or directory the per-term sound paths resolve against
    #[serde(default)]
    pub base_path: String,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            base_path: String::new(),
        }
    }
}
