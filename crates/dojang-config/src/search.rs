use serde::{Deserialize, Serialize};

fn default_debounce_ms() -> u64 {
    250
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet interval before a pending search text is applied.
    /// An explicit submit flushes immediately.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}
