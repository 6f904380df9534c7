use serde::{Deserialize, Serialize};

fn default_table_width() -> u16 {
    120
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Total character budget for the rendered result table
    #[serde(default = "default_table_width")]
    pub table_width: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            table_width: default_table_width(),
        }
    }
}
