//! Input limits

use super::*;
use serde::{Deserialize, Serialize};

/// Limits applied to AI request input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LimitsConfig {
    /// Maximum characters of composed input text
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_input_chars: default_max_input_chars(),
        }
    }
}

impl LimitsConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_input_chars == 0 {
            return Err("max_input_chars cannot be 0".to_string());
        }
        Ok(())
    }
}
