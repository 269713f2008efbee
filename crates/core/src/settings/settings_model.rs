//! Settings domain models.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Display settings for the engine's consumers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Currency the home rollup converts into.
    pub base_currency: String,
    /// Currencies masked from display. Masking never changes totals.
    pub hidden_currencies: HashSet<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_currency: "USD".to_string(),
            hidden_currencies: HashSet::new(),
        }
    }
}
