//! Price list entry

use serde::{Deserialize, Serialize};

/// One row of the shop's price list, keyed by (name, unit).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub name: String,
    pub unit: String,
    pub unit_cost: f64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl CatalogEntry {
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        unit_cost: f64,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            unit_cost,
            kind: kind.into(),
        }
    }

    /// Case-insensitive match on both parts of the key.
    pub fn matches(&self, name: &str, unit: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
            && self.unit.to_lowercase() == unit.to_lowercase()
    }
}
