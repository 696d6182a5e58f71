//! Material line item
//!
//! A line consumed by a project. Area-dimensioned lines carry a width and a
//! height per unit; the effective quantity is then area times count.

use crm_core::traits::{new_id, Id};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::units::AreaUnit;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    #[serde(default = "new_id")]
    pub id: Id,

    /// Tool, Software, Material, Hardware, ...
    #[serde(rename = "type")]
    pub kind: String,

    pub name: String,

    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub quantity: f64,

    pub unit: String,

    #[serde(default)]
    pub has_area: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_unit: Option<AreaUnit>,

    /// Cached catalog price; refreshed by the cost calculator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_cost: Option<f64>,

    /// Cached line total; refreshed by the cost calculator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            id: new_id(),
            kind: "Tool".to_string(),
            name: String::new(),
            quantity: 1.0,
            unit: "item".to_string(),
            has_area: false,
            width: Some(0.0),
            height: Some(0.0),
            area_unit: Some(AreaUnit::SquareMeter),
            unit_cost: None,
            total_cost: None,
        }
    }
}

impl Material {
    pub fn new(
        kind: impl Into<String>,
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            quantity,
            unit: unit.into(),
            width: None,
            height: None,
            area_unit: None,
            ..Default::default()
        }
    }

    /// Mark the line as area-dimensioned: `width × height` per unit.
    pub fn with_area(mut self, width: f64, height: f64, area_unit: AreaUnit) -> Self {
        self.has_area = true;
        self.width = Some(width);
        self.height = Some(height);
        self.area_unit = Some(area_unit);
        self
    }

    /// Width and height when both take part in pricing (area flag on, both non-zero).
    pub fn dimensions(&self) -> Option<(f64, f64)> {
        if !self.has_area {
            return None;
        }
        match (self.width, self.height) {
            (Some(w), Some(h)) if w != 0.0 && h != 0.0 => Some((w, h)),
            _ => None,
        }
    }

    /// Area of one unit, in the line's own area unit.
    pub fn area_per_unit(&self) -> Option<f64> {
        self.dimensions().map(|(w, h)| w * h)
    }

    /// Quantity the unit cost is multiplied by.
    pub fn effective_quantity(&self) -> f64 {
        match self.area_per_unit() {
            Some(area) => area * self.quantity,
            None => self.quantity,
        }
    }
}
