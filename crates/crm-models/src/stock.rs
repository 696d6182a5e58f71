//! Stock item model
//!
//! Stock level is never stored; it is read off current/min/max counts.

use std::fmt;

use chrono::NaiveDate;
use crm_core::traits::{new_id, Entity, Id, Identifiable};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "Out of Stock")]
    OutOfStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Normal")]
    Normal,
    #[serde(rename = "Well Stocked")]
    WellStocked,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::OutOfStock => "Out of Stock",
            Self::LowStock => "Low Stock",
            Self::Normal => "Normal",
            Self::WellStocked => "Well Stocked",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Share of max stock from which an item counts as well stocked.
pub const WELL_STOCKED_RATIO: f64 = 0.8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    pub id: Id,
    pub name: String,
    /// Material, Tool, Hardware, ...
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub category: String,
    pub current_stock: f64,
    pub min_stock: f64,
    pub max_stock: f64,
    pub unit: String,
    pub unit_price: f64,
    pub supplier: String,
    #[serde(default)]
    pub location: String,
    pub last_restocked: NaiveDate,
}

impl Identifiable for StockItem {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for StockItem {
    const TYPE_NAME: &'static str = "StockItem";
}

impl StockItem {
    pub fn stock_status(&self) -> StockStatus {
        if self.current_stock == 0.0 {
            StockStatus::OutOfStock
        } else if self.current_stock <= self.min_stock {
            StockStatus::LowStock
        } else if self.current_stock >= self.max_stock * WELL_STOCKED_RATIO {
            StockStatus::WellStocked
        } else {
            StockStatus::Normal
        }
    }

    /// Fill level against max stock, capped at 100.
    pub fn stock_percentage(&self) -> f64 {
        if self.max_stock <= 0.0 {
            return 0.0;
        }
        (self.current_stock / self.max_stock * 100.0).min(100.0)
    }

    pub fn inventory_value(&self) -> f64 {
        self.current_stock * self.unit_price
    }

    pub fn is_out(&self) -> bool {
        self.current_stock == 0.0
    }

    /// At or under the minimum; includes empty items.
    pub fn is_at_or_below_min(&self) -> bool {
        self.current_stock <= self.min_stock
    }

    /// Low but not empty, as counted on the stock summary.
    pub fn is_low(&self) -> bool {
        self.is_at_or_below_min() && !self.is_out()
    }
}

/// Stock form state used for both create and edit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct StockDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub current_stock: f64,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub min_stock: f64,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub max_stock: f64,
    pub unit: String,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub unit_price: f64,
    pub supplier: String,
    pub location: String,
    pub last_restocked: Option<NaiveDate>,
}

impl StockDraft {
    pub fn into_item(self, today: NaiveDate) -> StockItem {
        StockItem {
            id: new_id(),
            name: self.name.trim().to_string(),
            kind: self.kind,
            category: self.category,
            current_stock: self.current_stock,
            min_stock: self.min_stock,
            max_stock: self.max_stock,
            unit: self.unit,
            unit_price: self.unit_price,
            supplier: self.supplier.trim().to_string(),
            location: self.location,
            last_restocked: self.last_restocked.unwrap_or(today),
        }
    }

    pub fn apply_to(self, item: &mut StockItem) {
        item.name = self.name.trim().to_string();
        item.kind = self.kind;
        item.category = self.category;
        item.current_stock = self.current_stock;
        item.min_stock = self.min_stock;
        item.max_stock = self.max_stock;
        item.unit = self.unit;
        item.unit_price = self.unit_price;
        item.supplier = self.supplier.trim().to_string();
        item.location = self.location;
        if let Some(date) = self.last_restocked {
            item.last_restocked = date;
        }
    }
}
