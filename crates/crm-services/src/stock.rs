//! Stock room service

use chrono::NaiveDate;
use crm_contracts::{Contract, StockContract};
use crm_core::error::ValidationErrors;
use crm_core::result::{CrmResult, ServiceResult};
use crm_core::traits::index_of;
use crm_models::{StockDraft, StockItem};
use crm_queries::{sort_stock, SortDirection, StockFilter, ViewFilter};
use serde::Serialize;

/// Header figures of the stock page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSummary {
    pub total_items: usize,
    /// At or below minimum but not empty
    pub low_stock_count: usize,
    pub out_of_stock_count: usize,
    pub total_value: f64,
}

#[derive(Debug, Clone, Default)]
pub struct StockRoom {
    items: Vec<StockItem>,
}

impl StockRoom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<StockItem>) -> Self {
        Self { items }
    }

    /// All items, type then name.
    pub fn list(&self) -> Vec<&StockItem> {
        let mut items: Vec<&StockItem> = self.items.iter().collect();
        sort_stock(&mut items, SortDirection::Asc);
        items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn index_of(&self, id: &str) -> CrmResult<usize> {
        index_of(&self.items, id)
    }

    pub fn get(&self, id: &str) -> CrmResult<&StockItem> {
        self.index_of(id).map(|index| &self.items[index])
    }

    pub fn create(&mut self, draft: StockDraft, today: NaiveDate) -> ServiceResult<StockItem> {
        if let Err(errors) = StockContract.validate(&draft) {
            return ServiceResult::failure(errors);
        }
        let item = draft.into_item(today);
        tracing::info!(item_id = %item.id, name = %item.name, "Stock item added");
        self.items.push(item.clone());
        ServiceResult::success(item)
    }

    pub fn update(&mut self, id: &str, draft: StockDraft) -> CrmResult<StockItem> {
        let index = self.index_of(id)?;
        StockContract.validate(&draft)?;
        let item = &mut self.items[index];
        draft.apply_to(item);
        tracing::info!(item_id = %id, "Stock item updated");
        Ok(item.clone())
    }

    pub fn delete(&mut self, id: &str) -> CrmResult<StockItem> {
        let index = self.index_of(id)?;
        let item = self.items.remove(index);
        tracing::info!(item_id = %id, name = %item.name, "Stock item removed");
        Ok(item)
    }

    /// Add `quantity` to the current stock and stamp the restock date.
    pub fn restock(&mut self, id: &str, quantity: f64, today: NaiveDate) -> CrmResult<StockItem> {
        if quantity.is_nan() || quantity <= 0.0 {
            let mut errors = ValidationErrors::new();
            errors.add("quantity", "must be greater than 0");
            return Err(errors.into());
        }
        let index = self.index_of(id)?;
        let item = &mut self.items[index];
        item.current_stock += quantity;
        item.last_restocked = today;
        tracing::info!(
            item_id = %id,
            quantity,
            current_stock = item.current_stock,
            "Stock item restocked"
        );
        Ok(item.clone())
    }

    /// Matching items, type then name.
    pub fn filtered(&self, filter: &StockFilter, direction: SortDirection) -> Vec<&StockItem> {
        let mut items = filter.apply(&self.items);
        sort_stock(&mut items, direction);
        items
    }

    pub fn summary(&self) -> StockSummary {
        StockSummary {
            total_items: self.items.len(),
            low_stock_count: self.items.iter().filter(|i| i.is_low()).count(),
            out_of_stock_count: self.items.iter().filter(|i| i.is_out()).count(),
            total_value: self.items.iter().map(StockItem::inventory_value).sum(),
        }
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for item in &self.items {
            if !item.category.is_empty() && !categories.contains(&item.category.as_str()) {
                categories.push(&item.category);
            }
        }
        categories
    }
}
