//! Stock item contract

use crm_core::error::ValidationErrors;
use crm_models::StockDraft;
use validator::Validate;

use crate::base::{merge_derived, require_text, Contract, ValidationResult};

#[derive(Debug, Default, Clone, Copy)]
pub struct StockContract;

impl Contract<StockDraft> for StockContract {
    fn validate(&self, draft: &StockDraft) -> ValidationResult {
        let mut errors = ValidationErrors::new();
        require_text(&mut errors, "name", &draft.name);
        require_text(&mut errors, "supplier", &draft.supplier);
        merge_derived(&mut errors, draft.validate());
        errors.into_result()
    }
}
