//! # crm-costs
//!
//! The shop's price catalog and the cost calculator built on it.
//!
//! - [`catalog::Catalog`]: (name, unit) → unit cost lookup, autocomplete
//! - [`calculator::CostCalculator`]: line and project totals, breakdowns

pub mod calculator;
pub mod catalog;

pub use calculator::{calculate_project_cost, cost_of, CostBreakdown, CostCalculator, CostLine};
pub use catalog::{Catalog, DEFAULT_UNIT, SUGGESTION_LIMIT};
