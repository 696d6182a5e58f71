//! # crm-contracts
//!
//! Validation contracts run before a draft is turned into (or applied to) an
//! entity. Every contract collects all problems at once; missing required
//! fields are reported as blanks so the caller can list them together.

pub mod base;
pub mod projects;
pub mod stock;
pub mod users;

pub use base::{Contract, ValidationResult};
pub use projects::{MaterialContract, ProjectContract};
pub use stock::StockContract;
pub use users::UserContract;
