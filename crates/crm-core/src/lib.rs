//! # crm-core
//!
//! Core types, traits, and utilities shared by every CRM crate:
//! - Error types and the field-level `ValidationErrors` collection
//! - Result aliases and the `ServiceResult` pattern
//! - Identity traits and id generation
//! - Date ranges, money formatting and status precedence
//! - Application configuration

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::*;
pub use result::*;
pub use traits::*;
pub use types::*;
