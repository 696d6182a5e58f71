//! # crm-models
//!
//! Domain models for the print-shop CRM.
//!
//! Every entity is a plain value type held in memory by the services crate.
//! Derived fields (project status, stock level, user permissions, material
//! costs) are cached on the value or computed at read time, never authoritative.

pub use crm_core::traits::{Entity, Id, Identifiable};

pub mod catalog;
pub mod material;
pub mod project;
pub mod stock;
pub mod units;
pub mod user;

pub use catalog::CatalogEntry;
pub use material::Material;
pub use project::{parse_team, Priority, Project, ProjectDraft, ProjectStatus};
pub use stock::{StockDraft, StockItem, StockStatus};
pub use units::AreaUnit;
pub use user::{Permission, User, UserDraft, UserRole, UserStatus};
