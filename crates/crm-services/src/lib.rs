//! # crm-services
//!
//! Business services over the in-memory collections.
//!
//! A single [`Workspace`] owns the project board, the stock room and the user
//! directory. Mutations go through contracts first and keep derived fields
//! (material prices, project status, user permissions) in step.

pub mod dashboard;
pub mod projects;
pub mod recheck;
pub mod seed;
pub mod stock;
pub mod users;
pub mod workspace;

pub use dashboard::DashboardStats;
pub use projects::{PipelineCard, PipelineColumn, ProjectBoard};
pub use recheck::DailyRecheck;
pub use stock::{StockRoom, StockSummary};
pub use users::UserDirectory;
pub use workspace::{SharedWorkspace, Workspace};
