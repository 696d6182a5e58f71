//! # crm-api
//!
//! JSON handlers over the shared workspace. Bodies and query parameters are
//! camelCase; selection filters accept `"all"`.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routes;

pub use extractors::AppState;
pub use routes::router;
