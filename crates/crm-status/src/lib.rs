//! # crm-status
//!
//! Lifecycle status derivation for projects, plus the date arithmetic the
//! calendar, pipeline and daily recheck rely on.

pub mod calendar;
pub mod deriver;
pub mod schedule;

pub use calendar::{days_remaining, is_past_due, projects_on, upcoming_deadlines};
pub use deriver::{derive_status, StatusDeriver};
pub use schedule::{next_midnight, until_next_midnight, RECHECK_PERIOD};
