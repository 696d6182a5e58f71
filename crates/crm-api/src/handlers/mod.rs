//! Request handlers

pub mod catalog;
pub mod dashboard;
pub mod projects;
pub mod session;
pub mod stock;
pub mod system;
pub mod users;
