//! # crm-queries
//!
//! Predicate filters and sort orders for the project, stock and user lists.
//!
//! - `filters` - search terms, the `"all"` selection sentinel, per-entity filters
//! - `sorts` - locale-style string ordering and the stock list order
//!
//! Every filter is a plain O(n) pass over the in-memory list. A filter with an
//! empty search and every selection at `"all"` returns the list unchanged.

pub mod filters;
pub mod sorts;

pub use filters::{
    ProjectFilter, SearchTerm, Selection, StockFilter, StockLevel, UserFilter, ViewFilter, ALL,
};
pub use sorts::{locale_cmp, sort_stock, SortDirection};
