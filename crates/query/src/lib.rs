//! `stockboard-query` — client-side filtering, search and pagination for the
//! product inventory table.
//!
//! The crate takes an already-loaded product collection and turns the user's
//! selections into the visible page:
//!
//! - [`filter`]: three independent multi-select sets (category, status, supplier)
//! - [`search`]: a literal, case-insensitive term matched against name and SKU
//! - [`pagination`]: page index/size with clamping instead of errors
//! - [`engine`]: the pure evaluation plus a memoizing wrapper
//! - [`table`]: one mounted table's state, with change notifications
//!
//! No I/O happens here. Fetching and persisting products, authentication and
//! rendering are the caller's business.

pub mod badges;
pub mod config;
pub mod engine;
pub mod filter;
pub mod pagination;
pub mod search;
pub mod table;

#[cfg(test)]
mod test_support;

pub use badges::{FilterBadge, filter_badges};
pub use config::{ConfigError, TableConfig};
pub use engine::{QueryEngine, QueryResult, evaluate};
pub use filter::{Dimension, FilterCounts, FilterSet, FilterSets};
pub use pagination::{PageInfo, PageSize, PaginationState};
pub use search::SearchTerm;
pub use table::{ProductTable, Session, TableChange};
