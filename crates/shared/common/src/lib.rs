//! Common utilities shared across the catalog crates.
//!
//! This crate provides:
//! - Unified application error handling with HTTP status mapping
//! - Pagination types for list operations
//! - Common response bodies

pub mod error;
pub mod pagination;
pub mod response;

pub use error::{AppError, AppResult, OptionExt, ResultExt};
pub use pagination::{
    ListOptions, Page, Paginated, PaginationMeta, SortOrder, DEFAULT_PAGE_NUMBER,
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
pub use response::MessageResponse;
