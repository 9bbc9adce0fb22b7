//! In-memory repositories backing the dashboard

pub mod resource;

pub use resource::{ResourceTable, StatusCounts, TableError};
