//! Admin dashboard models

pub mod resource;

// Re-export for convenience
pub use resource::{Category, NewResource, ResourceFilter, ResourceRecord, ResourceStatus};
