//! Admin dashboard for the Music Portal
//!
//! Login gate, page-load session check, sidebar state, and the in-memory
//! resource moderation table.

pub mod context;
pub mod credentials;
pub mod gate;
pub mod models;
pub mod repositories;
pub mod session;
pub mod sidebar;
pub mod view;

pub use context::{AdminContext, AdminError};
pub use credentials::{AdminCredentials, CredentialError};
pub use gate::GateOutcome;
pub use models::{Category, NewResource, ResourceFilter, ResourceRecord, ResourceStatus};
pub use repositories::{ResourceTable, StatusCounts, TableError};
pub use session::{AdminSession, Page, PageAccess};
pub use sidebar::{Section, SidebarState};
pub use view::{LoginView, ResourceRow};
