//! View models for the admin pages

use crate::{
    models::{ResourceFilter, ResourceRecord, ResourceStatus},
    repositories::ResourceTable,
};

/// Error text shown under the login form
pub const LOGIN_ERROR_MESSAGE: &str = "Invalid email or password";

/// Login form state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginView {
    pub error_visible: bool,
    pub error_message: String,
}

impl LoginView {
    pub fn rejected() -> Self {
        Self {
            error_visible: true,
            error_message: LOGIN_ERROR_MESSAGE.to_string(),
        }
    }
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRow {
    pub id: u64,
    pub title: String,
    pub artist: String,
    pub category: &'static str,
    pub upload_date: String,
    pub status: &'static str,
    pub audio_url: String,
    pub can_approve: bool,
    pub can_block: bool,
}

impl From<&ResourceRecord> for ResourceRow {
    fn from(record: &ResourceRecord) -> Self {
        let pending = record.status == ResourceStatus::Pending;
        Self {
            id: record.id,
            title: record.title.clone(),
            artist: record.artist.clone(),
            category: record.category.label(),
            upload_date: record.rendered_date(),
            status: record.status.label(),
            audio_url: record.audio_url.clone(),
            can_approve: pending,
            can_block: pending,
        }
    }
}

impl ResourceTable {
    /// Render the rows passing `filter`
    pub fn rows(&self, filter: &ResourceFilter) -> Vec<ResourceRow> {
        self.filter(filter).into_iter().map(ResourceRow::from).collect()
    }
}
